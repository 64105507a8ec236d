pub mod api_handler;
pub mod photo_handler;
pub mod profile_handler;
pub mod record_handler;
pub mod settings_handler;
