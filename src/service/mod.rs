pub mod export_service;
pub mod mirror_service;
pub mod profile_service;
pub mod record_service;
