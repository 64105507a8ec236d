pub mod export_errors;
pub mod mirror_errors;
pub mod profile_errors;
pub mod record_errors;
