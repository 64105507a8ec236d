use std::string::ToString;

use config::{Config, ConfigError};
use once_cell::sync::Lazy;
use rocket::serde::Deserialize;

/// which object store implementation holds photo binaries
#[derive(Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum StorageBackend {
    /// photos live as plain files under the photo directory
    Disk,
    /// photos live in a blob table inside the metadata database
    Embedded,
}

#[derive(Deserialize, Clone)]
#[serde(crate = "rocket::serde")]
pub struct DbConfig {
    pub location: String,
}

#[derive(Deserialize, Clone)]
#[serde(crate = "rocket::serde")]
pub struct StorageConfig {
    pub backend: StorageBackend,
    #[serde(rename = "photodirectory")]
    pub photo_directory: String,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone)]
#[serde(crate = "rocket::serde")]
pub struct DeclutterConfig {
    pub database: DbConfig,
    pub storage: StorageConfig,
}

/// Parses the config file located at ./DeclutterLog.toml, if it exists.
/// If this fails to parse the file, the application will panic
pub fn parse_config() -> DeclutterConfig {
    let builder = Config::builder()
        .add_source(config::File::with_name("./DeclutterLog.toml"))
        .build();
    // some errors are fine, such as not found
    if let Err(ConfigError::Foreign(e)) = builder {
        let message = e.to_string();
        if message.contains("not found") {
            log::warn!("No config file found. Continuing startup...");
            return CONFIG_DEFAULT.clone();
        }
        panic!("Failed to parse config file. Exception is {e}");
        // basically everything else is unrecoverable, though
    } else if let Err(e) = builder {
        log::error!("Failed to parse config file. Exception is {e}");
        panic!("Failed to parse config file. Exception is {e}");
    }
    let settings = builder.unwrap();
    settings.try_deserialize().unwrap_or(CONFIG_DEFAULT.clone())
}

/// global variable for config, that way it doesn't need to be repeatedly parsed
pub static DECLUTTER_CONFIG: Lazy<DeclutterConfig> = Lazy::new(parse_config);
static CONFIG_DEFAULT: Lazy<DeclutterConfig> = Lazy::new(|| DeclutterConfig {
    database: DbConfig {
        location: "./db.sqlite".to_string(),
    },
    storage: StorageConfig {
        backend: StorageBackend::Disk,
        photo_directory: "./photos".to_string(),
    },
});
