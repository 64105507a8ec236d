use std::fs::{remove_dir_all, remove_file};
use std::path::{Path, PathBuf};

use base64::prelude::BASE64_STANDARD as BASE64;
use base64::Engine;
use chrono::NaiveDateTime;

use crate::model::repository::DiscardRecord;
use crate::repository::initialize_db;
use crate::storage::photo_dir;

pub mod profile_handler_tests;

#[cfg(test)]
pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().replace("::", "_")
}

#[cfg(test)]
pub fn refresh_db() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
    initialize_db().unwrap();
}

#[cfg(test)]
pub fn remove_photos() {
    let photo_path = photo_dir();
    let photo_path = Path::new(photo_path.as_str());
    if photo_path.exists() {
        remove_dir_all(photo_path).unwrap_or(());
    }
}

/// the per-thread directory mirror tests point the session mirror at
#[cfg(test)]
pub fn mirror_root_dir() -> PathBuf {
    let root = PathBuf::from(format!("./{}_mirror", current_thread_name()));
    std::fs::create_dir_all(&root).unwrap();
    root
}

#[cfg(test)]
pub fn test_record(owner: &str, reason: &str, date: NaiveDateTime) -> DiscardRecord {
    DiscardRecord {
        id: None,
        owner: String::from(owner),
        reason: String::from(reason),
        comment: String::new(),
        date,
        storage_path: format!("{owner}/{}.jpg", date.and_utc().timestamp_millis()),
        mirror_file: None,
    }
}

/// a decodable data uri whose payload is the passed text, so tests can tell
/// photos apart without real image bytes
#[cfg(test)]
pub fn data_uri(contents: &str) -> String {
    format!("data:image/jpeg;base64,{}", BASE64.encode(contents))
}

#[cfg(test)]
pub fn cleanup() {
    let thread_name = current_thread_name();
    remove_photos();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
    remove_dir_all(Path::new(format!("./{thread_name}_mirror").as_str())).unwrap_or(());
}
