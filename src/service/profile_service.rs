use std::backtrace::Backtrace;

use rocket::serde::json::serde_json;
use rusqlite::Connection;

use crate::model::error::profile_errors::{
    AddProfileError, DeleteProfileError, GetProfilesError, SelectProfileError,
};
use crate::model::response::{ProfileApi, ProfilesApi};
use crate::repository::{metadata_repository, open_connection, record_repository};
use crate::service::record_service;

/// the profile that exists from first launch and can never be removed
pub static SEED_PROFILE: &str = "me";

/// fixed Metadata keys the profile state lives under
static PROFILES_KEY: &str = "profiles";
static CURRENT_PROFILE_KEY: &str = "current_profile";

/// the stored profile list; the seed profile is always present and first
fn read_names(con: &Connection) -> Result<Vec<String>, rusqlite::Error> {
    let mut names: Vec<String> = match metadata_repository::get_value(PROFILES_KEY, con) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        Err(rusqlite::Error::QueryReturnedNoRows) => Vec::new(),
        Err(e) => return Err(e),
    };
    if !names.iter().any(|n| n == SEED_PROFILE) {
        names.insert(0, SEED_PROFILE.to_string());
    }
    Ok(names)
}

fn write_names(names: &[String], con: &Connection) -> Result<(), rusqlite::Error> {
    let raw = serde_json::to_string(names).unwrap();
    metadata_repository::set_value(PROFILES_KEY, &raw, con)
}

fn current_name(con: &Connection) -> Result<String, rusqlite::Error> {
    match metadata_repository::get_value(CURRENT_PROFILE_KEY, con) {
        Ok(name) => Ok(name),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(SEED_PROFILE.to_string()),
        Err(e) => Err(e),
    }
}

fn summary(con: &Connection) -> Result<ProfilesApi, rusqlite::Error> {
    let names = read_names(con)?;
    let current = current_name(con)?;
    let mut profiles = Vec::with_capacity(names.len());
    for name in names {
        let records = record_repository::count_by_owner(&name, con)?;
        profiles.push(ProfileApi { name, records });
    }
    Ok(ProfilesApi { current, profiles })
}

/// the profile new records are assigned to when a request doesn't name one
pub fn current_profile() -> Result<String, GetProfilesError> {
    let con = open_connection();
    let result = current_name(&con);
    con.close().unwrap();
    match result {
        Ok(name) => Ok(name),
        Err(e) => {
            log::error!(
                "Failed to read the current profile! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetProfilesError::DbError)
        }
    }
}

/// every profile with its record count, plus which one is selected
pub fn get_profiles() -> Result<ProfilesApi, GetProfilesError> {
    let con = open_connection();
    let result = summary(&con);
    con.close().unwrap();
    match result {
        Ok(profiles) => Ok(profiles),
        Err(e) => {
            log::error!(
                "Failed to read profiles! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetProfilesError::DbError)
        }
    }
}

/// adds a profile (if it's new) and makes it the current one, like the
/// original "add user" flow did
pub fn add_profile(name: &str) -> Result<ProfilesApi, AddProfileError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AddProfileError::EmptyName);
    }
    let con = open_connection();
    let result = add_profile_with_connection(name, &con);
    con.close().unwrap();
    result
}

fn add_profile_with_connection(
    name: &str,
    con: &Connection,
) -> Result<ProfilesApi, AddProfileError> {
    let mut names = match read_names(con) {
        Ok(names) => names,
        Err(e) => {
            log::error!(
                "Failed to read profiles! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(AddProfileError::DbError);
        }
    };
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
        if let Err(e) = write_names(&names, con) {
            log::error!(
                "Failed to save profiles! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(AddProfileError::DbError);
        }
    }
    if let Err(e) = metadata_repository::set_value(CURRENT_PROFILE_KEY, name, con) {
        log::error!(
            "Failed to set the current profile! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(AddProfileError::DbError);
    }
    summary(con).map_err(|e| {
        log::error!(
            "Failed to read profiles! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        AddProfileError::DbError
    })
}

/// makes an existing profile the current one
pub fn select_profile(name: &str) -> Result<ProfilesApi, SelectProfileError> {
    let con = open_connection();
    let names = match read_names(&con) {
        Ok(names) => names,
        Err(e) => {
            con.close().unwrap();
            log::error!(
                "Failed to read profiles! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(SelectProfileError::DbError);
        }
    };
    if !names.iter().any(|n| n == name) {
        con.close().unwrap();
        return Err(SelectProfileError::NotFound);
    }
    if let Err(e) = metadata_repository::set_value(CURRENT_PROFILE_KEY, name, &con) {
        con.close().unwrap();
        log::error!(
            "Failed to set the current profile! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(SelectProfileError::DbError);
    }
    let result = summary(&con).map_err(|e| {
        log::error!(
            "Failed to read profiles! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        SelectProfileError::DbError
    });
    con.close().unwrap();
    result
}

/// removes a profile and every record it owns. The current profile and the
/// seed profile are rejected outright
pub fn delete_profile(name: &str) -> Result<(), DeleteProfileError> {
    if name == SEED_PROFILE {
        return Err(DeleteProfileError::SeedProfile);
    }
    let con = open_connection();
    let check = current_name(&con).and_then(|current| read_names(&con).map(|names| (current, names)));
    con.close().unwrap();
    let (current, names) = match check {
        Ok(pair) => pair,
        Err(e) => {
            log::error!(
                "Failed to read profiles! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(DeleteProfileError::DbError);
        }
    };
    if name == current {
        return Err(DeleteProfileError::CurrentProfile);
    }
    if !names.iter().any(|n| n == name) {
        return Err(DeleteProfileError::NotFound);
    }
    // cascade first, so a failed purge leaves the profile visible for a retry
    let count = match record_service::purge_records(name) {
        Ok(count) => count,
        Err(e) => {
            log::error!(
                "Failed to purge records while deleting profile {name}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(DeleteProfileError::PurgeFailed);
        }
    };
    log::info!("Removed {count} records while deleting profile {name}");
    let remaining: Vec<String> = names.into_iter().filter(|n| n != name).collect();
    let con = open_connection();
    let result = write_names(&remaining, &con);
    con.close().unwrap();
    if let Err(e) = result {
        log::error!(
            "Failed to save profiles! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(DeleteProfileError::DbError);
    }
    Ok(())
}
