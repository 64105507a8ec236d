use std::backtrace::Backtrace;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Local;

use crate::image_codec;
use crate::model::error::record_errors::{
    CreateRecordError, DeleteRecordError, GetRecordError, GetRecordsError, PurgeRecordsError,
    UpdateRecordError,
};
use crate::model::repository::DiscardRecord;
use crate::model::response::RecordApi;
use crate::repository::{open_connection, record_repository};
use crate::service::mirror_service;
use crate::service::profile_service;
use crate::storage::{object_store, ObjectStoreError};

/// the exact phrase a purge request has to carry before anything is removed
pub static PURGE_CONFIRMATION: &str = "DELETE";

static PHOTO_SEQ: AtomicU32 = AtomicU32::new(0);

/// photos created in the same millisecond must not collide, so the timestamp
/// gets a process-wide sequence number appended
fn new_storage_path(owner: &str) -> String {
    let seq = PHOTO_SEQ.fetch_add(1, Ordering::Relaxed);
    format!(
        "{owner}/{}-{seq}.jpg",
        Local::now().naive_local().and_utc().timestamp_millis()
    )
}

/// saves the photo first and the metadata row second, so a crash in between
/// leaves an orphaned blob instead of a record pointing at nothing
pub fn create_record(
    request: RecordApi,
    mirror_root: Option<&Path>,
) -> Result<RecordApi, CreateRecordError> {
    if !request.image.starts_with("data:") {
        return Err(CreateRecordError::MissingImage);
    }
    let decoded = match image_codec::decode_data_uri(&request.image) {
        Ok(decoded) => decoded,
        Err(e) => {
            log::warn!("Rejected a record with an undecodable image: {e:?}");
            return Err(CreateRecordError::InvalidImage);
        }
    };
    let owner = match request.owner {
        Some(owner) if !owner.trim().is_empty() => owner,
        _ => profile_service::current_profile().map_err(|_| CreateRecordError::DbError)?,
    };
    let date = request.date.unwrap_or_else(|| Local::now().naive_local());
    let storage_path = new_storage_path(&owner);
    if let Err(e) = object_store().put(&storage_path, &decoded.mime, &decoded.bytes) {
        log::error!(
            "Failed to write photo {storage_path}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(CreateRecordError::FailWriteBlob);
    }
    let mirror_file =
        mirror_root.and_then(|root| mirror_service::write_photo(root, &owner, &date, &request.reason, &decoded.bytes));
    let mut record = DiscardRecord {
        id: None,
        owner,
        reason: request.reason,
        comment: request.comment,
        date,
        storage_path: storage_path.clone(),
        mirror_file,
    };
    let con = open_connection();
    let created = record_repository::create_record(&record, &con);
    con.close().unwrap();
    match created {
        Ok(id) => {
            record.id = Some(id);
            Ok(RecordApi::from(record))
        }
        Err(e) => {
            // the blob is orphaned now; leave it and say so rather than risk
            // a second failing call
            log::error!(
                "Failed to save record metadata, photo {storage_path} is orphaned! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(CreateRecordError::DbError)
        }
    }
}

/// records for one profile, newest first. Without an owner the current
/// profile is used
pub fn get_records(owner: Option<String>) -> Result<Vec<RecordApi>, GetRecordsError> {
    let owner = match owner {
        Some(owner) => owner,
        None => profile_service::current_profile().map_err(|_| GetRecordsError::DbError)?,
    };
    let con = open_connection();
    let records = record_repository::get_by_owner(&owner, &con);
    con.close().unwrap();
    match records {
        Ok(records) => Ok(records.into_iter().map(RecordApi::from).collect()),
        Err(e) => {
            log::error!(
                "Failed to list records for {owner}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetRecordsError::DbError)
        }
    }
}

/// a single record with its photo inlined as a data uri, so the detail view
/// needs no second request. Falls back to the photo route if the blob can't
/// be read
pub fn get_record_detail(id: u32) -> Result<RecordApi, GetRecordError> {
    let con = open_connection();
    let record = record_repository::get_by_id(id, &con);
    con.close().unwrap();
    let record = match record {
        Ok(record) => record,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Err(GetRecordError::NotFound),
        Err(e) => {
            log::error!(
                "Failed to fetch record {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(GetRecordError::DbError);
        }
    };
    let mut api = RecordApi::from(record);
    let storage_path = api.image.trim_start_matches("/photos/").to_string();
    match object_store().get(&storage_path) {
        Ok(photo) => api.image = image_codec::encode_data_uri(&photo.mime, &photo.bytes),
        Err(e) => {
            log::warn!("Failed to inline photo {storage_path}, leaving the url: {e:?}");
        }
    }
    Ok(api)
}

/// updates reason and comment, and replaces the photo when the request
/// carries a new data uri. Owner and date never change after creation
pub fn update_record(id: u32, request: RecordApi) -> Result<RecordApi, UpdateRecordError> {
    let con = open_connection();
    let existing = record_repository::get_by_id(id, &con);
    con.close().unwrap();
    let existing = match existing {
        Ok(record) => record,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Err(UpdateRecordError::NotFound),
        Err(e) => {
            log::error!(
                "Failed to fetch record {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(UpdateRecordError::DbError);
        }
    };
    let mut storage_path = existing.storage_path.clone();
    if request.image.starts_with("data:") {
        let decoded = match image_codec::decode_data_uri(&request.image) {
            Ok(decoded) => decoded,
            Err(e) => {
                log::warn!("Rejected a replacement image for record {id}: {e:?}");
                return Err(UpdateRecordError::InvalidImage);
            }
        };
        storage_path = new_storage_path(&existing.owner);
        if let Err(e) = object_store().put(&storage_path, &decoded.mime, &decoded.bytes) {
            log::error!(
                "Failed to write photo {storage_path}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(UpdateRecordError::FailWriteBlob);
        }
        if let Err(e) = object_store().delete(&existing.storage_path) {
            log::warn!(
                "Failed to remove replaced photo {}: {e:?}",
                existing.storage_path
            );
        }
    }
    let updated = DiscardRecord {
        id: Some(id),
        owner: existing.owner,
        reason: request.reason,
        comment: request.comment,
        date: existing.date,
        storage_path,
        mirror_file: existing.mirror_file,
    };
    let con = open_connection();
    let result = record_repository::update_record(&updated, &con);
    con.close().unwrap();
    match result {
        Ok(()) => Ok(RecordApi::from(updated)),
        Err(e) => {
            log::error!(
                "Failed to update record {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(UpdateRecordError::DbError)
        }
    }
}

/// removes the record row, then its photo and mirror copy best-effort
pub fn delete_record(id: u32, mirror_root: Option<&Path>) -> Result<(), DeleteRecordError> {
    let con = open_connection();
    let removed = record_repository::delete_by_id(id, &con);
    con.close().unwrap();
    let removed = match removed {
        Ok(record) => record,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Err(DeleteRecordError::NotFound),
        Err(e) => {
            log::error!(
                "Failed to delete record {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(DeleteRecordError::DbError);
        }
    };
    remove_photo(&removed.storage_path);
    if let (Some(root), Some(file_name)) = (mirror_root, removed.mirror_file.as_deref()) {
        mirror_service::delete_photo(root, &removed.owner, file_name);
    }
    Ok(())
}

/// removes every record one profile owns along with the stored photos,
/// returning how many rows went away
pub fn purge_records(owner: &str) -> Result<u32, PurgeRecordsError> {
    let con = open_connection();
    let result = record_repository::get_by_owner(owner, &con).and_then(|records| {
        record_repository::delete_by_owner(owner, &con).map(|count| (records, count))
    });
    con.close().unwrap();
    match result {
        Ok((records, count)) => {
            for record in records {
                remove_photo(&record.storage_path);
            }
            log::info!("Purged {count} records for {owner}");
            Ok(count)
        }
        Err(e) => {
            log::error!(
                "Failed to purge records for {owner}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(PurgeRecordsError::DbError)
        }
    }
}

fn remove_photo(storage_path: &str) {
    match object_store().delete(storage_path) {
        Ok(()) | Err(ObjectStoreError::NotFound) => {}
        Err(e) => log::warn!("Failed to remove photo {storage_path}: {e:?}"),
    }
}
