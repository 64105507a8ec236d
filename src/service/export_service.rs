use std::backtrace::Backtrace;
use std::io::{Cursor, Write};

use chrono::Local;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::model::error::export_errors::ExportError;
use crate::repository::{open_connection, record_repository};
use crate::storage::{object_store, ObjectStoreError};
use crate::util::photo_file_name;

/// bundles every stored photo into a zip, one folder per profile. Photos
/// whose blob can't be read are skipped with a warning instead of failing
/// the whole export
pub fn export_archive() -> Result<(String, Vec<u8>), ExportError> {
    let con = open_connection();
    let records = record_repository::get_all(&con);
    con.close().unwrap();
    let records = match records {
        Ok(records) => records,
        Err(e) => {
            log::error!(
                "Failed to read records for export! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(ExportError::DbError);
        }
    };
    if records.is_empty() {
        return Err(ExportError::NoPhotos);
    }
    let store = object_store();
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    let mut archived = 0u32;
    for record in records {
        let photo = match store.get(&record.storage_path) {
            Ok(photo) => photo,
            Err(ObjectStoreError::NotFound) => {
                log::warn!("Skipping missing photo {} during export", record.storage_path);
                continue;
            }
            Err(e) => {
                log::warn!(
                    "Skipping unreadable photo {} during export: {e:?}",
                    record.storage_path
                );
                continue;
            }
        };
        let entry = format!("{}/{}", record.owner, photo_file_name(&record.date, &record.reason));
        let written = writer
            .start_file(entry.as_str(), options)
            .and_then(|()| writer.write_all(&photo.bytes).map_err(zip::result::ZipError::from));
        if let Err(e) = written {
            log::error!(
                "Failed to add {entry} to the export archive! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(ExportError::ArchiveError);
        }
        archived += 1;
    }
    if archived == 0 {
        return Err(ExportError::NoPhotos);
    }
    let cursor = match writer.finish() {
        Ok(cursor) => cursor,
        Err(e) => {
            log::error!(
                "Failed to finish the export archive! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(ExportError::ArchiveError);
        }
    };
    let file_name = format!("declutter_backup_{}.zip", Local::now().format("%Y-%m-%d"));
    log::info!("Exported {archived} photos to {file_name}");
    Ok((file_name, cursor.into_inner()))
}
