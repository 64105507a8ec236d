use std::backtrace::Backtrace;

use crate::repository::{open_connection, photo_repository};
use crate::storage::{ObjectStore, ObjectStoreError, PhotoObject};

/// keeps photos in the Photos blob table of the metadata database, so the
/// whole log lives in one file
pub struct DbObjectStore;

impl ObjectStore for DbObjectStore {
    fn put(&self, path: &str, mime: &str, bytes: &[u8]) -> Result<(), ObjectStoreError> {
        let con = open_connection();
        let result = photo_repository::save_photo(path, mime, bytes, &con);
        con.close().unwrap();
        if let Err(e) = result {
            log::error!(
                "Failed to write photo blob at {path}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(ObjectStoreError::DbError);
        }
        Ok(())
    }

    fn get(&self, path: &str) -> Result<PhotoObject, ObjectStoreError> {
        let con = open_connection();
        let result = match photo_repository::get_photo(path, &con) {
            Ok(row) => Ok(PhotoObject {
                mime: row.mime,
                bytes: row.bytes,
            }),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(ObjectStoreError::NotFound),
            Err(e) => {
                log::error!(
                    "Failed to read photo blob at {path}! Error is {e:?}\n{}",
                    Backtrace::force_capture()
                );
                Err(ObjectStoreError::DbError)
            }
        };
        con.close().unwrap();
        result
    }

    fn delete(&self, path: &str) -> Result<(), ObjectStoreError> {
        let con = open_connection();
        let result = photo_repository::delete_photo(path, &con);
        con.close().unwrap();
        if let Err(e) = result {
            log::error!(
                "Failed to delete photo blob at {path}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(ObjectStoreError::DbError);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{cleanup, refresh_db};

    #[test]
    fn put_then_get_round_trip() {
        refresh_db();
        let store = DbObjectStore;
        store.put("someone/1.jpg", "image/png", b"blob bytes").unwrap();
        let photo = store.get("someone/1.jpg").unwrap();
        assert_eq!("image/png", photo.mime);
        assert_eq!(b"blob bytes".to_vec(), photo.bytes);
        cleanup();
    }

    #[test]
    fn put_overwrites_existing_path() {
        refresh_db();
        let store = DbObjectStore;
        store.put("someone/1.jpg", "image/jpeg", b"old").unwrap();
        store.put("someone/1.jpg", "image/jpeg", b"new").unwrap();
        let photo = store.get("someone/1.jpg").unwrap();
        assert_eq!(b"new".to_vec(), photo.bytes);
        cleanup();
    }

    #[test]
    fn get_missing_object() {
        refresh_db();
        let store = DbObjectStore;
        assert_eq!(Err(ObjectStoreError::NotFound), store.get("nobody/1.jpg"));
        cleanup();
    }
}
