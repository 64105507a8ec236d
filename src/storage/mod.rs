#[cfg(not(test))]
use crate::config::{StorageBackend, DECLUTTER_CONFIG};

pub mod disk;
pub mod embedded;

pub use disk::DiskObjectStore;
pub use embedded::DbObjectStore;

/// a photo binary plus the mime type to serve it with
#[derive(Debug, PartialEq)]
pub struct PhotoObject {
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, PartialEq)]
pub enum ObjectStoreError {
    /// no object lives at the passed path
    NotFound,
    /// filesystem-level failure
    IoError,
    /// database-level failure
    DbError,
}

/// path-addressable store for photo binaries. Paths are always relative,
/// `<owner>/<file>.jpg`, no matter which implementation is active
pub trait ObjectStore {
    fn put(&self, path: &str, mime: &str, bytes: &[u8]) -> Result<(), ObjectStoreError>;
    fn get(&self, path: &str) -> Result<PhotoObject, ObjectStoreError>;
    fn delete(&self, path: &str) -> Result<(), ObjectStoreError>;
}

/// the directory photos live under when the disk backend is active
#[cfg(not(test))]
pub fn photo_dir() -> String {
    DECLUTTER_CONFIG.storage.photo_directory.clone()
}

#[cfg(test)]
pub fn photo_dir() -> String {
    format!("./{}_photos", crate::test::current_thread_name())
}

/// hands back the object store picked by the config file. The stores are
/// stateless, so a fresh instance per call keeps this as simple as
/// [`crate::repository::open_connection`]
#[cfg(not(test))]
pub fn object_store() -> Box<dyn ObjectStore> {
    match DECLUTTER_CONFIG.storage.backend {
        StorageBackend::Disk => Box::new(DiskObjectStore::new(photo_dir())),
        StorageBackend::Embedded => Box::new(DbObjectStore),
    }
}

/// tests always run against a disk store rooted in a per-thread directory
#[cfg(test)]
pub fn object_store() -> Box<dyn ObjectStore> {
    Box::new(DiskObjectStore::new(photo_dir()))
}
