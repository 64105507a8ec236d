use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::storage::{ObjectStore, ObjectStoreError, PhotoObject};

/// keeps photos as plain files under a root directory, one folder per owner
pub struct DiskObjectStore {
    root: PathBuf,
}

impl DiskObjectStore {
    pub fn new(root: String) -> DiskObjectStore {
        DiskObjectStore {
            root: PathBuf::from(root),
        }
    }

    /// joins the relative object path onto our root. Paths come from our own
    /// records, but a stray `..` segment still gets rejected instead of walked
    fn resolve(&self, path: &str) -> Result<PathBuf, ObjectStoreError> {
        if path.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(ObjectStoreError::NotFound);
        }
        Ok(self.root.join(path))
    }
}

impl ObjectStore for DiskObjectStore {
    fn put(&self, path: &str, _mime: &str, bytes: &[u8]) -> Result<(), ObjectStoreError> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|_| ObjectStoreError::IoError)?;
        }
        fs::write(target, bytes).map_err(|_| ObjectStoreError::IoError)
    }

    fn get(&self, path: &str) -> Result<PhotoObject, ObjectStoreError> {
        let target = self.resolve(path)?;
        match fs::read(&target) {
            Ok(bytes) => Ok(PhotoObject {
                mime: mime_for(&target),
                bytes,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ObjectStoreError::NotFound),
            Err(_) => Err(ObjectStoreError::IoError),
        }
    }

    fn delete(&self, path: &str) -> Result<(), ObjectStoreError> {
        let target = self.resolve(path)?;
        match fs::remove_file(target) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ObjectStoreError::NotFound),
            Err(_) => Err(ObjectStoreError::IoError),
        }
    }
}

/// the store writes whatever it was handed under a `.jpg` name, so the
/// extension is the only mime hint available on the way back out
fn mime_for(path: &Path) -> String {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let mime = match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    };
    mime.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::photo_dir;
    use crate::test::cleanup;

    #[test]
    fn put_then_get_round_trip() {
        let store = DiskObjectStore::new(photo_dir());
        store.put("someone/1.jpg", "image/jpeg", b"not really a jpg").unwrap();
        let photo = store.get("someone/1.jpg").unwrap();
        assert_eq!("image/jpeg", photo.mime);
        assert_eq!(b"not really a jpg".to_vec(), photo.bytes);
        cleanup();
    }

    #[test]
    fn get_missing_object() {
        let store = DiskObjectStore::new(photo_dir());
        assert_eq!(Err(ObjectStoreError::NotFound), store.get("nobody/1.jpg"));
        cleanup();
    }

    #[test]
    fn delete_removes_object() {
        let store = DiskObjectStore::new(photo_dir());
        store.put("someone/2.jpg", "image/jpeg", b"bytes").unwrap();
        store.delete("someone/2.jpg").unwrap();
        assert_eq!(Err(ObjectStoreError::NotFound), store.get("someone/2.jpg"));
        cleanup();
    }

    #[test]
    fn parent_traversal_rejected() {
        let store = DiskObjectStore::new(photo_dir());
        assert_eq!(
            Err(ObjectStoreError::NotFound),
            store.get("../outside/1.jpg")
        );
        cleanup();
    }
}
