use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::NaiveDateTime;

use crate::model::error::mirror_errors::SetMirrorError;
use crate::util::photo_file_name;

/// the user-granted mirror directory. Session-scoped: it lives in
/// rocket-managed state and has to be granted again after a restart
pub struct MirrorState(RwLock<Option<PathBuf>>);

impl MirrorState {
    pub fn new() -> MirrorState {
        MirrorState(RwLock::new(None))
    }

    pub fn root(&self) -> Option<PathBuf> {
        self.0.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn set(&self, root: Option<PathBuf>) {
        *self.0.write().unwrap_or_else(|e| e.into_inner()) = root;
    }
}

/// points the mirror at a directory that already exists on this machine
pub fn set_root(state: &MirrorState, path: &str) -> Result<PathBuf, SetMirrorError> {
    let root = PathBuf::from(path);
    match fs::metadata(&root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(SetMirrorError::NotADirectory),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(SetMirrorError::PermissionDenied)
        }
        Err(_) => return Err(SetMirrorError::NotADirectory),
    };
    state.set(Some(root.clone()));
    log::info!("Mirror directory set to {}", root.display());
    Ok(root)
}

/// writes a secondary copy of the photo under `<root>/<owner>/`. Every
/// failure is logged and swallowed; the mirror must never fail the primary
/// save. Returns the file name that was written, for cleanup on delete
pub fn write_photo(
    root: &Path,
    owner: &str,
    date: &NaiveDateTime,
    reason: &str,
    bytes: &[u8],
) -> Option<String> {
    let owner_dir = root.join(owner);
    if let Err(e) = fs::create_dir_all(&owner_dir) {
        log::warn!(
            "Could not create mirror directory {}: {e:?}",
            owner_dir.display()
        );
        return None;
    }
    let file_name = photo_file_name(date, reason);
    match fs::write(owner_dir.join(&file_name), bytes) {
        Ok(()) => {
            log::info!("Mirrored photo to {owner}/{file_name}");
            Some(file_name)
        }
        Err(e) => {
            log::warn!("Could not mirror photo {owner}/{file_name}: {e:?}");
            None
        }
    }
}

/// removes the mirrored copy of a deleted record, if the file is still there
pub fn delete_photo(root: &Path, owner: &str, file_name: &str) {
    let target = root.join(owner).join(file_name);
    if let Err(e) = fs::remove_file(&target) {
        log::warn!("Could not delete mirror file {}: {e:?}", target.display());
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::test::{cleanup, mirror_root_dir};

    #[test]
    fn set_root_rejects_missing_directory() {
        let state = MirrorState::new();
        let result = set_root(&state, "./definitely/not/here");
        assert_eq!(Err(SetMirrorError::NotADirectory), result);
        assert_eq!(None, state.root());
    }

    #[test]
    fn write_photo_creates_owner_directory() {
        let root = mirror_root_dir();
        let date = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 30, 7)
            .unwrap();
        let written = write_photo(&root, "someone", &date, "unused mug", b"bytes").unwrap();
        assert_eq!("20240305_093007_unused mug.jpg", written);
        assert!(root.join("someone").join(&written).exists());
        cleanup();
    }

    #[test]
    fn write_photo_swallows_failures() {
        // a file where the owner directory should be makes create_dir_all fail
        let root = mirror_root_dir();
        fs::write(root.join("someone"), b"in the way").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 30, 7)
            .unwrap();
        assert_eq!(
            None,
            write_photo(&root, "someone", &date, "unused mug", b"bytes")
        );
        cleanup();
    }
}
