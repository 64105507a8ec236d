use std::path::PathBuf;

use rocket::http::ContentType;

use crate::model::response::record_responses::DownloadPhotoResponse;
use crate::model::response::BasicMessage;
use crate::storage::{object_store, ObjectStoreError};

/// serves stored photos back out under the same `<owner>/<file>` path the
/// record api hands to clients
#[get("/<path..>")]
pub fn download_photo(path: PathBuf) -> DownloadPhotoResponse {
    let storage_path = path.to_string_lossy().replace('\\', "/");
    return match object_store().get(&storage_path) {
        Ok(photo) => {
            let content_type =
                ContentType::parse_flexible(&photo.mime).unwrap_or(ContentType::JPEG);
            DownloadPhotoResponse::Success((content_type, photo.bytes))
        }
        Err(ObjectStoreError::NotFound) => DownloadPhotoResponse::NotFound(BasicMessage::new(
            "The photo with the passed path could not be found.",
        )),
        Err(_) => DownloadPhotoResponse::Failure(BasicMessage::new(
            "Failed to read the photo. Check server logs for details",
        )),
    };
}
