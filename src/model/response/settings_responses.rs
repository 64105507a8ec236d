use rocket::http::Header;
use rocket::serde::json::Json;

use crate::model::response::{BasicMessage, MirrorApi};

type NoContent = ();

/// a zip archive offered as a browser download
#[derive(Responder)]
#[response(status = 200, content_type = "application/zip")]
pub struct ZipDownload {
    pub bytes: Vec<u8>,
    pub disposition: Header<'static>,
}

impl ZipDownload {
    pub fn new(file_name: String, bytes: Vec<u8>) -> ZipDownload {
        ZipDownload {
            bytes,
            disposition: Header::new(
                "Content-Disposition",
                format!(r#"attachment; filename="{file_name}""#),
            ),
        }
    }
}

#[derive(Responder)]
pub enum ExportResponse {
    #[response(status = 200)]
    Success(ZipDownload),
    #[response(status = 404, content_type = "json")]
    NoPhotos(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetMirrorResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<MirrorApi>),
}

#[derive(Responder)]
pub enum SetMirrorResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<MirrorApi>),
    #[response(status = 400, content_type = "json")]
    NotADirectory(Json<BasicMessage>),
    #[response(status = 403, content_type = "json")]
    PermissionDenied(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum ClearMirrorResponse {
    #[response(status = 204)]
    Cleared(NoContent),
}
