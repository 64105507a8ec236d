use rocket::serde::json::Json;
use rocket::State;

use crate::model::error::export_errors::ExportError;
use crate::model::error::mirror_errors::SetMirrorError;
use crate::model::request::MirrorRequest;
use crate::model::response::settings_responses::{
    ClearMirrorResponse, ExportResponse, GetMirrorResponse, SetMirrorResponse, ZipDownload,
};
use crate::model::response::{BasicMessage, MirrorApi};
use crate::service::export_service;
use crate::service::mirror_service::{self, MirrorState};

#[get("/mirror")]
pub fn get_mirror(mirror: &State<MirrorState>) -> GetMirrorResponse {
    GetMirrorResponse::Success(Json::from(MirrorApi {
        path: mirror.root().map(|root| root.display().to_string()),
    }))
}

/// points the mirror at a local directory for the rest of the session. New
/// photos get a second copy written there
#[post("/mirror", data = "<request>")]
pub fn set_mirror(request: Json<MirrorRequest>, mirror: &State<MirrorState>) -> SetMirrorResponse {
    return match mirror_service::set_root(mirror, &request.path) {
        Ok(root) => SetMirrorResponse::Success(Json::from(MirrorApi {
            path: Some(root.display().to_string()),
        })),
        Err(SetMirrorError::NotADirectory) => SetMirrorResponse::NotADirectory(BasicMessage::new(
            "The passed path doesn't exist or isn't a directory.",
        )),
        Err(SetMirrorError::PermissionDenied) => SetMirrorResponse::PermissionDenied(
            BasicMessage::new("The passed directory can't be written to."),
        ),
    };
}

#[delete("/mirror")]
pub fn clear_mirror(mirror: &State<MirrorState>) -> ClearMirrorResponse {
    mirror.set(None);
    ClearMirrorResponse::Cleared(())
}

/// every stored photo as a zip, one folder per profile
#[get("/")]
pub fn export_photos() -> ExportResponse {
    return match export_service::export_archive() {
        Ok((file_name, bytes)) => ExportResponse::Success(ZipDownload::new(file_name, bytes)),
        Err(ExportError::NoPhotos) => ExportResponse::NoPhotos(BasicMessage::new(
            "There are no photos to export yet.",
        )),
        Err(ExportError::DbError) => ExportResponse::Failure(BasicMessage::new(
            "Failed to pull records for the export. Check server logs for details",
        )),
        Err(ExportError::ArchiveError) => ExportResponse::Failure(BasicMessage::new(
            "Failed to build the export archive. Check server logs for details",
        )),
    };
}
