#[macro_use]
extern crate rocket;

use std::fs;
use std::time::SystemTime;

use rocket::{Build, Rocket};

use handler::{
    api_handler::api_version,
    photo_handler::download_photo,
    profile_handler::{add_profile, delete_profile, get_profiles, select_profile},
    record_handler::{
        create_record, delete_record, get_record, get_records, purge_records, update_record,
    },
    settings_handler::{clear_mirror, export_photos, get_mirror, set_mirror},
};

use crate::repository::initialize_db;
use crate::service::mirror_service::MirrorState;
use crate::storage::photo_dir;

mod config;
mod handler;
mod image_codec;
mod model;
mod repository;
mod service;
mod storage;
#[cfg(test)]
mod test;
mod util;

fn configure_logging() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
        .ok();
}

#[launch]
fn rocket() -> Rocket<Build> {
    configure_logging();
    initialize_db().unwrap();
    fs::create_dir_all(photo_dir()).unwrap();
    rocket::build()
        .manage(MirrorState::new())
        .mount("/api", routes![api_version])
        .mount(
            "/items",
            routes![
                create_record,
                get_records,
                get_record,
                update_record,
                delete_record,
                purge_records
            ],
        )
        .mount("/photos", routes![download_photo])
        .mount("/profiles", routes![get_profiles, add_profile, select_profile, delete_profile])
        .mount("/settings", routes![get_mirror, set_mirror, clear_mirror])
        .mount("/export", routes![export_photos])
}
