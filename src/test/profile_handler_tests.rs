use rocket::http::Status;
use rocket::local::blocking::Client;

use crate::model::response::{ProfilesApi, RecordApi};
use crate::rocket;
use crate::test::*;

fn client() -> Client {
    Client::tracked(rocket()).unwrap()
}

fn add_profile(client: &Client, name: &str) -> ProfilesApi {
    client
        .post(uri!("/profiles"))
        .body(format!(r#"{{"name":"{name}"}}"#))
        .dispatch()
        .into_json()
        .unwrap()
}

fn create_record(client: &Client, owner: &str, reason: &str) {
    let body = format!(
        r#"{{"owner":"{owner}","reason":"{reason}","comment":"","date":"2024-01-01T10:00:00","image":"{}"}}"#,
        data_uri(reason)
    );
    let res = client.post(uri!("/items")).body(body).dispatch();
    assert_eq!(res.status(), Status::Created);
}

#[test]
fn fresh_database_has_seed_profile() {
    refresh_db();
    remove_photos();
    let client = client();
    let res = client.get(uri!("/profiles")).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let profiles: ProfilesApi = res.into_json().unwrap();
    assert_eq!("me", profiles.current);
    assert_eq!(1, profiles.profiles.len());
    assert_eq!("me", profiles.profiles[0].name);
    assert_eq!(0, profiles.profiles[0].records);
    cleanup();
}

#[test]
fn add_profile_becomes_current() {
    refresh_db();
    remove_photos();
    let client = client();
    let res = client
        .post(uri!("/profiles"))
        .body(r#"{"name":"kids"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let profiles: ProfilesApi = res.into_json().unwrap();
    assert_eq!("kids", profiles.current);
    assert_eq!(2, profiles.profiles.len());
    cleanup();
}

#[test]
fn add_existing_profile_only_selects_it() {
    refresh_db();
    remove_photos();
    let client = client();
    add_profile(&client, "kids");
    add_profile(&client, "me");
    let profiles = add_profile(&client, "kids");
    assert_eq!("kids", profiles.current);
    // no duplicate entry for the re-added name
    assert_eq!(2, profiles.profiles.len());
    cleanup();
}

#[test]
fn add_profile_rejects_blank_name() {
    refresh_db();
    remove_photos();
    let client = client();
    let res = client
        .post(uri!("/profiles"))
        .body(r#"{"name":"   "}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    cleanup();
}

#[test]
fn profile_counts_follow_records() {
    refresh_db();
    remove_photos();
    let client = client();
    add_profile(&client, "kids");
    create_record(&client, "me", "old mug");
    create_record(&client, "kids", "small shoes");
    create_record(&client, "kids", "torn book");
    let profiles: ProfilesApi = client.get(uri!("/profiles")).dispatch().into_json().unwrap();
    let records_for = |name: &str| {
        profiles
            .profiles
            .iter()
            .find(|p| p.name == name)
            .unwrap()
            .records
    };
    assert_eq!(1, records_for("me"));
    assert_eq!(2, records_for("kids"));
    cleanup();
}

#[test]
fn select_profile_switches_current() {
    refresh_db();
    remove_photos();
    let client = client();
    add_profile(&client, "kids");
    let res = client
        .put(uri!("/profiles/current"))
        .body(r#"{"name":"me"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let profiles: ProfilesApi = res.into_json().unwrap();
    assert_eq!("me", profiles.current);
    cleanup();
}

#[test]
fn select_unknown_profile() {
    refresh_db();
    remove_photos();
    let client = client();
    let res = client
        .put(uri!("/profiles/current"))
        .body(r#"{"name":"nobody"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
    cleanup();
}

#[test]
fn delete_current_profile_rejected() {
    refresh_db();
    remove_photos();
    let client = client();
    add_profile(&client, "kids");
    let res = client.delete(uri!("/profiles/kids")).dispatch();
    assert_eq!(res.status(), Status::Conflict);
    cleanup();
}

#[test]
fn delete_seed_profile_rejected() {
    refresh_db();
    remove_photos();
    let client = client();
    add_profile(&client, "kids");
    let res = client.delete(uri!("/profiles/me")).dispatch();
    assert_eq!(res.status(), Status::Conflict);
    cleanup();
}

#[test]
fn delete_unknown_profile() {
    refresh_db();
    remove_photos();
    let client = client();
    let res = client.delete(uri!("/profiles/nobody")).dispatch();
    assert_eq!(res.status(), Status::NotFound);
    cleanup();
}

#[test]
fn delete_profile_purges_its_records() {
    refresh_db();
    remove_photos();
    let client = client();
    add_profile(&client, "kids");
    create_record(&client, "kids", "small shoes");
    // switch away so the profile is deletable
    client
        .put(uri!("/profiles/current"))
        .body(r#"{"name":"me"}"#)
        .dispatch();
    let res = client.delete(uri!("/profiles/kids")).dispatch();
    assert_eq!(res.status(), Status::NoContent);
    let profiles: ProfilesApi = client.get(uri!("/profiles")).dispatch().into_json().unwrap();
    assert_eq!(1, profiles.profiles.len());
    assert_eq!("me", profiles.profiles[0].name);
    let records: Vec<RecordApi> = client
        .get("/items?owner=kids")
        .dispatch()
        .into_json()
        .unwrap();
    assert!(records.is_empty());
    cleanup();
}
