//! Book handlers over the on-disk JSON document.

use std::fs;

use library_api::{handlers, JsonFileStore};
use serde_json::{json, Value};

use crate::support::{book_json, create, delete, file_service, get, list, update};

fn read_document(path: &std::path::Path) -> Value {
    serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
}

#[test]
fn missing_document_lists_as_empty() {
    let (service, path, _dir) = file_service();
    assert!(!path.exists());
    assert!(list(&service).is_empty());
}

#[test]
fn create_writes_the_whole_collection() {
    let (service, path, _dir) = file_service();

    create(&service, book_json("b1")).unwrap();
    create(&service, book_json("b2")).unwrap();

    assert_eq!(read_document(&path), json!([book_json("b1"), book_json("b2")]));
}

#[test]
fn document_is_pretty_printed() {
    let (service, path, _dir) = file_service();
    create(&service, book_json("b1")).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("[\n  {\n    \"book_id\": \"b1\""));
}

#[test]
fn every_request_rereads_the_document() {
    let (service, path, _dir) = file_service();
    create(&service, book_json("b1")).unwrap();

    // edit the document behind the service's back
    fs::write(&path, serde_json::to_vec(&json!([book_json("b9")])).unwrap()).unwrap();

    assert_eq!(list(&service), vec![book_json("b9")]);
    assert_eq!(get(&service, "b1").unwrap_err().status_code(), 404);
}

#[test]
fn update_and_delete_persist() {
    let (service, path, _dir) = file_service();
    create(&service, book_json("b1")).unwrap();
    create(&service, book_json("b2")).unwrap();

    update(&service, "b2", json!({ "author": "Someone" })).unwrap();
    delete(&service, "b1").unwrap();

    let mut expected = book_json("b2");
    expected["author"] = json!("Someone");
    assert_eq!(read_document(&path), json!([expected]));
}

#[test]
fn malformed_document_reads_as_empty_and_is_replaced_on_write() {
    let (service, path, _dir) = file_service();
    fs::write(&path, "this is not json").unwrap();

    assert!(list(&service).is_empty());

    create(&service, book_json("b1")).unwrap();
    assert_eq!(read_document(&path), json!([book_json("b1")]));
}

#[test]
fn write_failure_still_reports_success() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("data.json");
    let service = handlers::service(JsonFileStore::new(path.clone()));

    let resp = create(&service, book_json("b1")).unwrap();
    assert_eq!(resp.status, 201);

    assert!(!path.exists());
    assert!(list(&service).is_empty());
}

#[test]
fn validation_failure_does_not_touch_the_document() {
    let (service, path, _dir) = file_service();

    let err = create(&service, json!({ "book_id": "b1" })).unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(!path.exists());
}

#[test]
fn mixed_document_survives_create() {
    let (service, path, _dir) = file_service();
    let odd = json!({ "book_id": 7, "title": 1984, "copies": "2" });
    let seeded = json!([book_json("a1"), book_json("a2"), odd]);
    fs::write(&path, serde_json::to_vec(&seeded).unwrap()).unwrap();

    assert_eq!(list(&service).len(), 3);

    create(&service, book_json("b1")).unwrap();

    let document = read_document(&path);
    let records = document.as_array().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0], book_json("a1"));
    assert_eq!(records[1], book_json("a2"));
    assert_eq!(records[2]["book_id"], json!(7));
    assert_eq!(records[2]["title"], json!(1984));
    assert_eq!(records[2]["copies"], "2");
    assert_eq!(records[3], book_json("b1"));
}
