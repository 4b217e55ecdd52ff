use chrono::TimeZone;
use chrono::Utc;

use super::GeneratedSpecification;
use crate::domain::models::GenerationRequest;

fn request() -> GenerationRequest {
    return GenerationRequest {
        goal: "Add login".to_string(),
        users: "Devs".to_string(),
        ..GenerationRequest::default()
    };
}

#[test]
fn it_copies_request_fields() {
    let entry = GeneratedSpecification::new(&request(), "## Tasks");

    assert_eq!(entry.goal, "Add login");
    assert_eq!(entry.users, "Devs");
    assert_eq!(entry.template, "web");
    assert_eq!(entry.result, "## Tasks");
    assert_eq!(entry.request(), request());
}

#[test]
fn it_creates_unique_ids() {
    let first = GeneratedSpecification::new(&request(), "");
    let second = GeneratedSpecification::new(&request(), "");

    assert_ne!(first.id, second.id);
}

#[test]
fn it_stores_iso_timestamps() {
    let created_at = Utc.with_ymd_and_hms(2024, 3, 2, 10, 15, 30).unwrap();
    let entry = GeneratedSpecification::new_at(&request(), "", created_at);

    insta::assert_snapshot!(entry.timestamp, @"2024-03-02T10:15:30.000Z");
}

#[test]
fn it_falls_back_to_raw_timestamp() {
    let mut entry = GeneratedSpecification::new(&request(), "");
    entry.timestamp = "yesterday".to_string();

    assert_eq!(entry.display_timestamp(), "yesterday");
}

#[test]
fn it_keeps_short_constraints() {
    let mut entry = GeneratedSpecification::new(&request(), "");
    entry.constraints = "Must work offline".to_string();

    assert_eq!(entry.constraints_preview(), "Must work offline");
}

#[test]
fn it_truncates_long_constraints() {
    let mut entry = GeneratedSpecification::new(&request(), "");
    entry.constraints = "é".repeat(120);

    let preview = entry.constraints_preview();
    assert_eq!(preview, format!("{}...", "é".repeat(100)));
}
