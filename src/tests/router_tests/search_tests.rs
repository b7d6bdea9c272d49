// src/tests/router_tests/search_tests.rs

use crate::domain::FALLBACK_NOTE;
use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{get, init_test_dataset, missing_dataset, post_form, read_body};

fn position(body: &str, needle: &str) -> usize {
    body.find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in body"))
}

#[test]
fn home_page_renders_empty_form() {
    let (dataset, path) = init_test_dataset("home");

    let resp = handle(get("/"), &dataset).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("name=\"city\""));
    assert!(body.contains("name=\"amenities\""));
    assert!(!body.contains("id=\"results\""));
    std::fs::remove_file(path).ok();
}

#[test]
fn exact_match_renders_rows_without_note() {
    let (dataset, path) = init_test_dataset("exact");

    let resp = handle(post_form("city=chennai"), &dataset).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Marina Nest"));
    assert!(!body.contains("Kovai Comforts"));
    assert!(!body.contains(FALLBACK_NOTE));
    // Submitted values stay in the form.
    assert!(body.contains("value=\"chennai\""));
    std::fs::remove_file(path).ok();
}

#[test]
fn no_exact_match_shows_related_pgs_with_note() {
    let (dataset, path) = init_test_dataset("fallback");

    let resp = handle(post_form("city=Chennai&room_type=Shared"), &dataset).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains(FALLBACK_NOTE));
    assert!(body.contains("Marina Nest"));
    std::fs::remove_file(path).ok();
}

#[test]
fn empty_form_lists_everything_best_rated_then_cheapest() {
    let (dataset, path) = init_test_dataset("all");

    let body = read_body(handle(post_form(""), &dataset).expect("Handler failed"));

    let marina = position(&body, "Marina Nest");
    let temple = position(&body, "Temple View");
    let kovai = position(&body, "Kovai Comforts");
    assert!(marina < temple && temple < kovai);
    assert!(!body.contains(FALLBACK_NOTE));
    std::fs::remove_file(path).ok();
}

#[test]
fn blank_amenities_field_is_not_a_constraint() {
    let (dataset, path) = init_test_dataset("blank_amenities");

    let body = read_body(
        handle(post_form("city=&amenities=&max_rent="), &dataset).expect("Handler failed"),
    );
    assert!(body.contains("Found <strong>3</strong> PGs."));
    std::fs::remove_file(path).ok();
}

#[test]
fn invalid_number_re_renders_form_with_error() {
    let (dataset, path) = init_test_dataset("invalid");

    let resp = handle(post_form("city=Chennai&max_rent=cheap"), &dataset).expect("Handler failed");
    assert_eq!(resp.status(), 400);

    let body = read_body(resp);
    assert!(body.contains("max_rent must be a number"));
    assert!(body.contains("value=\"Chennai\""));
    assert!(!body.contains("id=\"results\""));
    std::fs::remove_file(path).ok();
}

#[test]
fn missing_dataset_reports_error_without_results() {
    let dataset = missing_dataset();

    let resp = handle(post_form("city=chennai"), &dataset).expect("Handler failed");
    assert_eq!(resp.status(), 503);

    let body = read_body(resp);
    assert!(body.contains("Dataset not loaded."));
    assert!(!body.contains("id=\"results\""));
}

#[test]
fn unknown_route_is_not_found() {
    let (dataset, path) = init_test_dataset("notfound");

    let err = handle(get("/nope"), &dataset).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    std::fs::remove_file(path).ok();
}

#[test]
fn oversized_form_is_rejected() {
    let (dataset, path) = init_test_dataset("oversized");

    let body = format!("city={}", "a".repeat(70 * 1024));
    let err = handle(post_form(&body), &dataset).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    std::fs::remove_file(path).ok();
}

#[test]
fn respond_turns_errors_into_pages() {
    let (dataset, path) = init_test_dataset("respond");

    let ok = respond(post_form("city=madurai"), &dataset);
    assert_eq!(ok.status(), 200);
    assert!(read_body(ok).contains("Temple View"));

    let missing = respond(get("/nope"), &dataset);
    assert_eq!(missing.status(), 404);
    assert!(read_body(missing).contains("Not Found"));

    let too_big = respond(post_form(&"a".repeat(70 * 1024)), &dataset);
    assert_eq!(too_big.status(), 400);
    std::fs::remove_file(path).ok();
}
