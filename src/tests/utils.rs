use crate::dataset::Dataset;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const FIXTURE_CSV: &str = "\
PG Name,City,Nearby College,Rent (INR/Month),Room Type,Amenities,Distance to College (km),Rating
Marina Nest,Chennai,Anna University,5000,Single,\"WiFi, Food\",1.2,4.5
Kovai Comforts,Coimbatore,PSG College of Technology,3000,Shared,\"WiFi, Parking\",0.8,4.0
Temple View,Madurai,Madurai Kamaraj University,2000,Shared,\"Food, Laundry\",2.5,4.0
";

/// Unique path in the temp dir; the file is not created.
pub fn temp_csv_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "pg_finder_{tag}_{}.csv",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

/// Dataset backed by a fresh copy of the fixture CSV.
pub fn init_test_dataset(tag: &str) -> (Dataset, PathBuf) {
    let path = temp_csv_path(tag);
    std::fs::write(&path, FIXTURE_CSV).expect("Failed to write fixture CSV");
    (Dataset::new(&path), path)
}

/// Dataset pointing at a file that does not exist.
pub fn missing_dataset() -> Dataset {
    Dataset::new(temp_csv_path("missing"))
}

pub fn post_form(body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri("/")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn read_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&read_body(resp)).expect("response was not JSON")
}
