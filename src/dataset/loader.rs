// src/dataset/loader.rs
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::dataset::DatasetError;
use crate::domain::Listing;

/// The in-memory listings table. Built once per load and never mutated.
#[derive(Debug)]
pub struct ListingTable {
    pub listings: Vec<Listing>,
    /// Rows dropped because a numeric cell did not parse.
    pub skipped_rows: usize,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
}

impl ListingTable {
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Load listings from a CSV file with a header row.
pub fn load_listings(path: impl AsRef<Path>) -> Result<ListingTable, DatasetError> {
    let path = path.as_ref();
    let source = path.display().to_string();

    let file = File::open(path).map_err(|e| DatasetError::Io {
        path: source.clone(),
        source: e,
    })?;

    let started = Instant::now();
    let table = load_listings_from_reader(file, &source)?;

    tracing::info!(
        path = %source,
        rows = table.len(),
        skipped = table.skipped_rows,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "loaded listings"
    );

    Ok(table)
}

/// Same as [`load_listings`] but over any reader; `source` names it in errors.
pub fn load_listings_from_reader<R: Read>(
    reader: R,
    source: &str,
) -> Result<ListingTable, DatasetError> {
    let csv_err = |e: csv::Error| DatasetError::Csv {
        path: source.to_string(),
        source: e,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_err)?.clone();
    let missing: Vec<String> = Listing::REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns {
            path: source.to_string(),
            missing,
        });
    }

    let mut listings = Vec::new();
    let mut skipped_rows = 0;

    for result in rdr.deserialize::<Listing>() {
        match result {
            Ok(listing) => match listing.validate() {
                Ok(()) => listings.push(listing),
                Err(reason) => {
                    skipped_rows += 1;
                    tracing::warn!(path = %source, %reason, "skipping malformed row");
                }
            },
            Err(e) if e.is_io_error() => return Err(csv_err(e)),
            Err(e) => {
                skipped_rows += 1;
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                tracing::warn!(path = %source, line, error = %e, "skipping malformed row");
            }
        }
    }

    Ok(ListingTable {
        listings,
        skipped_rows,
        source: source.to_string(),
        loaded_at: Utc::now(),
    })
}
