use crate::dataset::Dataset;
use crate::domain::{recommend, Criteria, Listing, Recommendation};
use crate::errors::ServerError;
use crate::responses::errors::log_error;
use crate::responses::{
    error_to_response, html_response, html_response_with_status, json_error_response,
    json_response, ResultResp,
};
use crate::templates;
use astra::{Request, Response};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use std::io::Read;

/// Form bodies larger than this are rejected.
const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Entry point for the server loop: route the request, turn any error
/// into an error page, and log the outcome.
pub fn respond(req: Request, dataset: &Dataset) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = match handle(req, dataset) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    };

    tracing::info!(%method, %path, status = resp.status().as_u16(), "request");
    resp
}

pub fn handle(req: Request, dataset: &Dataset) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page(&HashMap::new(), None, None)),
        ("POST", "/") => search_page(req, dataset),
        ("GET", "/api/pgs") => api_search(&req, dataset),
        ("GET", "/health") => health(dataset),
        ("POST", "/reload") => reload(dataset),
        _ => Err(ServerError::NotFound),
    }
}

/// POST / — run the search from the submitted form and render the page.
fn search_page(req: Request, dataset: &Dataset) -> ResultResp {
    let values = parse_form(req)?;

    let table = match dataset.table() {
        Ok(table) => table,
        Err(e) => return form_error(&values, e.into()),
    };
    let criteria = match Criteria::from_params(&values) {
        Ok(criteria) => criteria,
        Err(err) => return form_error(&values, err),
    };

    let rec = recommend(&table.listings, &criteria);
    log_search(&criteria, &rec);

    html_response(templates::pages::home_page(&values, None, Some(&rec)))
}

/// Re-render the form with the user's input and an error banner.
fn form_error(values: &HashMap<String, String>, err: ServerError) -> ResultResp {
    log_error(&err);
    let message = err.user_message();
    html_response_with_status(
        err.status(),
        templates::pages::home_page(values, Some(&message), None),
    )
}

#[derive(Serialize)]
struct SearchResponse<'a> {
    count: usize,
    note: Option<&'static str>,
    listings: &'a [&'a Listing],
}

/// GET /api/pgs?city=..&max_rent=.. — same search, JSON out.
fn api_search(req: &Request, dataset: &Dataset) -> ResultResp {
    let params = parse_query(req);

    let table = match dataset.table() {
        Ok(table) => table,
        Err(e) => return Ok(json_error_response(e.into())),
    };
    let criteria = match Criteria::from_params(&params) {
        Ok(criteria) => criteria,
        Err(err) => return Ok(json_error_response(err)),
    };

    let rec = recommend(&table.listings, &criteria);
    log_search(&criteria, &rec);

    json_response(
        200,
        &SearchResponse {
            count: rec.listings.len(),
            note: rec.note,
            listings: &rec.listings,
        },
    )
}

fn health(dataset: &Dataset) -> ResultResp {
    let available = match dataset.table() {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "health check: dataset unavailable");
            false
        }
    };

    json_response(
        if available { 200 } else { 503 },
        &json!({
            "status": if available { "ok" } else { "unavailable" },
            "dataset": dataset.status(),
        }),
    )
}

/// POST /reload — re-read the CSV. The old table stays if this fails.
fn reload(dataset: &Dataset) -> ResultResp {
    match dataset.reload() {
        Ok(table) => {
            tracing::info!(rows = table.len(), skipped = table.skipped_rows, "dataset reloaded");
            json_response(200, &json!({ "status": "reloaded", "dataset": dataset.status() }))
        }
        Err(e) => Ok(json_error_response(e.into())),
    }
}

fn log_search(criteria: &Criteria, rec: &Recommendation<'_>) {
    tracing::debug!(
        ?criteria,
        unfiltered = criteria.is_empty(),
        fallback = rec.is_fallback(),
        results = rec.listings.len(),
        "search"
    );
}

/// Decode an `application/x-www-form-urlencoded` request body.
fn parse_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("could not read form: {e}")))?;

    if buf.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form too large".into()));
    }

    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
