use crate::errors::ServerError;
use crate::templates;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

pub use crate::errors::ResultResp;

/// Convert a ServerError into an HTML error page.
pub fn error_to_response(err: ServerError) -> Response {
    log_error(&err);
    let markup = templates::error_page(err.status(), &err.user_message());

    ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

/// Same as [`error_to_response`] but as `{"error": "..."}` for the JSON API.
pub fn json_error_response(err: ServerError) -> Response {
    log_error(&err);
    let body = json!({ "error": err.user_message() }).to_string();

    ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

pub(crate) fn log_error(err: &ServerError) {
    match err {
        ServerError::DatasetUnavailable(detail) => {
            tracing::error!(%detail, "dataset unavailable")
        }
        ServerError::InternalError => tracing::error!("internal error"),
        other => tracing::debug!(error = %other, "request rejected"),
    }
}
