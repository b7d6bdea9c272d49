pub mod errors;
pub mod html;
pub mod json;

pub use errors::{error_to_response, json_error_response, ResultResp};

// Normal HTML response
pub use html::{html_response, html_response_with_status};
pub use json::json_response;
