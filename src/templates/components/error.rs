use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Full-page error, used when a request fails outside the search form.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            main {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to search" } }
            }
        },
    )
}

pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="banner error" role="alert" { (message) }
    }
}
