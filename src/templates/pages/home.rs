// templates/pages/home.rs

use std::collections::HashMap;

use crate::domain::Recommendation;
use crate::templates::{
    components::{error_banner, listing_table, note_banner, search_form},
    desktop_layout,
};
use maud::{html, Markup};

/// The one page of the app: form on top, then either an error or results.
pub fn home_page(
    values: &HashMap<String, String>,
    error: Option<&str>,
    results: Option<&Recommendation<'_>>,
) -> Markup {
    desktop_layout(
        "Find a PG",
        html! {
            main {
                h1 { "Find a PG near your college" }

                (search_form(values))

                @match (error, results) {
                    (Some(message), _) => (error_banner(message)),
                    (None, Some(rec)) => {
                        @if let Some(note) = rec.note {
                            (note_banner(note))
                        }
                        section id="results" {
                            (listing_table(&rec.listings))
                        }
                    },
                    (None, None) => {},
                }
            }
        },
    )
}
