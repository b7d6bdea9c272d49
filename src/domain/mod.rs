pub mod criteria;
pub mod filter;
pub mod listing;

pub use criteria::Criteria;
pub use filter::{recommend, Recommendation, FALLBACK_NOTE};
pub use listing::Listing;
