pub mod listing;

pub use listing::{listing_content, listing_page};
