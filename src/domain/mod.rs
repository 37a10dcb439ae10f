pub mod availability;
pub mod categories;
pub mod listing;
pub mod pricing;
pub mod range;

pub use availability::{disabled_dates, is_disabled};
pub use categories::{find_category, Category, CATEGORIES};
pub use listing::{CurrentUser, Listing, ListingOwner, Reservation};
pub use pricing::total_price;
pub use range::DateRange;
