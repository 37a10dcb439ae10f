pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{calendar, listing_head, listing_info, listing_reservation};
pub use layouts::desktop::desktop_layout;
pub use pages::listing_page;
