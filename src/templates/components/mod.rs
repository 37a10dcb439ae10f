pub mod calendar;
pub mod listing_head;
pub mod listing_info;
pub mod listing_reservation;

pub use calendar::calendar;
pub use listing_head::listing_head;
pub use listing_info::listing_info;
pub use listing_reservation::{listing_reservation, ReservationPanel};
