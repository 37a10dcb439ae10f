//! View-model and rendering for a rental listing's detail page: availability,
//! pricing, category lookup and the reservation flow.

pub mod booking;
pub mod config;
pub mod domain;
pub mod errors;
pub mod templates;
pub mod view;

pub use booking::{
    HttpReservationApi, Notifier, ReservationApi, ReservationRequest, SignInPrompt,
    ViewInvalidator,
};
pub use config::ClientConfig;
pub use errors::{BookingError, ConfigError};
pub use view::{Blocked, ListingDetailView, SubmitOutcome, ViewChange, ViewDeps};

#[cfg(test)]
mod tests;
