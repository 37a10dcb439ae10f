mod client;
mod ports;
mod request;

pub use client::HttpReservationApi;
pub use ports::{Notifier, ReservationApi, SignInPrompt, ViewInvalidator};
pub use request::ReservationRequest;
