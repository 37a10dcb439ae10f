// src/booking/ports.rs
//
// Collaborators the view calls out to. The host wires in real ones;
// tests wire in recorders.

use crate::booking::ReservationRequest;
use crate::errors::BookingError;

/// Opens whatever sign-in flow the host has.
pub trait SignInPrompt {
    fn open(&self);
}

/// Fire-and-forget user-facing messages.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Asks the host to re-fetch server data (the reservation list) and re-render.
pub trait ViewInvalidator {
    fn refresh(&self);
}

/// Creates a reservation on the server. Only success or failure matters.
pub trait ReservationApi {
    fn create_reservation(&self, request: &ReservationRequest) -> Result<(), BookingError>;
}
