// src/booking/client.rs

use crate::booking::{ReservationApi, ReservationRequest};
use crate::config::ClientConfig;
use crate::errors::{BookingError, ConfigError};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Posts reservations to the booking backend over HTTP.
pub struct HttpReservationApi {
    client: Client,
    endpoint: Url,
}

impl HttpReservationApi {
    pub fn new(cfg: &ClientConfig) -> Result<Self, ConfigError> {
        // reqwest's blocking client defaults to 30s; unset here means no timeout.
        let client = Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .timeout(cfg.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: cfg.reservations_url()?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ReservationApi for HttpReservationApi {
    fn create_reservation(&self, request: &ReservationRequest) -> Result<(), BookingError> {
        debug!(
            endpoint = %self.endpoint,
            listing_id = %request.listing_id,
            total_price = request.total_price,
            "posting reservation"
        );

        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
        warn!(status = status.as_u16(), %body, "reservation rejected");
        Err(BookingError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
