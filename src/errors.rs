// errors.rs
use thiserror::Error;

/// Anything that can go wrong while creating a reservation.
/// The view treats every variant the same way: notify and keep the form.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Reservation rejected: {status} - {body}")]
    Rejected { status: u16, body: String },

    #[error("Client misconfigured: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("Failed to build http client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for BookingError {
    fn from(e: reqwest::Error) -> Self {
        BookingError::Network(e.to_string())
    }
}
