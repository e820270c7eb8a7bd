pub mod client;
pub mod types;

pub use client::{create_client, MeersensClient};
pub use types::{AirResponse, WeatherResponse};

use std::fmt;

/// Everything that can go wrong between us and the environmental-data
/// provider. Each variant is recovered inside the signal that hit it and
/// turned into a default reading; none of these cross into the scorer.
#[derive(Debug)]
pub enum ProviderError {
    MissingCredential,
    Network(String),
    Upstream(u16),
    Malformed(String),
    MissingField(&'static str),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::MissingCredential => write!(f, "no API key configured"),
            ProviderError::Network(msg) => write!(f, "network error: {}", msg),
            ProviderError::Upstream(status) => write!(f, "provider returned HTTP {}", status),
            ProviderError::Malformed(msg) => write!(f, "malformed response: {}", msg),
            ProviderError::MissingField(field) => write!(f, "response missing '{}'", field),
        }
    }
}

impl std::error::Error for ProviderError {}
