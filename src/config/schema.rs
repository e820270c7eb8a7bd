use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::scoring::Weights;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Saved locations to rank. Empty is fine; `score` works without any.
    #[serde(default)]
    pub locations: Vec<LocationConfig>,

    /// Composite weights. Missing sections fall back to the defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Weights>,

    /// Override for the transit reference hub.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub: Option<HubConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl LocationConfig {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HubConfig {
    pub lat: f64,
    pub lng: f64,
}

impl HubConfig {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}
