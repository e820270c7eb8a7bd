use serde::Serialize;
use std::collections::BTreeMap;

use super::scale;
use super::weights::{Weights, AIR_QUALITY, TRANSIT, WEATHER};
use crate::geo::Coordinate;
use crate::meersens::MeersensClient;
use crate::signals::{self, Reading};

/// One factor's contribution to the composite, kept alongside the total
/// so callers can always show where a score came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorResult {
    pub score: f64,
    pub description: String,
    pub weight: f64,
}

/// The weighted livability score for one coordinate, with the full
/// per-factor breakdown. Built fresh per request and never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeResult {
    pub total_score: f64,
    pub factors: BTreeMap<String, FactorResult>,
}

impl CompositeResult {
    pub fn factor(&self, name: &str) -> Option<&FactorResult> {
        self.factors.get(name)
    }
}

/// Score a coordinate across all signals.
///
/// The two network-backed signals run concurrently; transit is computed
/// inline. This function performs no I/O of its own and no signal
/// failure can surface here: each signal degrades independently.
pub async fn score_coordinate(
    client: &MeersensClient,
    weights: &Weights,
    hub: Coordinate,
    coord: Coordinate,
) -> CompositeResult {
    let (air, weather) = tokio::join!(
        signals::air::evaluate(client, coord),
        signals::weather::evaluate(client, coord),
    );
    let transit = signals::transit::evaluate(hub, coord);

    compose(air, weather, transit, weights)
}

/// Combine the three readings into the weighted total.
fn compose(air: Reading, weather: Reading, transit: Reading, weights: &Weights) -> CompositeResult {
    let total = air.score * weights.air_quality
        + weather.score * weights.weather
        + transit.score * weights.transit;

    let mut factors = BTreeMap::new();
    factors.insert(AIR_QUALITY.to_string(), factor(air, weights.air_quality));
    factors.insert(WEATHER.to_string(), factor(weather, weights.weather));
    factors.insert(TRANSIT.to_string(), factor(transit, weights.transit));

    CompositeResult {
        total_score: scale::round1(total),
        factors,
    }
}

fn factor(reading: Reading, weight: f64) -> FactorResult {
    FactorResult {
        score: reading.score,
        description: reading.description,
        weight,
    }
}
