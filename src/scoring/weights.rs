use serde::{Deserialize, Serialize};

/// Factor names as they appear in config, breakdowns, and JSON output.
pub const AIR_QUALITY: &str = "air_quality";
pub const WEATHER: &str = "weather";
pub const TRANSIT: &str = "transit";

/// How far the weight sum may drift from 1.0 before the config is rejected.
const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Per-factor weights for the composite score.
///
/// Fixed for the lifetime of the process: loaded (or defaulted) once at
/// startup, validated, and passed by reference into the scorer. Partial
/// YAML fills the missing factors from the defaults, so an edited config
/// that no longer sums to 1.0 fails validation instead of silently
/// misweighting results.
///
/// Example YAML:
/// ```yaml
/// weights:
///   air_quality: 0.4
///   weather: 0.3
///   transit: 0.3
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Weights {
    #[serde(default = "default_air_quality")]
    pub air_quality: f64,

    #[serde(default = "default_weather")]
    pub weather: f64,

    #[serde(default = "default_transit")]
    pub transit: f64,
}

fn default_air_quality() -> f64 {
    0.4
}

fn default_weather() -> f64 {
    0.3
}

fn default_transit() -> f64 {
    0.3
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            air_quality: default_air_quality(),
            weather: default_weather(),
            transit: default_transit(),
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.air_quality + self.weather + self.transit
    }
}

/// Validate the weight table at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weights(weights: &Weights) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (name, value) in [
        (AIR_QUALITY, weights.air_quality),
        (WEATHER, weights.weather),
        (TRANSIT, weights.transit),
    ] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            errors.push(format!(
                "weights.{}: must be between 0 and 1, got {}",
                name, value
            ));
        }
    }

    let sum = weights.sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        errors.push(format!("weights: must sum to 1.0, got {}", sum));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
