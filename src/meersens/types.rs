use serde::Deserialize;

/// Body of `GET /air/current`. Every nested field is optional so that a
/// thin or partial payload parses to `None` instead of failing the whole
/// request; the signal layer decides what counts as unusable.
#[derive(Debug, Clone, Deserialize)]
pub struct AirResponse {
    #[serde(default)]
    pub found: bool,
    pub index: Option<AirIndex>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirIndex {
    /// Raw MAQI value, 0 (best) to 100 (worst).
    pub value: Option<f64>,
    /// Official qualification label, e.g. "Good" or "Poor".
    pub qualification: Option<String>,
}

/// Body of `GET /weather/current`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub parameters: Option<WeatherParameters>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherParameters {
    pub temperature: Option<Measurement>,
    pub weather_condition: Option<ConditionLabel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Measurement {
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionLabel {
    pub value: Option<String>,
}
