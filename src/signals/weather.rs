use super::Reading;
use crate::geo::Coordinate;
use crate::meersens::types::WeatherResponse;
use crate::meersens::{MeersensClient, ProviderError};
use crate::scoring::scale;

/// Evaluate the weather signal for a coordinate. Never fails; degrades
/// to the default reading like the other signals.
pub async fn evaluate(client: &MeersensClient, coord: Coordinate) -> Reading {
    match try_evaluate(client, coord).await {
        Ok(reading) => reading,
        Err(e) => {
            eprintln!("Warning: weather signal degraded: {}", e);
            Reading::unavailable()
        }
    }
}

async fn try_evaluate(
    client: &MeersensClient,
    coord: Coordinate,
) -> Result<Reading, ProviderError> {
    let response = client.fetch_weather(coord).await?;
    interpret(response)
}

fn interpret(response: WeatherResponse) -> Result<Reading, ProviderError> {
    let parameters = response
        .parameters
        .ok_or(ProviderError::MissingField("parameters"))?;

    let temp_c = parameters
        .temperature
        .and_then(|t| t.value)
        .ok_or(ProviderError::MissingField("parameters.temperature.value"))?;

    let condition = parameters
        .weather_condition
        .and_then(|c| c.value)
        .map(|v| title_case(&v))
        .unwrap_or_else(|| "Unknown".to_string());

    Ok(Reading {
        score: scale::weather_score(temp_c),
        description: format!(
            "{}, {} ({:.1}\u{b0}C)",
            condition,
            temperature_band(temp_c),
            temp_c
        ),
    })
}

/// Adjective for a temperature, used in the signal description.
fn temperature_band(temp_c: f64) -> &'static str {
    if temp_c < 0.0 {
        "Freezing"
    } else if temp_c < 10.0 {
        "Cold"
    } else if temp_c < 20.0 {
        "Cool"
    } else if temp_c < 28.0 {
        "Pleasant"
    } else if temp_c < 35.0 {
        "Warm"
    } else {
        "Hot"
    }
}

/// The provider reports conditions in lowercase ("clear sky").
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather_body(temp: f64, condition: &str) -> WeatherResponse {
        serde_json::from_str(&format!(
            r#"{{ "parameters": {{
                "temperature": {{ "value": {} }},
                "weather_condition": {{ "value": "{}" }}
            }} }}"#,
            temp, condition
        ))
        .unwrap()
    }

    #[test]
    fn test_optimal_temperature_scores_ten() {
        let reading = interpret(weather_body(25.0, "clear sky")).unwrap();
        assert_eq!(reading.score, 10.0);
        assert_eq!(reading.description, "Clear Sky, Pleasant (25.0\u{b0}C)");
    }

    #[test]
    fn test_cold_day_description() {
        let reading = interpret(weather_body(-12.0, "snow")).unwrap();
        assert_eq!(reading.description, "Snow, Freezing (-12.0\u{b0}C)");
        assert_eq!(reading.score, 4.3); // deviation 37 -> 10 - 5.692
    }

    #[test]
    fn test_missing_temperature_is_unusable() {
        let response: WeatherResponse = serde_json::from_str(
            r#"{ "parameters": { "weather_condition": { "value": "cloudy" } } }"#,
        )
        .unwrap();
        assert!(matches!(
            interpret(response),
            Err(ProviderError::MissingField("parameters.temperature.value"))
        ));
    }

    #[test]
    fn test_missing_parameters_is_unusable() {
        let response: WeatherResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            interpret(response),
            Err(ProviderError::MissingField("parameters"))
        ));
    }

    #[test]
    fn test_missing_condition_falls_back_to_unknown() {
        let response: WeatherResponse =
            serde_json::from_str(r#"{ "parameters": { "temperature": { "value": 31.0 } } }"#)
                .unwrap();
        let reading = interpret(response).unwrap();
        assert_eq!(reading.description, "Unknown, Warm (31.0\u{b0}C)");
    }

    #[test]
    fn test_interpretation_is_idempotent() {
        let response = weather_body(18.5, "light rain");
        assert_eq!(
            interpret(response.clone()).unwrap(),
            interpret(response).unwrap()
        );
    }

    #[test]
    fn test_temperature_bands() {
        assert_eq!(temperature_band(-5.0), "Freezing");
        assert_eq!(temperature_band(0.0), "Cold");
        assert_eq!(temperature_band(9.9), "Cold");
        assert_eq!(temperature_band(10.0), "Cool");
        assert_eq!(temperature_band(20.0), "Pleasant");
        assert_eq!(temperature_band(28.0), "Warm");
        assert_eq!(temperature_band(35.0), "Hot");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("clear sky"), "Clear Sky");
        assert_eq!(title_case("rain"), "Rain");
        assert_eq!(title_case(""), "");
    }

    #[tokio::test]
    async fn test_unreachable_provider_degrades_to_default() {
        let mut client = crate::meersens::create_client(Some("test-key".to_string())).unwrap();
        client.base_url = "http://127.0.0.1:1".to_string();

        let reading = evaluate(&client, Coordinate::new(51.045, -114.075)).await;
        assert_eq!(reading, Reading::unavailable());
    }
}
