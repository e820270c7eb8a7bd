use super::Reading;
use crate::geo::Coordinate;
use crate::meersens::types::AirResponse;
use crate::meersens::{MeersensClient, ProviderError};
use crate::scoring::scale;

/// Evaluate the air quality signal for a coordinate.
///
/// Never fails: any provider problem is reported on stderr and degrades
/// to the default reading, so the other signals keep their say.
pub async fn evaluate(client: &MeersensClient, coord: Coordinate) -> Reading {
    match try_evaluate(client, coord).await {
        Ok(reading) => reading,
        Err(e) => {
            eprintln!("Warning: air quality signal degraded: {}", e);
            Reading::unavailable()
        }
    }
}

async fn try_evaluate(
    client: &MeersensClient,
    coord: Coordinate,
) -> Result<Reading, ProviderError> {
    let response = client.fetch_air(coord).await?;
    interpret(response)
}

/// Turn a parsed air response into a reading.
///
/// The provider reports whether it actually resolved the location; a
/// body without `found`, without an index block, or without a numeric
/// index value is unusable.
fn interpret(response: AirResponse) -> Result<Reading, ProviderError> {
    if !response.found {
        return Err(ProviderError::MissingField("found"));
    }

    let index = response.index.ok_or(ProviderError::MissingField("index"))?;
    let value = index
        .value
        .ok_or(ProviderError::MissingField("index.value"))?;

    let score = scale::air_quality_score(value);
    let description = index.qualification.unwrap_or_else(|| "Unknown".to_string());

    Ok(Reading { score, description })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn air_body(value: f64, qualification: &str) -> AirResponse {
        serde_json::from_str(&format!(
            r#"{{ "found": true, "index": {{ "value": {}, "qualification": "{}" }} }}"#,
            value, qualification
        ))
        .unwrap()
    }

    #[test]
    fn test_good_air_scores_through_the_scale() {
        let reading = interpret(air_body(20.0, "Good")).unwrap();
        assert_eq!(reading.score, 8.2);
        assert_eq!(reading.description, "Good");
    }

    #[test]
    fn test_location_not_found_is_unusable() {
        let response: AirResponse = serde_json::from_str(r#"{ "found": false }"#).unwrap();
        assert!(matches!(
            interpret(response),
            Err(ProviderError::MissingField("found"))
        ));
    }

    #[test]
    fn test_missing_index_value_is_unusable() {
        let response: AirResponse =
            serde_json::from_str(r#"{ "found": true, "index": { "qualification": "Fair" } }"#)
                .unwrap();
        assert!(matches!(
            interpret(response),
            Err(ProviderError::MissingField("index.value"))
        ));
    }

    #[test]
    fn test_missing_qualification_falls_back_to_unknown() {
        let response: AirResponse =
            serde_json::from_str(r#"{ "found": true, "index": { "value": 50.0 } }"#).unwrap();
        let reading = interpret(response).unwrap();
        assert_eq!(reading.score, 5.5);
        assert_eq!(reading.description, "Unknown");
    }

    #[test]
    fn test_interpretation_is_idempotent() {
        let response = air_body(71.05, "Poor");
        let first = interpret(response.clone()).unwrap();
        let second = interpret(response).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unreachable_provider_degrades_to_default() {
        let mut client = crate::meersens::create_client(Some("test-key".to_string())).unwrap();
        client.base_url = "http://127.0.0.1:1".to_string();

        let reading = evaluate(&client, Coordinate::new(51.045, -114.075)).await;
        assert_eq!(reading, Reading::unavailable());
    }

    #[tokio::test]
    async fn test_missing_credential_degrades_to_default() {
        let client = crate::meersens::create_client(None).unwrap();
        let reading = evaluate(&client, Coordinate::new(51.045, -114.075)).await;
        assert_eq!(reading, Reading::unavailable());
    }
}
