use futures::stream::{FuturesUnordered, StreamExt};

use crate::config::{Config, LocationConfig};
use crate::geo::Coordinate;
use crate::meersens::MeersensClient;
use crate::scoring::{score_coordinate, CompositeResult, Weights};

/// Score every configured location and return the ranked list, best
/// first, ties broken by name.
///
/// Locations are scored concurrently; within each location the signals
/// already degrade independently, so this never fails and never drops a
/// location.
pub async fn score_all_locations(
    client: &MeersensClient,
    config: &Config,
    weights: &Weights,
    hub: Coordinate,
    verbose: bool,
) -> Vec<(LocationConfig, CompositeResult)> {
    let mut futures = FuturesUnordered::new();
    for location in &config.locations {
        let location = location.clone();
        futures.push(async move {
            let result = score_coordinate(client, weights, hub, location.coordinate()).await;
            (location, result)
        });
    }

    let mut scored = Vec::new();
    while let Some((location, result)) = futures.next().await {
        if verbose {
            eprintln!("  Scored {}: {}", location.name, result.total_score);
        }
        scored.push((location, result));
    }

    // Sort by score descending, then by name for stable ties
    scored.sort_by(|a, b| {
        let score_cmp = b
            .1
            .total_score
            .partial_cmp(&a.1.total_score)
            .unwrap_or(std::cmp::Ordering::Equal);
        if score_cmp != std::cmp::Ordering::Equal {
            return score_cmp;
        }
        a.0.name.cmp(&b.0.name)
    });

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::transit::DOWNTOWN_HUB;

    fn test_config() -> Config {
        Config {
            locations: vec![
                LocationConfig {
                    name: "Far Suburb".to_string(),
                    lat: 50.7,
                    lng: -113.5,
                },
                LocationConfig {
                    name: "Downtown".to_string(),
                    lat: 51.045,
                    lng: -114.075,
                },
            ],
            weights: None,
            hub: None,
        }
    }

    #[tokio::test]
    async fn test_ranking_with_degraded_provider() {
        // With the provider unreachable both locations get default air
        // and weather; transit alone separates them, downtown first.
        let mut client = crate::meersens::create_client(Some("test-key".to_string())).unwrap();
        client.base_url = "http://127.0.0.1:1".to_string();

        let scored = score_all_locations(
            &client,
            &test_config(),
            &Weights::default(),
            DOWNTOWN_HUB,
            false,
        )
        .await;

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].0.name, "Downtown");
        assert_eq!(scored[1].0.name, "Far Suburb");
        assert!(scored[0].1.total_score > scored[1].1.total_score);
    }

    #[tokio::test]
    async fn test_empty_config_scores_nothing() {
        let client = crate::meersens::create_client(None).unwrap();
        let config = Config::default();
        let scored =
            score_all_locations(&client, &config, &Weights::default(), DOWNTOWN_HUB, false).await;
        assert!(scored.is_empty());
    }
}
