use super::Reading;
use crate::geo::Coordinate;
use crate::scoring::scale;

/// Downtown Calgary, the reference transit hub.
pub const DOWNTOWN_HUB: Coordinate = Coordinate {
    lat: 51.045,
    lng: -114.075,
};

/// Evaluate transit access for a coordinate by proximity to the hub.
///
/// Purely computed, so unlike the network-backed signals this one always
/// succeeds.
pub fn evaluate(hub: Coordinate, coord: Coordinate) -> Reading {
    let distance_km = coord.distance_km(hub);
    let score = scale::transit_score(distance_km);

    let band = if score >= 8.5 {
        "Excellent Access"
    } else if score >= 6.0 {
        "Good Access"
    } else {
        "Limited Access"
    };

    Reading {
        score,
        description: format!("{} ({:.1} km from downtown)", band, distance_km),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_itself_scores_ten() {
        let reading = evaluate(DOWNTOWN_HUB, DOWNTOWN_HUB);
        assert_eq!(reading.score, 10.0);
        assert_eq!(reading.description, "Excellent Access (0.0 km from downtown)");
    }

    #[test]
    fn test_inner_city_gets_good_access() {
        // ~7km northwest of the hub
        let reading = evaluate(DOWNTOWN_HUB, Coordinate::new(51.09, -114.15));
        assert!(reading.score >= 6.0 && reading.score < 8.5, "score {}", reading.score);
        assert!(reading.description.starts_with("Good Access"));
    }

    #[test]
    fn test_beyond_fifteen_km_scores_exactly_two() {
        // Distant suburb, well past the 15 km cutoff
        let reading = evaluate(DOWNTOWN_HUB, Coordinate::new(50.7, -113.5));
        assert_eq!(reading.score, 2.0);
        assert!(reading.description.starts_with("Limited Access"));
    }

    #[test]
    fn test_score_does_not_depend_on_direction() {
        let east = evaluate(DOWNTOWN_HUB, Coordinate::new(51.045, -113.9));
        let west = evaluate(DOWNTOWN_HUB, Coordinate::new(51.045, -114.25));
        assert_eq!(east.score, west.score);
    }

    #[test]
    fn test_description_carries_rounded_distance() {
        let reading = evaluate(DOWNTOWN_HUB, Coordinate::new(50.0, -113.0));
        // Far away: banded as limited, distance still reported
        assert!(reading.description.contains("km from downtown"));
        assert_eq!(reading.score, 2.0);
    }
}
