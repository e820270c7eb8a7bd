//! Transfer functions from raw physical measurements to the 1-10 quality
//! scale. Each one is a clamped linear map, rounded to one decimal.

/// Temperature considered ideal, in Celsius.
pub const OPTIMAL_TEMP_C: f64 = 25.0;

/// Distance at which transit access bottoms out, in km.
const TRANSIT_MAX_DISTANCE_KM: f64 = 15.0;

/// Round to one decimal place, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scale a raw MAQI value (0 best, 100 worst) to a 1-10 score.
///
/// Linear: 0 maps to 10.0, 100 maps to 1.0. Out-of-domain inputs are
/// clamped before scaling.
pub fn air_quality_score(maqi: f64) -> f64 {
    let clamped = maqi.clamp(0.0, 100.0);
    let score = 10.0 - 0.09 * clamped;
    round1(score.clamp(1.0, 10.0))
}

/// Scale a temperature to a 1-10 score by deviation from the optimum.
///
/// 25C scores 10.0; the score drops linearly and floors at 1.0 once the
/// deviation reaches 58.5 degrees. Symmetric around the optimum.
pub fn weather_score(temp_c: f64) -> f64 {
    let deviation = (temp_c - OPTIMAL_TEMP_C).abs();
    let score = 10.0 - (deviation / 65.0) * 10.0;
    round1(score.max(1.0))
}

/// Scale distance from the transit hub to a 1-10 score.
///
/// 0 km scores 10.0, falling linearly to 2.0 at 15 km; everything past
/// 15 km stays at 2.0. The 1.0 floor below is kept for safety but the
/// distance clamp means the scale never reaches it.
pub fn transit_score(distance_km: f64) -> f64 {
    let clamped = distance_km.min(TRANSIT_MAX_DISTANCE_KM);
    let score = 10.0 - clamped * (8.0 / TRANSIT_MAX_DISTANCE_KM);
    round1(score.max(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_endpoints() {
        assert_eq!(air_quality_score(0.0), 10.0);
        assert_eq!(air_quality_score(100.0), 1.0);
    }

    #[test]
    fn test_air_midpoints() {
        assert_eq!(air_quality_score(20.0), 8.2);
        assert_eq!(air_quality_score(50.0), 5.5);
        assert_eq!(air_quality_score(71.05), 3.6);
    }

    #[test]
    fn test_air_clamps_out_of_domain_input() {
        assert_eq!(air_quality_score(-10.0), 10.0);
        assert_eq!(air_quality_score(250.0), 1.0);
    }

    #[test]
    fn test_air_is_monotonically_non_increasing() {
        let mut prev = air_quality_score(0.0);
        let mut maqi = 0.0;
        while maqi <= 100.0 {
            let score = air_quality_score(maqi);
            assert!(score <= prev, "score rose at maqi={}", maqi);
            prev = score;
            maqi += 0.5;
        }
    }

    #[test]
    fn test_weather_optimum() {
        assert_eq!(weather_score(25.0), 10.0);
    }

    #[test]
    fn test_weather_floors_at_extremes() {
        assert_eq!(weather_score(25.0 - 65.0), 1.0);
        assert_eq!(weather_score(25.0 + 65.0), 1.0);
        // The 1.0 floor is reached already at deviation 58.5
        assert_eq!(weather_score(83.5), 1.0);
        assert_eq!(weather_score(-33.5), 1.0);
    }

    #[test]
    fn test_weather_is_symmetric_around_optimum() {
        for i in 0..140 {
            let d = i as f64 * 0.5;
            assert_eq!(
                weather_score(25.0 + d),
                weather_score(25.0 - d),
                "asymmetric at deviation {}",
                d
            );
        }
    }

    #[test]
    fn test_weather_sample_values() {
        assert_eq!(weather_score(18.5), 9.0); // deviation 6.5
        assert_eq!(weather_score(0.0), 6.2); // deviation 25
    }

    #[test]
    fn test_transit_at_hub() {
        assert_eq!(transit_score(0.0), 10.0);
    }

    #[test]
    fn test_transit_far_distances_score_exactly_two() {
        // Not 1.0: the distance clamp bottoms the scale out at 2.0
        assert_eq!(transit_score(15.0), 2.0);
        assert_eq!(transit_score(40.0), 2.0);
        assert_eq!(transit_score(500.0), 2.0);
    }

    #[test]
    fn test_transit_midpoint() {
        assert_eq!(transit_score(7.5), 6.0);
    }

    #[test]
    fn test_round1_half_away_from_zero() {
        assert_eq!(round1(9.25), 9.3);
        assert_eq!(round1(9.24), 9.2);
        assert_eq!(round1(9.28), 9.3);
    }
}
