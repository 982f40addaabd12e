//! Helper functions and utilities

/// Round to two decimal places, the precision ratings are reported with
pub fn round_to_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean of the ratings, rounded, or 0 for an empty slice
pub fn average_rating(ratings: &[i64]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().sum();
    round_to_two(sum as f64 / ratings.len() as f64)
}

/// Trimmed, non-empty text or `None`
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two() {
        assert_eq!(round_to_two(4.0), 4.0);
        assert_eq!(round_to_two(3.666_666), 3.67);
        assert_eq!(round_to_two(2.004), 2.0);
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(average_rating(&[5, 3, 4]), 4.0);
        assert_eq!(average_rating(&[5, 4]), 4.5);
        assert_eq!(average_rating(&[1, 2, 2]), 1.67);
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  Hackathon ".into())), Some("Hackathon".to_string()));
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(None), None);
    }
}
