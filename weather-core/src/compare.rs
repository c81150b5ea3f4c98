//! City-to-city comparison of scalar weather readings.
//!
//! Each category carries its own direction vocabulary and magnitude scale, so
//! callers never branch on strings. Sunset times are compared on raw Unix
//! seconds and reported in hours.

use serde::Serialize;

/// What is being compared. Closed set; determines the direction labels and
/// whether a seconds-to-hours conversion applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Temperature,
    Humidity,
    WindSpeed,
    SunsetTime,
}

impl Category {
    /// Direction labels as (positive, negative), picked by the sign of
    /// `value1 - value2`.
    fn directions(self) -> (&'static str, &'static str) {
        match self {
            Category::Temperature => ("warmer", "colder"),
            Category::Humidity | Category::WindSpeed => ("greater", "less"),
            Category::SunsetTime => ("later", "earlier"),
        }
    }

    /// Factor applied to the absolute difference. Sunset inputs are Unix
    /// seconds but are reported in hours.
    fn scale(self) -> f64 {
        match self {
            Category::SunsetTime => 1.0 / 3600.0,
            _ => 1.0,
        }
    }
}

/// Result of comparing one scalar across two cities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub category: Category,
    /// Absolute difference, scaled per category, rounded to 2 decimal places.
    pub magnitude: f64,
    pub direction: &'static str,
}

/// Compare `value1` against `value2`.
///
/// The direction is chosen from the sign of the raw difference before it is
/// made absolute; a zero difference therefore reports the negative-direction
/// label ("colder"/"less"/"earlier") with magnitude 0, never a neutral label.
pub fn compare(value1: f64, value2: f64, category: Category) -> Comparison {
    let raw = value1 - value2;
    let (positive, negative) = category.directions();
    let direction = if raw > 0.0 { positive } else { negative };

    Comparison {
        category,
        magnitude: round2(raw.abs() * category.scale()),
        direction,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warmer_when_first_city_is_hotter() {
        let cmp = compare(80.0, 65.0, Category::Temperature);
        assert_eq!(cmp.magnitude, 15.0);
        assert_eq!(cmp.direction, "warmer");
    }

    #[test]
    fn colder_when_first_city_is_cooler() {
        let cmp = compare(65.0, 80.0, Category::Temperature);
        assert_eq!(cmp.magnitude, 15.0);
        assert_eq!(cmp.direction, "colder");
    }

    #[test]
    fn humidity_and_wind_use_greater_less() {
        assert_eq!(compare(70.0, 55.0, Category::Humidity).direction, "greater");
        assert_eq!(compare(55.0, 70.0, Category::Humidity).direction, "less");
        assert_eq!(compare(12.5, 3.5, Category::WindSpeed).direction, "greater");
        assert_eq!(compare(3.5, 12.5, Category::WindSpeed).direction, "less");
    }

    #[test]
    fn sunset_difference_is_reported_in_hours() {
        let cmp = compare(3600.0, 0.0, Category::SunsetTime);
        assert_eq!(cmp.magnitude, 1.0);
        assert_eq!(cmp.direction, "later");
    }

    #[test]
    fn sunset_scales_in_both_directions() {
        let cmp = compare(0.0, 5400.0, Category::SunsetTime);
        assert_eq!(cmp.magnitude, 1.5);
        assert_eq!(cmp.direction, "earlier");
    }

    #[test]
    fn magnitude_is_never_negative() {
        let categories = [
            Category::Temperature,
            Category::Humidity,
            Category::WindSpeed,
            Category::SunsetTime,
        ];
        let values = [(-40.0, 55.0), (55.0, -40.0), (0.0, 0.0), (1.25, 1.75)];

        for category in categories {
            for (a, b) in values {
                assert!(compare(a, b, category).magnitude >= 0.0);
            }
        }
    }

    #[test]
    fn equal_values_report_the_negative_label() {
        assert_eq!(compare(20.0, 20.0, Category::Temperature).direction, "colder");
        assert_eq!(compare(50.0, 50.0, Category::Humidity).direction, "less");
        assert_eq!(compare(4.0, 4.0, Category::WindSpeed).direction, "less");
        assert_eq!(compare(1000.0, 1000.0, Category::SunsetTime).direction, "earlier");

        assert_eq!(compare(20.0, 20.0, Category::Temperature).magnitude, 0.0);
    }

    #[test]
    fn magnitude_rounds_to_two_decimals() {
        let cmp = compare(10.456, 10.0, Category::Temperature);
        assert_eq!(cmp.magnitude, 0.46);

        let cmp = compare(10.0, 10.333, Category::Temperature);
        assert_eq!(cmp.magnitude, 0.33);
    }
}
