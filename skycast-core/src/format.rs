//! Pure display formatters for the widget's three result lines.
//!
//! Message wording follows the original widget verbatim, misspellings
//! and spacing quirks included ("Pleasent", "Hot at{t}", "DuringThe
//! Day"). Tests elsewhere assert on these exact strings, so they are
//! not to be tidied up casually.

use chrono::{Local, Timelike};

use crate::model::Unit;

/// Bucket a temperature into a human-readable message.
///
/// All Celsius boundaries are exclusive upper bounds. Non-Celsius units
/// get the generic rendering; nothing produces them today.
pub fn temperature_message(temperature: f64, unit: Unit) -> String {
    match unit {
        Unit::Celsius => {
            if temperature < 0.0 {
                format!("It's Freezing at {temperature}℃! bundle up!")
            } else if temperature < 10.0 {
                format!("It's Quite Cold at {temperature}℃. Wear Warm Clothes.")
            } else if temperature < 20.0 {
                format!("The Temperature Is {temperature}℃. Comfortable for a Light Jacket.")
            } else if temperature < 30.0 {
                format!("It's a Pleasent {temperature}℃. Enjoy The Nice Weather!")
            } else {
                format!("It's Hot at{temperature}℃. Stay Hydrated!")
            }
        }
        _ => format!("{temperature}°{unit}"),
    }
}

/// Map a provider condition string to its canned message.
///
/// Dispatch is keyed by the lower-cased condition, so "Sunny", "sunny"
/// and "SUNNY" all match. Unrecognized conditions pass through
/// unchanged.
pub fn condition_message(description: &str) -> String {
    match description.to_lowercase().as_str() {
        "sunny" => "It's a Beautiful Sunny Day!".to_string(),
        "partly cloudy" => "Expect Some Clouds And Sunshine.".to_string(),
        "cloudy" => "It's a Clody Today.".to_string(),
        "overcast" => "The Sky Is Overcast.".to_string(),
        "rain" => "Don't Forget Your Umbrella! It's Raining.".to_string(),
        "thunderstorm" => "Thunderstorm are Expected Today.".to_string(),
        "snow" => "Bundle up! It's Snowing.".to_string(),
        "mist" => "It's Misty Outside.".to_string(),
        "fog" => "Be Careful, there's Fog Outside.".to_string(),
        _ => description.to_string(),
    }
}

/// Tag a location with the current day part, using the local wall clock
/// at render time. Note this is the machine's clock, not the queried
/// location's local time.
pub fn location_message(location: &str) -> String {
    location_message_at(location, Local::now().hour())
}

/// Hour-parameterized variant of [`location_message`]; `hour` is 0-23.
pub fn location_message_at(location: &str, hour: u32) -> String {
    let is_night = hour >= 18 || hour < 6;
    if is_night {
        format!("{location} at Night")
    } else {
        format!("{location} DuringThe Day")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_below_zero() {
        let msg = temperature_message(-1.0, Unit::Celsius);
        assert!(msg.contains("Freezing"));
        assert_eq!(msg, "It's Freezing at -1℃! bundle up!");
    }

    #[test]
    fn zero_is_quite_cold() {
        assert!(temperature_message(0.0, Unit::Celsius).contains("Quite Cold"));
    }

    #[test]
    fn just_under_ten_is_quite_cold() {
        assert!(temperature_message(9.9, Unit::Celsius).contains("Quite Cold"));
    }

    #[test]
    fn ten_is_light_jacket() {
        assert!(temperature_message(10.0, Unit::Celsius).contains("Comfortable"));
    }

    #[test]
    fn just_under_thirty_is_pleasent() {
        assert!(temperature_message(29.9, Unit::Celsius).contains("Pleasent"));
    }

    #[test]
    fn thirty_is_hot_with_missing_space() {
        let msg = temperature_message(30.0, Unit::Celsius);
        assert!(msg.contains("Hot"));
        assert_eq!(msg, "It's Hot at30℃. Stay Hydrated!");
    }

    #[test]
    fn whole_degrees_render_without_decimal_point() {
        assert_eq!(
            temperature_message(22.0, Unit::Celsius),
            "It's a Pleasent 22℃. Enjoy The Nice Weather!"
        );
    }

    #[test]
    fn non_celsius_falls_back_to_generic() {
        assert_eq!(temperature_message(72.0, Unit::Fahrenheit), "72°F");
    }

    #[test]
    fn known_conditions_match_case_insensitively() {
        assert_eq!(condition_message("Sunny"), "It's a Beautiful Sunny Day!");
        assert_eq!(condition_message("sunny"), "It's a Beautiful Sunny Day!");
        assert_eq!(condition_message("SUNNY"), "It's a Beautiful Sunny Day!");
        assert_eq!(condition_message("Partly cloudy"), "Expect Some Clouds And Sunshine.");
        assert_eq!(condition_message("Overcast"), "The Sky Is Overcast.");
    }

    #[test]
    fn unknown_condition_passes_through() {
        assert_eq!(condition_message("Patchy light drizzle"), "Patchy light drizzle");
    }

    #[test]
    fn day_part_boundaries() {
        assert_eq!(location_message_at("London", 17), "London DuringThe Day");
        assert_eq!(location_message_at("London", 18), "London at Night");
        assert_eq!(location_message_at("London", 5), "London at Night");
        assert_eq!(location_message_at("London", 6), "London DuringThe Day");
        assert_eq!(location_message_at("London", 0), "London at Night");
    }
}
