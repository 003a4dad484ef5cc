//! Terminal rendering of the widget state: an error line when the last
//! search failed, otherwise the three icon lines of the original
//! widget (thermometer, cloud, map pin).

use skycast_core::{WeatherWidget, format};

pub fn render(widget: &WeatherWidget) {
    if let Some(error) = widget.error() {
        println!("{error}");
        return;
    }

    if let Some(weather) = widget.weather() {
        println!(
            "🌡️  {}",
            format::temperature_message(weather.temperature_c, weather.unit)
        );
        println!("☁️  {}", format::condition_message(&weather.description));
        println!("📍 {}", format::location_message(&weather.location));
    }
}
