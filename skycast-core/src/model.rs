use serde::{Deserialize, Serialize};

/// Temperature unit tag attached to a [`WeatherRecord`].
///
/// The fetch client always produces [`Unit::Celsius`]; the other variant
/// exists so the generic temperature formatter branch has something to
/// render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Celsius => "C",
            Unit::Fahrenheit => "F",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized current-conditions record produced by a provider.
///
/// Held only in widget state: created on a successful fetch, replaced by
/// the next search, cleared on error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Provider-reported temperature, degrees Celsius.
    pub temperature_c: f64,
    /// Short free-text condition, provider-controlled vocabulary.
    pub description: String,
    /// Resolved place name as reported by the provider; may differ from
    /// the user's typed input.
    pub location: String,
    pub unit: Unit,
}
