//! WMO weather interpretation codes

use std::fmt;

use serde::{Deserialize, Serialize};

/// A WMO weather interpretation code as reported by the API.
///
/// The known set maps to fixed human-readable labels; codes outside the
/// known set keep their numeric value and stringify as `Unknown (<code>)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub u16);

impl WeatherCode {
    pub const CLEAR_SKY: Self = Self(0);
    pub const MAINLY_CLEAR: Self = Self(1);
    pub const PARTLY_CLOUDY: Self = Self(2);
    pub const OVERCAST: Self = Self(3);
    pub const FOG: Self = Self(45);
    pub const DEPOSITING_RIME_FOG: Self = Self(48);
    pub const DRIZZLE_LIGHT: Self = Self(51);
    pub const DRIZZLE_MODERATE: Self = Self(53);
    pub const DRIZZLE_DENSE: Self = Self(55);
    pub const FREEZING_DRIZZLE_LIGHT: Self = Self(56);
    pub const FREEZING_DRIZZLE_DENSE: Self = Self(57);
    pub const RAIN_SLIGHT: Self = Self(61);
    pub const RAIN_MODERATE: Self = Self(63);
    pub const RAIN_HEAVY: Self = Self(65);
    pub const FREEZING_RAIN_LIGHT: Self = Self(66);
    pub const FREEZING_RAIN_HEAVY: Self = Self(67);
    pub const SNOW_FALL_SLIGHT: Self = Self(71);
    pub const SNOW_FALL_MODERATE: Self = Self(73);
    pub const SNOW_FALL_HEAVY: Self = Self(75);
    pub const SNOW_GRAINS: Self = Self(77);
    pub const RAIN_SHOWERS_SLIGHT: Self = Self(80);
    pub const RAIN_SHOWERS_MODERATE: Self = Self(81);
    pub const RAIN_SHOWERS_VIOLENT: Self = Self(82);
    pub const SNOW_SHOWERS_SLIGHT: Self = Self(85);
    pub const SNOW_SHOWERS_HEAVY: Self = Self(86);
    pub const THUNDERSTORM_SLIGHT: Self = Self(95);
    pub const THUNDERSTORM_WITH_HAIL_SLIGHT: Self = Self(96);
    pub const THUNDERSTORM_WITH_HAIL_HEAVY: Self = Self(99);

    fn label(self) -> Option<&'static str> {
        let label = match self {
            Self::CLEAR_SKY => "Clear sky",
            Self::MAINLY_CLEAR => "Mainly clear",
            Self::PARTLY_CLOUDY => "Partly cloudy",
            Self::OVERCAST => "Overcast",
            Self::FOG => "Fog",
            Self::DEPOSITING_RIME_FOG => "Depositing rime fog",
            Self::DRIZZLE_LIGHT => "Light drizzle",
            Self::DRIZZLE_MODERATE => "Moderate drizzle",
            Self::DRIZZLE_DENSE => "Dense drizzle",
            Self::FREEZING_DRIZZLE_LIGHT => "Light freezing drizzle",
            Self::FREEZING_DRIZZLE_DENSE => "Dense freezing drizzle",
            Self::RAIN_SLIGHT => "Slight rain",
            Self::RAIN_MODERATE => "Moderate rain",
            Self::RAIN_HEAVY => "Heavy rain",
            Self::FREEZING_RAIN_LIGHT => "Light freezing rain",
            Self::FREEZING_RAIN_HEAVY => "Heavy freezing rain",
            Self::SNOW_FALL_SLIGHT => "Slight snow fall",
            Self::SNOW_FALL_MODERATE => "Moderate snow fall",
            Self::SNOW_FALL_HEAVY => "Heavy snow fall",
            Self::SNOW_GRAINS => "Snow grains",
            Self::RAIN_SHOWERS_SLIGHT => "Slight rain showers",
            Self::RAIN_SHOWERS_MODERATE => "Moderate rain showers",
            Self::RAIN_SHOWERS_VIOLENT => "Violent rain showers",
            Self::SNOW_SHOWERS_SLIGHT => "Slight snow showers",
            Self::SNOW_SHOWERS_HEAVY => "Heavy snow showers",
            Self::THUNDERSTORM_SLIGHT => "Thunderstorm",
            Self::THUNDERSTORM_WITH_HAIL_SLIGHT => "Thunderstorm with slight hail",
            Self::THUNDERSTORM_WITH_HAIL_HEAVY => "Thunderstorm with heavy hail",
            _ => return None,
        };
        Some(label)
    }

    /// Longer description of the weather condition.
    #[must_use]
    pub fn description(self) -> String {
        let text = match self {
            Self::CLEAR_SKY => "Clear sky with no clouds",
            Self::MAINLY_CLEAR => "Mainly clear skies with minimal cloud cover",
            Self::PARTLY_CLOUDY => "Partly cloudy skies",
            Self::OVERCAST => "Overcast with full cloud cover",
            Self::FOG => "Foggy conditions with reduced visibility",
            Self::DEPOSITING_RIME_FOG => "Fog depositing rime ice on surfaces",
            Self::DRIZZLE_LIGHT => "Light drizzle with fine water droplets",
            Self::DRIZZLE_MODERATE => "Moderate drizzle",
            Self::DRIZZLE_DENSE => "Dense drizzle with heavier water droplets",
            Self::FREEZING_DRIZZLE_LIGHT => "Light freezing drizzle that may cause ice",
            Self::FREEZING_DRIZZLE_DENSE => "Dense freezing drizzle with significant icing risk",
            Self::RAIN_SLIGHT => "Slight rain",
            Self::RAIN_MODERATE => "Moderate rain",
            Self::RAIN_HEAVY => "Heavy rain with high precipitation",
            Self::FREEZING_RAIN_LIGHT => "Light freezing rain that may cause ice accumulation",
            Self::FREEZING_RAIN_HEAVY => "Heavy freezing rain with significant ice accumulation",
            Self::SNOW_FALL_SLIGHT => "Slight snow fall",
            Self::SNOW_FALL_MODERATE => "Moderate snow fall",
            Self::SNOW_FALL_HEAVY => "Heavy snow fall with significant accumulation",
            Self::SNOW_GRAINS => "Snow grains - small, white, opaque ice particles",
            Self::RAIN_SHOWERS_SLIGHT => "Slight rain showers",
            Self::RAIN_SHOWERS_MODERATE => "Moderate rain showers",
            Self::RAIN_SHOWERS_VIOLENT => "Violent rain showers with intense precipitation",
            Self::SNOW_SHOWERS_SLIGHT => "Slight snow showers",
            Self::SNOW_SHOWERS_HEAVY => "Heavy snow showers",
            Self::THUNDERSTORM_SLIGHT => "Thunderstorm with lightning",
            Self::THUNDERSTORM_WITH_HAIL_SLIGHT => "Thunderstorm with slight hail",
            Self::THUNDERSTORM_WITH_HAIL_HEAVY => "Thunderstorm with heavy hail - take shelter",
            Self(code) => return format!("Unknown weather condition (code {code})"),
        };
        text.to_string()
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "Unknown ({})", self.0),
        }
    }
}

impl From<u16> for WeatherCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(WeatherCode::CLEAR_SKY, "Clear sky")]
    #[case(WeatherCode::OVERCAST, "Overcast")]
    #[case(WeatherCode::FOG, "Fog")]
    #[case(WeatherCode::RAIN_SLIGHT, "Slight rain")]
    #[case(WeatherCode::THUNDERSTORM_SLIGHT, "Thunderstorm")]
    fn known_codes_have_fixed_labels(#[case] code: WeatherCode, #[case] expected: &str) {
        assert_eq!(code.to_string(), expected);
    }

    #[test]
    fn unknown_code_keeps_numeric_value() {
        assert_eq!(WeatherCode(999).to_string(), "Unknown (999)");
        assert_eq!(
            WeatherCode(999).description(),
            "Unknown weather condition (code 999)"
        );
    }

    #[test]
    fn deserializes_from_bare_number() {
        let code: WeatherCode = serde_json::from_str("3").unwrap();
        assert_eq!(code, WeatherCode::OVERCAST);
    }
}
