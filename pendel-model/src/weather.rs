#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current weather as delivered by the Open-Meteo forecast endpoint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherObservation {
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub wind_speed_kmh: f64,
    /// WMO weather interpretation code.
    pub weather_code: u16,
    pub humidity_percent: f64,
    pub cloud_cover_percent: f64,
}

impl WeatherObservation {
    /// Neutral observation used when the weather service is unreachable.
    pub fn fallback() -> Self {
        Self {
            temperature_c: 10.0,
            precipitation_mm: 0.0,
            wind_speed_kmh: 10.0,
            weather_code: 0,
            humidity_percent: 70.0,
            cloud_cover_percent: 50.0,
        }
    }

    /// Human-readable label for the WMO code.
    pub fn description(&self) -> &'static str {
        match self.weather_code {
            0 => "Clear sky",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast",
            45 => "Foggy",
            48 => "Depositing rime fog",
            51 => "Light drizzle",
            53 => "Moderate drizzle",
            55 => "Dense drizzle",
            56 => "Light freezing drizzle",
            57 => "Dense freezing drizzle",
            61 => "Slight rain",
            63 => "Moderate rain",
            65 => "Heavy rain",
            66 => "Light freezing rain",
            67 => "Heavy freezing rain",
            71 => "Slight snow",
            73 => "Moderate snow",
            75 => "Heavy snow",
            77 => "Snow grains",
            80 => "Slight rain showers",
            81 => "Moderate rain showers",
            82 => "Violent rain showers",
            85 => "Slight snow showers",
            86 => "Heavy snow showers",
            95 => "Thunderstorm",
            96 => "Thunderstorm with slight hail",
            99 => "Thunderstorm with heavy hail",
            _ => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_descriptions() {
        let mut obs = WeatherObservation::fallback();
        assert_eq!(obs.description(), "Clear sky");
        obs.weather_code = 95;
        assert_eq!(obs.description(), "Thunderstorm");
        obs.weather_code = 42;
        assert_eq!(obs.description(), "Unknown");
    }
}
