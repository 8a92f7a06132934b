use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::line::{LineKind, TransitLine, VehicleType};
use crate::weather::WeatherObservation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input features for the delay regressor and classifier.
///
/// Field names and defaults match the model's training schema; changing
/// either silently degrades predictions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PredictionFeatures {
    pub line: String,
    pub vehicle_type: VehicleType,
    pub line_type: LineKind,
    pub direction: String,
    /// 0..=23.
    pub hour_of_day: u8,
    /// 1 = Sunday .. 7 = Saturday.
    pub day_of_week: u8,
    pub temperature_c: f64,
    pub precipitation_mm: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: u16,
    pub humidity_percent: f64,
    pub cloud_cover_percent: f64,
}

impl Default for PredictionFeatures {
    fn default() -> Self {
        Self {
            line: "6".to_string(),
            vehicle_type: VehicleType::MetroBus,
            line_type: LineKind::Bus,
            direction: "unknown".to_string(),
            hour_of_day: 12,
            day_of_week: 3,
            temperature_c: 10.0,
            precipitation_mm: 0.0,
            wind_speed_kmh: 10.0,
            weather_code: 0,
            humidity_percent: 70.0,
            cloud_cover_percent: 50.0,
        }
    }
}

impl PredictionFeatures {
    /// Build the feature row for one line under the current weather.
    pub fn for_line(
        line: &TransitLine,
        weather: &WeatherObservation,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            line: line.name.clone(),
            vehicle_type: line.vehicle_type,
            line_type: line.kind(),
            direction: line
                .direction
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            hour_of_day: at.hour() as u8,
            day_of_week: at.weekday().number_from_sunday() as u8,
            temperature_c: weather.temperature_c,
            precipitation_mm: weather.precipitation_mm,
            wind_speed_kmh: weather.wind_speed_kmh,
            weather_code: weather.weather_code,
            humidity_percent: weather.humidity_percent,
            cloud_cover_percent: weather.cloud_cover_percent,
        }
    }

    /// Derived feature: 07-09 and 16-19 local hours.
    pub fn is_rush_hour(&self) -> bool {
        (7..=9).contains(&self.hour_of_day) || (16..=19).contains(&self.hour_of_day)
    }

    /// Derived feature: Sunday or Saturday in the feed's 1..=7 convention.
    pub fn is_weekend(&self) -> bool {
        self.day_of_week == 1 || self.day_of_week == 7
    }
}

/// Binary delayed/not-delayed verdict with the classifier's confidence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DelayClassification {
    pub is_delayed: bool,
    pub probability: f64,
    pub threshold_minutes: f64,
}

/// One prediction result. Either half may be absent when the
/// corresponding model failed to load server-side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DelayPrediction {
    pub predicted_delay_minutes: Option<f64>,
    pub classification: Option<DelayClassification>,
    pub generated_at: DateTime<Utc>,
}

/// A prediction paired with the line it was computed for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinePrediction {
    pub line: TransitLine,
    pub prediction: DelayPrediction,
}
