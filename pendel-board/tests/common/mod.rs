//! Shared builders for the navigation integration tests.
#![allow(dead_code)] // each test binary uses a different subset

use chrono::Utc;
use pendel_board::{
    CarouselKey, CarouselSpec, NavigationRoot, PagingConfig, ScreenKind, WrapMode,
};
use pendel_model::prelude::*;

pub const SCREEN_EXTENT: f32 = 720.0;
pub const SLIDE_EXTENT: f32 = 400.0;

/// The production screen set with all three carousels registered and
/// default tuning.
pub fn standard_root() -> NavigationRoot {
    root_with_config(PagingConfig::default())
}

pub fn root_with_config(cfg: PagingConfig) -> NavigationRoot {
    let mut root = NavigationRoot::new(ScreenKind::ALL.to_vec(), SCREEN_EXTENT, cfg);
    root.register_carousel(
        CarouselKey::Journeys,
        CarouselSpec {
            screen: ScreenKind::Overview,
            wrap_mode: WrapMode::Wrapping,
            leading_slides: 0,
            slide_extent: SLIDE_EXTENT,
        },
    );
    root.register_carousel(
        CarouselKey::Predictions,
        CarouselSpec {
            screen: ScreenKind::Predictions,
            wrap_mode: WrapMode::Finite,
            leading_slides: 0,
            slide_extent: SLIDE_EXTENT,
        },
    );
    root.register_carousel(
        CarouselKey::LineDetails,
        CarouselSpec {
            screen: ScreenKind::Lines,
            wrap_mode: WrapMode::Finite,
            leading_slides: 1,
            slide_extent: SLIDE_EXTENT,
        },
    );
    root
}

pub fn line(name: &str) -> TransitLine {
    TransitLine::new(name, VehicleType::MetroBus)
}

pub fn line_stats(name: &str, avg_delay_minutes: f64) -> LineDelayStats {
    LineDelayStats::new(
        line(name),
        DelayStats {
            total_segments: 40,
            avg_delay_minutes,
            max_delay_minutes: avg_delay_minutes.ceil() as i32 + 3,
            min_delay_minutes: 0,
            delayed_percentage: 35.0,
        },
    )
}

/// Snapshot with the given collection sizes.
pub fn snapshot(lines: usize, journeys: usize, predictions: usize) -> BoardSnapshot {
    let generated_at = Utc::now();
    let by_line: Vec<LineDelayStats> = (0..lines)
        .map(|i| line_stats(&format!("{}", i + 1), 1.0 + i as f64))
        .collect();
    let journeys = (0..journeys)
        .map(|i| JourneySummary {
            journey_id: Some(format!("J{i}")),
            line: line(&format!("{}", i + 1)),
            delay_minutes: i as i32 % 7,
            recorded_at: generated_at,
        })
        .collect();
    let predictions = (0..predictions)
        .map(|i| LinePrediction {
            line: line(&format!("{}", i + 1)),
            prediction: DelayPrediction {
                predicted_delay_minutes: Some(2.5),
                classification: Some(DelayClassification {
                    is_delayed: true,
                    probability: 0.7,
                    threshold_minutes: 2.0,
                }),
                generated_at,
            },
        })
        .collect();
    BoardSnapshot {
        generated_at,
        overall: DelayStats::empty(),
        by_line,
        heatmap: Vec::new(),
        predictions,
        journeys,
        weather: WeatherObservation::fallback(),
    }
}
