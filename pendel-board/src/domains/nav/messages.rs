//! Commands and events crossing the core/host boundary.

use super::types::{CarouselKey, RegionId, ScreenKind};

/// An imperative scroll the host must apply to a container. Scroll-to is
/// idempotent-overridable: issuing a new command for the same region
/// supersedes the previous one, no cancellation handshake needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavCommand {
    ScrollTo { region: RegionId, offset: f32 },
}

/// State-change notifications for the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    ScreenChanged { index: usize, screen: ScreenKind },
    SlideChanged { key: CarouselKey, index: usize },
}

/// Everything one core entry point produced.
///
/// `pass_through` tells the host whether to let the native scroll
/// container also handle the triggering event: true for carousel-bound
/// wheel input (native horizontal swiping stays in charge) and ignored
/// regions, false when the core consumed the event for screen paging.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NavOutput {
    pub commands: Vec<NavCommand>,
    pub events: Vec<NavEvent>,
    pub pass_through: bool,
}

impl NavOutput {
    /// An empty outcome that leaves the event to the native container.
    pub fn native() -> Self {
        Self {
            pass_through: true,
            ..Self::default()
        }
    }
}
