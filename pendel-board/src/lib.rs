//! Dashboard client core for pendel.
//!
//! The heart of this crate is [`domains::nav`]: the navigation state
//! machine that turns continuous wheel/key input into discrete,
//! exactly-once screen and slide transitions. [`infra`] carries the
//! ambient plumbing (constants, config, the stats backend client and the
//! periodic board feed) and [`app`] the bootstrap glue a host shell uses
//! to wire everything up.

pub mod app;
pub mod domains;
pub mod infra;

pub use domains::nav::config::PagingConfig;
pub use domains::nav::messages::{NavCommand, NavEvent, NavOutput};
pub use domains::nav::root::NavigationRoot;
pub use domains::nav::types::{
    CarouselKey, CarouselSpec, HitRegion, NavKey, RegionId, ScreenKind, WrapMode,
};
