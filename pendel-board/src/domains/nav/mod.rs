//! Navigation core: discrete paging over continuous input.
//!
//! Two nested paging axes share the input stream. The vertical axis
//! pages a fixed set of full-viewport screens; the horizontal axis pages
//! variable-length slide carousels nested inside some of those screens.
//! [`classifier::InputClassifier`] decides which axis owns an event,
//! [`screen::ScreenNavigator`] and [`carousel`] own the per-axis state
//! machines, [`sync::ScrollSyncObserver`] reconciles believed indices
//! with the offsets the host actually rendered, and
//! [`root::NavigationRoot`] composes the lot behind one surface.

pub mod animator;
pub mod carousel;
pub mod classifier;
pub mod config;
pub mod messages;
pub mod root;
pub mod screen;
pub mod sync;
pub mod types;
