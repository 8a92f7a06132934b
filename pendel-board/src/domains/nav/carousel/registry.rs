//! Registry for carousel controllers keyed by `CarouselKey`.
//!
//! Carousels register themselves here at mount. Input classification and
//! snapshot application consult this registry, never rendered markup.

use std::collections::HashMap;

use super::state::CarouselState;
use crate::domains::nav::config::PagingConfig;
use crate::domains::nav::types::{CarouselKey, CarouselSpec};

#[derive(Debug, Default)]
pub struct CarouselRegistry {
    states: HashMap<CarouselKey, CarouselState>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Register a carousel (idempotent). Re-registering updates the spec
    /// but keeps slide state, so a remounting view does not lose its
    /// position mid-session.
    pub fn register(
        &mut self,
        key: CarouselKey,
        spec: CarouselSpec,
        cfg: PagingConfig,
    ) -> &mut CarouselState {
        let state = self
            .states
            .entry(key)
            .or_insert_with(|| CarouselState::new(key, spec, cfg));
        state.update_spec(spec);
        state
    }

    pub fn contains(&self, key: CarouselKey) -> bool {
        self.states.contains_key(&key)
    }

    pub fn get(&self, key: CarouselKey) -> Option<&CarouselState> {
        self.states.get(&key)
    }

    pub fn get_mut(&mut self, key: CarouselKey) -> Option<&mut CarouselState> {
        self.states.get_mut(&key)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&CarouselKey, &mut CarouselState)> {
        self.states.iter_mut()
    }

    /// Snapshot of all registered keys.
    pub fn keys(&self) -> Vec<CarouselKey> {
        self.states.keys().copied().collect()
    }
}
