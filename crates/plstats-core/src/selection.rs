// Selection controller: owns the current player key for one session.
//
// A selection is validated before any state changes, then every deriver runs
// against the new key while the controller sits in `Transitioning`. Callers
// hold `&mut self` for the whole call, so a second selection cannot start
// until the first has produced its complete bundle.

use std::sync::Arc;

use tracing::{debug, info};

use crate::index::{EntityIndex, EntityNotFound};
use crate::views::{self, PlayerViews};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Idle { current: String },
    Transitioning { current: String, previous: String },
}

impl SelectionState {
    pub fn current(&self) -> &str {
        match self {
            SelectionState::Idle { current } => current,
            SelectionState::Transitioning { current, .. } => current,
        }
    }
}

pub struct SelectionController {
    index: Arc<EntityIndex>,
    state: SelectionState,
    /// Incremented on every accepted selection. Bundles carry it so
    /// consumers can drop anything older than what they already show.
    generation: u64,
}

impl SelectionController {
    /// Start a session on `default_key`, which must exist in the index.
    pub fn new(index: Arc<EntityIndex>, default_key: &str) -> Result<Self, EntityNotFound> {
        index.lookup_profile(default_key)?;
        Ok(SelectionController {
            index,
            state: SelectionState::Idle {
                current: default_key.to_string(),
            },
            generation: 0,
        })
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn current(&self) -> &str {
        self.state.current()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn index(&self) -> &Arc<EntityIndex> {
        &self.index
    }

    /// Switch to `key` and derive its full bundle. Unknown keys leave the
    /// state and generation untouched.
    pub fn select(&mut self, key: &str) -> Result<PlayerViews, EntityNotFound> {
        let profile = self.index.lookup_profile(key)?;
        let matches = self.index.lookup_matches(key);

        let previous = self.state.current().to_string();
        self.state = SelectionState::Transitioning {
            current: key.to_string(),
            previous,
        };

        let mut bundle = views::derive_all(profile, matches);

        self.generation += 1;
        bundle.generation = self.generation;
        if let SelectionState::Transitioning { previous, .. } = &self.state {
            debug!(
                "Selection {} -> {} (generation {})",
                previous, key, self.generation
            );
        }
        self.state = SelectionState::Idle {
            current: key.to_string(),
        };
        info!("Selected {}", key);
        Ok(bundle)
    }

    /// Re-derive the current selection without changing state or generation.
    pub fn refresh(&self) -> Result<PlayerViews, EntityNotFound> {
        let mut bundle = views::get_view_models(&self.index, self.state.current())?;
        bundle.generation = self.generation;
        Ok(bundle)
    }
}
