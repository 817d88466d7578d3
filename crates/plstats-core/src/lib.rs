// Core library for the player stats dashboard: dataset loading, the entity
// index, per-panel view-model derivers and the selection controller.

pub mod dataset;
pub mod index;
pub mod selection;
pub mod views;

pub use dataset::{load_index, DataPaths, DatasetError, MatchRating, PlayerProfile};
pub use index::{EntityIndex, EntityNotFound};
pub use selection::{SelectionController, SelectionState};
pub use views::{get_view_models, PlayerViews};
