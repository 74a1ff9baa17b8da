//! Application-state model, dataset selection and document saving

pub mod saver;
pub mod selector;
pub(crate) mod types;
mod tests;

pub use saver::{config_only, save, SavedConfigDocument, SavedDataset, SavedMapDocument};
pub use selector::select_datasets;
pub use types::{
    AppState, Dataset, Field, FilterConfig, LayerConfig, MapConfig, MapInfo, MapStyle, Row, UiState,
};
