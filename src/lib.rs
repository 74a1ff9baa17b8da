pub mod api;
pub mod commands;
pub mod delivery;
pub mod document;
pub mod export;
pub mod geometry;
pub mod serializers;
pub mod state;
pub mod utils;

pub use crate::api::CartoKit;

pub use delivery::{DeliverySink, FileSink, MemorySink};
pub use export::{ExportError, ExportResult, NamedPayload};
pub use geometry::{calculate_export_image_size, scale_from_image_size, ExportGeometry, PresetRegistry};
pub use state::{AppState, Dataset};
