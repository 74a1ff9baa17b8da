//! Output geometry for image exports
//!
//! This module derives final output pixel dimensions and scale factors
//! from resolution and aspect-ratio presets.

pub mod calculator;
pub mod presets;
mod tests;

pub use calculator::{calculate_export_image_size, scale_from_image_size, ExportGeometry};
pub use presets::{PresetRegistry, RatioPreset, ResolutionPreset};
