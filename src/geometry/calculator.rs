//! Export geometry calculation
//!
//! Derives the final output pixel dimensions and DPI-equivalent scale
//! factor for an image export from the source canvas size and the chosen
//! resolution and ratio presets.

use log::debug;

use super::presets::PresetRegistry;

/// Derived output geometry for an image export
///
/// Recomputed on every request, never persisted. `scale` is `None` exactly
/// when the ratio preset is the custom variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportGeometry {
    /// Resolution scale factor, absent for custom-ratio output
    pub scale: Option<f64>,
    /// Final output width in pixels
    pub image_width: u32,
    /// Final output height in pixels
    pub image_height: u32,
}

/// Calculate the output image size for a map surface and preset pair
///
/// The resolution preset's sizing rule is applied to the raw map
/// dimensions first, then the ratio preset's rule to the scaled result.
/// Unknown preset identifiers fall back to the registry defaults
/// (4:3 ratio, 1x resolution).
///
/// # Arguments
/// * `map_width` - Width of the source map surface in pixels
/// * `map_height` - Height of the source map surface in pixels
/// * `ratio_id` - Identifier of the requested ratio preset
/// * `resolution_id` - Identifier of the requested resolution preset
/// * `registry` - Preset registry to resolve identifiers against
///
/// # Returns
/// The derived geometry, or None when the source surface has no area
pub fn calculate_export_image_size(
    map_width: i32,
    map_height: i32,
    ratio_id: &str,
    resolution_id: &str,
    registry: &PresetRegistry,
) -> Option<ExportGeometry> {
    if map_width <= 0 || map_height <= 0 {
        debug!(
            "no valid source surface to scale from ({}x{})",
            map_width, map_height
        );
        return None;
    }

    let ratio = registry
        .ratio(ratio_id)
        .unwrap_or_else(|| registry.default_ratio());
    let resolution = registry
        .resolution(resolution_id)
        .unwrap_or_else(|| registry.default_resolution());

    let (scaled_width, scaled_height) = resolution.size(map_width as u32, map_height as u32);
    let (image_width, image_height) = ratio.size(scaled_width, scaled_height);

    let scale = if ratio.is_custom() {
        None
    } else {
        Some(resolution.scale())
    };

    Some(ExportGeometry {
        scale,
        image_width,
        image_height,
    })
}

/// Scalar for converting on-screen overlay coordinates into export-image
/// coordinates
///
/// Picks the width axis when the image is landscape or square, the height
/// axis otherwise, and returns the image/map quotient on that axis.
/// Any non-positive input yields the neutral scale 1.0.
pub fn scale_from_image_size(image_width: i32, image_height: i32, map_width: i32, map_height: i32) -> f64 {
    if image_width <= 0 || image_height <= 0 || map_width <= 0 || map_height <= 0 {
        return 1.0;
    }

    if image_width >= image_height {
        image_width as f64 / map_width as f64
    } else {
        image_height as f64 / map_height as f64
    }
}
