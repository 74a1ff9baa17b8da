//! Resolution and aspect-ratio presets
//!
//! Presets are a finite enumerated set with embedded sizing rules. The
//! registry holding them is always passed explicitly to callers; the
//! built-in table can be extended with fixed-ratio entries from a TOML
//! file for deployments that need additional page formats.

use lazy_static::lazy_static;
use log::debug;

use crate::export::errors::{ExportError, ExportResult};

lazy_static! {
    static ref BUILT_IN: PresetRegistry = PresetRegistry::new();
}

/// Named scaling rule mapping base dimensions to scaled pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPreset {
    /// Identity scaling
    OneX,
    /// Doubled dimensions
    TwoX,
}

impl ResolutionPreset {
    /// Identifier used in requests and on the CLI
    pub fn id(&self) -> &'static str {
        match self {
            ResolutionPreset::OneX => "1x",
            ResolutionPreset::TwoX => "2x",
        }
    }

    /// Scale factor relative to the source surface
    pub fn scale(&self) -> f64 {
        match self {
            ResolutionPreset::OneX => 1.0,
            ResolutionPreset::TwoX => 2.0,
        }
    }

    /// Apply the scaling rule to base dimensions
    pub fn size(&self, width: u32, height: u32) -> (u32, u32) {
        match self {
            ResolutionPreset::OneX => (width, height),
            ResolutionPreset::TwoX => (width * 2, height * 2),
        }
    }
}

/// Named aspect-ratio rule mapping dimensions to a final width/height
#[derive(Debug, Clone, PartialEq)]
pub enum RatioPreset {
    /// Keep the on-screen aspect ratio
    Screen,
    /// Classic 4:3 page format
    FourByThree,
    /// Widescreen 16:9 format
    SixteenByNine,
    /// Fixed ratio loaded from a registry file
    Fixed { id: String, height_per_width: f64 },
    /// Caller-supplied dimensions pass through unchanged
    Custom,
}

impl RatioPreset {
    /// Identifier used in requests and on the CLI
    pub fn id(&self) -> &str {
        match self {
            RatioPreset::Screen => "screen",
            RatioPreset::FourByThree => "4:3",
            RatioPreset::SixteenByNine => "16:9",
            RatioPreset::Fixed { id, .. } => id,
            RatioPreset::Custom => "custom",
        }
    }

    /// Apply the ratio rule to already-scaled dimensions
    pub fn size(&self, width: u32, height: u32) -> (u32, u32) {
        match self {
            RatioPreset::Screen | RatioPreset::Custom => (width, height),
            RatioPreset::FourByThree => (width, ratio_height(width, 0.75)),
            RatioPreset::SixteenByNine => (width, ratio_height(width, 0.5625)),
            RatioPreset::Fixed {
                height_per_width, ..
            } => (width, ratio_height(width, *height_per_width)),
        }
    }

    /// Whether this is the custom pass-through variant
    ///
    /// Custom output is not a simple multiple of the source surface, so
    /// results derived from it carry no scale factor.
    pub fn is_custom(&self) -> bool {
        matches!(self, RatioPreset::Custom)
    }
}

fn ratio_height(width: u32, height_per_width: f64) -> u32 {
    (width as f64 * height_per_width).round().max(1.0) as u32
}

/// Registry of the preset enumerations with their defaults
///
/// The registry is an explicit argument to the geometry calculator rather
/// than a hidden module-level lookup; [`PresetRegistry::built_in`] is the
/// named default table.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    ratios: Vec<RatioPreset>,
    resolutions: Vec<ResolutionPreset>,
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetRegistry {
    /// Create a registry with the built-in preset set
    pub fn new() -> Self {
        PresetRegistry {
            ratios: vec![
                RatioPreset::Screen,
                RatioPreset::FourByThree,
                RatioPreset::SixteenByNine,
                RatioPreset::Custom,
            ],
            resolutions: vec![ResolutionPreset::OneX, ResolutionPreset::TwoX],
        }
    }

    /// Shared instance of the built-in registry
    pub fn built_in() -> &'static PresetRegistry {
        &BUILT_IN
    }

    /// Look up a ratio preset by identifier
    pub fn ratio(&self, id: &str) -> Option<&RatioPreset> {
        self.ratios.iter().find(|r| r.id() == id)
    }

    /// Look up a resolution preset by identifier
    pub fn resolution(&self, id: &str) -> Option<ResolutionPreset> {
        self.resolutions.iter().copied().find(|r| r.id() == id)
    }

    /// Default ratio used when a request names an unknown preset
    pub fn default_ratio(&self) -> &RatioPreset {
        &RatioPreset::FourByThree
    }

    /// Default resolution used when a request names an unknown preset
    pub fn default_resolution(&self) -> ResolutionPreset {
        ResolutionPreset::OneX
    }

    /// All ratio identifiers known to this registry
    pub fn ratio_ids(&self) -> Vec<&str> {
        self.ratios.iter().map(|r| r.id()).collect()
    }

    /// Extend the registry with fixed-ratio entries from a TOML document
    ///
    /// Expected shape:
    /// ```toml
    /// [[ratio]]
    /// id = "3:2"
    /// height_per_width = 0.6667
    /// ```
    ///
    /// # Arguments
    /// * `content` - TOML text listing `[[ratio]]` entries
    ///
    /// # Returns
    /// Ok on success, or an error naming the offending entry
    pub fn extend_from_toml_str(&mut self, content: &str) -> ExportResult<()> {
        let value: toml::Value = content
            .parse()
            .map_err(|e: toml::de::Error| ExportError::InvalidPresetFile(e.to_string()))?;

        let Some(entries) = value.get("ratio").and_then(|v| v.as_array()) else {
            return Ok(());
        };

        for entry in entries {
            let id = entry
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or_else(|| {
                    ExportError::InvalidPresetFile("ratio entry missing 'id'".to_string())
                })?;

            let height_per_width = entry
                .get("height_per_width")
                .and_then(|v| v.as_float())
                .ok_or_else(|| {
                    ExportError::InvalidPresetFile(format!(
                        "ratio '{}' missing 'height_per_width'",
                        id
                    ))
                })?;

            if height_per_width <= 0.0 {
                return Err(ExportError::InvalidPresetFile(format!(
                    "ratio '{}' must have a positive height_per_width",
                    id
                )));
            }

            if self.ratio(id).is_some() {
                return Err(ExportError::InvalidPresetFile(format!(
                    "ratio '{}' is already defined",
                    id
                )));
            }

            debug!("registering ratio preset '{}' ({})", id, height_per_width);
            self.ratios.push(RatioPreset::Fixed {
                id: id.to_string(),
                height_per_width,
            });
        }

        Ok(())
    }
}
