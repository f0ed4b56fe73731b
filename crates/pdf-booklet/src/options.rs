use crate::constants::PAGES_PER_FOLD;
use crate::types::*;
use crate::units::parse_units;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet configuration, as supplied by the user
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Output paper
    pub paper: PaperSize,
    pub layout: LayoutMode,

    // Page counts
    pub blank_pages: usize,
    /// Maximum pages per signature, 0 for a single signature
    pub signature_size: usize,

    // Placement adjustments, e.g. "5mm" or "-0.1in"
    pub hoffset: Option<String>,
    pub width_adjust: Option<String>,
    pub height_adjust: Option<String>,
    pub alignment: Alignment,
}

impl BookletOptions {
    /// Parse options from JSON
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Serialize options to pretty JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.signature_size % PAGES_PER_FOLD != 0 {
            return Err(BookletError::Config(format!(
                "signature size must be a multiple of {}, got {}",
                PAGES_PER_FOLD, self.signature_size
            )));
        }
        Ok(())
    }

    /// Validate and parse everything the layout engines need
    pub fn resolve(&self) -> Result<LayoutSettings> {
        self.validate()?;
        Ok(LayoutSettings {
            paper: self.paper,
            mode: self.layout,
            blank_pages: self.blank_pages,
            alignment: self.alignment,
            adjustments: Adjustments {
                width: parse_units(self.width_adjust.as_deref())?,
                height: parse_units(self.height_adjust.as_deref())?,
                hoffset: self
                    .hoffset
                    .as_deref()
                    .map(|value| parse_units(Some(value)))
                    .transpose()?,
            },
        })
    }
}

/// Tile-fill adjustments in points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Adjustments {
    /// Added to the tile width when choosing the scale
    pub width: i32,
    /// Added to the tile height when choosing the scale
    pub height: i32,
    /// Gutter shift, applied away from or toward the spine by page parity
    pub hoffset: Option<i32>,
}

/// Validated, parsed settings shared by every signature of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSettings {
    pub paper: PaperSize,
    pub mode: LayoutMode,
    pub blank_pages: usize,
    pub alignment: Alignment,
    pub adjustments: Adjustments,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            paper: PaperSize::Letter,
            mode: LayoutMode::Large,
            blank_pages: 0,
            alignment: Alignment::Center,
            adjustments: Adjustments::default(),
        }
    }
}
