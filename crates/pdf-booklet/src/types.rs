use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Unable to parse parameter '{0}'")]
    Format(String),
    #[error("Page {page} out of range ({start} to {end})")]
    Range {
        page: usize,
        start: usize,
        end: usize,
    },
    #[error("Page index {index} out of bounds (document has {count} pages)")]
    PageIndex { index: usize, count: usize },
    #[error("No pages to impose")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Destination paper sizes, in points (1/72 inch), portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PaperSize {
    #[default]
    Letter,
    Legal,
    Tabloid,
    A5,
    A4,
}

impl PaperSize {
    pub const ALL: [PaperSize; 5] = [
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::Tabloid,
        PaperSize::A5,
        PaperSize::A4,
    ];

    /// Portrait (width, height) in points
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::Legal => (612.0, 1008.0),
            PaperSize::Tabloid => (792.0, 1224.0),
            PaperSize::A5 => (420.0, 595.0),
            PaperSize::A4 => (595.0, 842.0),
        }
    }

    /// Output sheet dimensions. Booklets print landscape relative to the paper.
    pub fn rotated_dimensions(self) -> (f32, f32) {
        let (width, height) = self.dimensions();
        (height, width)
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::Letter => "letter",
            PaperSize::Legal => "legal",
            PaperSize::Tabloid => "tabloid",
            PaperSize::A5 => "a5",
            PaperSize::A4 => "a4",
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperSize {
    type Err = BookletError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        PaperSize::ALL
            .into_iter()
            .find(|paper| paper.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = PaperSize::ALL.iter().map(|p| p.name()).collect();
                BookletError::Config(format!(
                    "paper '{}' not valid, expected one of: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}

/// Vertical alignment of a scaled page inside its tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Alignment {
    Top,
    #[default]
    Center,
    Bottom,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alignment::Top => "top",
            Alignment::Center => "center",
            Alignment::Bottom => "bottom",
        })
    }
}

impl FromStr for Alignment {
    type Err = BookletError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Alignment::Top),
            "center" => Ok(Alignment::Center),
            "bottom" => Ok(Alignment::Bottom),
            _ => Err(BookletError::Config(format!("Invalid valign value '{}'", s))),
        }
    }
}

/// Booklet size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutMode {
    /// Two pages side by side per sheet side, one fold
    #[default]
    Large,
    /// Eight pages in a 2x4 grid per sheet side, for deeper folding
    Small,
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LayoutMode::Large => "large",
            LayoutMode::Small => "small",
        })
    }
}

impl FromStr for LayoutMode {
    type Err = BookletError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "large" => Ok(LayoutMode::Large),
            "small" => Ok(LayoutMode::Small),
            _ => Err(BookletError::Config(format!("Illegal booklet size '{}'", s))),
        }
    }
}

/// Statistics about a planned booklet
#[derive(Debug, Clone, PartialEq)]
pub struct BookletStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Number of signatures
    pub signatures: usize,
    /// Source pages in each signature
    pub pages_per_signature: Vec<usize>,
    /// Padded page count of each signature
    pub output_pages_per_signature: Vec<usize>,
    /// Total padded page count
    pub output_pages: usize,
    /// Requested blanks plus padding, over all signatures
    pub blank_pages_added: usize,
    /// Output sheet sides (pages of the imposed PDF)
    pub sheet_sides: usize,
    /// Physical sheets of paper when printed duplex
    pub paper_sheets: usize,
}
