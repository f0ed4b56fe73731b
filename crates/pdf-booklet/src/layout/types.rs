//! Layout data types for imposition
//!
//! These types are the output of the layout engines and the input of
//! whatever renders sheets.

/// A source page reference, or an intentionally blank tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRef {
    /// Index into the whole input document
    Page(usize),
    Blank,
}

impl PageRef {
    pub fn index(self) -> Option<usize> {
        match self {
            PageRef::Page(index) => Some(index),
            PageRef::Blank => None,
        }
    }

    pub fn is_blank(self) -> bool {
        self == PageRef::Blank
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A source page scaled and translated onto a sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub page: PageRef,
    /// The tile the page was fitted into
    pub tile: Rect,
    pub scale: f32,
    /// Sheet x of the page origin (tile origin plus offset)
    pub x: f32,
    /// Sheet y of the page origin
    pub y: f32,
}

/// One side of an output sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Zero-based signature this sheet belongs to
    pub signature: usize,
    pub width: f32,
    pub height: f32,
    pub placements: Vec<Placement>,
}

impl Sheet {
    pub fn new(signature: usize, width: f32, height: f32) -> Self {
        Self {
            signature,
            width,
            height,
            placements: Vec::new(),
        }
    }

    /// Document indices placed on this sheet, in placement order
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.placements.iter().filter_map(|p| p.page.index())
    }
}
