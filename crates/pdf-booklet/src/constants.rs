//! Shared constants for booklet imposition
//!
//! This module centralizes magic numbers used by the unit parser,
//! the layout engines and the PDF adapter.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter, derived from A5 (148mm wide = 420pt)
pub const UNITS_PER_MM: f64 = 420.0 / 148.0;

/// Points per inch, derived from letter (8.5in wide = 612pt)
pub const UNITS_PER_INCH: f64 = 612.0 / 8.5;

// =============================================================================
// Page Counts
// =============================================================================

/// Pages on one folded sheet (two sides, two leaves)
pub const PAGES_PER_FOLD: usize = 4;

/// Queue entries consumed by one small-layout sheet side
pub const SMALL_TILES_PER_SIDE: usize = 8;

/// Pages covered by one pass of the small-layout pointer walk
pub const SMALL_PAGES_PER_PASS: usize = 16;

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page dimensions as tuple (width, height), US Letter
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (612.0, 792.0);
