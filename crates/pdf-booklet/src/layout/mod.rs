//! Layout calculation modules for imposition
//!
//! This module handles all the page arithmetic of a booklet:
//! - Signature partitioning (which pages are bound together)
//! - Page count planning (blank padding to whole folded sheets)
//! - Sheet ordering for the 2-up and 8-up layouts
//! - Content placement (scaling, alignment, gutter offset)

mod large;
mod plan;
mod signature;
mod small;
mod transform;
mod types;

pub use large::*;
pub use plan::*;
pub use signature::*;
pub use small::*;
pub use transform::*;
pub use types::*;

use crate::constants::SMALL_PAGES_PER_PASS;
use crate::document::PageSource;
use crate::options::LayoutSettings;
use crate::types::*;

/// Sheets of one signature, in either layout
pub enum SheetLayout<'a, S> {
    Large(LargeLayout<'a, S>),
    Small(SmallLayout<'a, S>),
}

impl<'a, S: PageSource> SheetLayout<'a, S> {
    /// Plan `signature` and build the layout selected by `settings.mode`
    pub fn new(
        signature: Signature<'a, S>,
        signature_number: usize,
        settings: LayoutSettings,
    ) -> Result<Self> {
        let plan = LayoutPlan::new(signature.page_count(), settings.blank_pages);
        Ok(match settings.mode {
            LayoutMode::Large => {
                SheetLayout::Large(LargeLayout::new(signature, signature_number, plan, settings))
            }
            LayoutMode::Small => SheetLayout::Small(SmallLayout::new(
                signature,
                signature_number,
                plan,
                settings,
            )?),
        })
    }
}

impl<S: PageSource> Iterator for SheetLayout<'_, S> {
    type Item = Result<Sheet>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SheetLayout::Large(layout) => layout.next(),
            SheetLayout::Small(layout) => layout.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            SheetLayout::Large(layout) => layout.size_hint(),
            SheetLayout::Small(layout) => layout.size_hint(),
        }
    }
}

/// Number of sheet sides a signature produces in `mode`
pub fn sheet_count(output_page_count: usize, mode: LayoutMode) -> usize {
    match mode {
        LayoutMode::Large => output_page_count / 2,
        LayoutMode::Small => output_page_count.div_ceil(SMALL_PAGES_PER_PASS) * 2,
    }
}
