//! Collaborator seams between the imposition engine and a document format
//!
//! The layout engines only need page sizes; the orchestrator additionally
//! moves opaque page handles from a [`PageSource`] onto sheets owned by a
//! [`SheetSink`]. The [`crate::pdf`] module implements all three traits on
//! top of `lopdf`.

use crate::types::*;
use std::io::Write;

/// Read-only access to the pages of an input document
pub trait PageSource {
    /// Opaque handle to a page's content
    type Page;

    fn page_count(&self) -> usize;

    /// (width, height) in points
    fn page_dimensions(&self, index: usize) -> Result<(f32, f32)>;

    fn page_handle(&self, index: usize) -> Result<Self::Page>;

    /// Bounds check shared by implementations
    fn check_index(&self, index: usize) -> Result<()> {
        let count = self.page_count();
        if index < count {
            Ok(())
        } else {
            Err(BookletError::PageIndex { index, count })
        }
    }
}

/// Receives blank sheets and the pages placed on them
pub trait SheetSink {
    type Page;
    /// A sheet under construction
    type Sheet;

    fn begin_sheet(&mut self, width: f32, height: f32) -> Result<Self::Sheet>;

    /// Draw `page` scaled by `scale` with its origin at (x, y) on the sheet
    fn place(
        &mut self,
        sheet: &mut Self::Sheet,
        page: &Self::Page,
        scale: f32,
        x: f32,
        y: f32,
    ) -> Result<()>;

    fn finish_sheet(&mut self, sheet: Self::Sheet) -> Result<()>;
}

/// Serializes the finished sheet sequence
pub trait DocumentWriter {
    /// Write the document, returning the number of sheets written
    fn write_document<W: Write>(self, writer: &mut W) -> Result<usize>;
}

/// Pages of fixed sizes with their index as handle.
///
/// Useful for planning and statistics when no real document is loaded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageSizes(pub Vec<(f32, f32)>);

impl PageSizes {
    /// `count` pages of the same size
    pub fn uniform(count: usize, width: f32, height: f32) -> Self {
        Self(vec![(width, height); count])
    }
}

impl PageSource for PageSizes {
    type Page = usize;

    fn page_count(&self) -> usize {
        self.0.len()
    }

    fn page_dimensions(&self, index: usize) -> Result<(f32, f32)> {
        self.check_index(index)?;
        Ok(self.0[index])
    }

    fn page_handle(&self, index: usize) -> Result<usize> {
        self.check_index(index)?;
        Ok(index)
    }
}
