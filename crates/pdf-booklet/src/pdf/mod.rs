//! PDF adapter built on `lopdf`
//!
//! This module handles all PDF-specific operations:
//! - Reading page sizes and ids from a loaded document
//! - Wrapping source pages into Form XObjects
//! - Assembling imposed sheets into a new document
//!
//! Reading and writing files is left to the caller.

mod source;
mod writer;
mod xobject;

pub use source::{PdfPageSource, get_page_dimensions};
pub use writer::{PdfSheetWriter, PendingSheet};

use crate::document::DocumentWriter;
use crate::impose::{ImposeSummary, impose};
use crate::options::BookletOptions;
use crate::types::*;
use lopdf::Document;
use std::io::Write;

/// Impose a loaded document into a new booklet document
pub fn impose_document(
    source: &Document,
    options: &BookletOptions,
) -> Result<(Document, ImposeSummary)> {
    let pages = PdfPageSource::new(source);
    let mut writer = PdfSheetWriter::new(source);
    let summary = impose(&pages, &mut writer, options)?;
    Ok((writer.into_document(), summary))
}

/// Impose a loaded document and serialize the booklet into `output`
pub fn write_booklet<W: Write>(
    source: &Document,
    options: &BookletOptions,
    output: &mut W,
) -> Result<ImposeSummary> {
    let pages = PdfPageSource::new(source);
    let mut writer = PdfSheetWriter::new(source);
    let summary = impose(&pages, &mut writer, options)?;
    writer.write_document(output)?;
    Ok(summary)
}
