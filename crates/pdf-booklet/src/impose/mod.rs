//! Booklet imposition - arranging pages for folding and binding
//!
//! This module orchestrates the imposition process:
//! 1. Validate options and split the document into signatures
//! 2. Plan and lay out each signature lazily
//! 3. Hand every sheet to a [`SheetSink`]

mod booklet;
mod sheet;

pub use booklet::BookletSheets;

use crate::document::{PageSource, SheetSink};
use crate::options::BookletOptions;
use crate::types::*;
use sheet::render_sheet;
use tracing::{info, instrument};

/// What an imposition run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImposeSummary {
    pub signatures: usize,
    /// Sheet sides handed to the sink
    pub sheets: usize,
    /// Source pages placed, blanks excluded
    pub placements: usize,
}

/// Impose every page of `source` onto sheets of `sink`.
///
/// Stops at the first error; sheets already handed to the sink are then
/// not a valid booklet.
#[instrument(skip_all, fields(pages = source.page_count(), layout = %options.layout))]
pub fn impose<S, K>(source: &S, sink: &mut K, options: &BookletOptions) -> Result<ImposeSummary>
where
    S: PageSource,
    K: SheetSink<Page = S::Page>,
{
    let sheets = BookletSheets::new(source, options)?;
    let mut summary = ImposeSummary {
        signatures: sheets.signature_count(),
        ..Default::default()
    };

    for sheet in sheets {
        let sheet = sheet?;
        render_sheet(source, sink, &sheet)?;
        summary.sheets += 1;
        summary.placements += sheet.placements.len();
    }

    info!(
        "Imposed {} pages onto {} sheets in {} signature(s)",
        summary.placements, summary.sheets, summary.signatures
    );
    Ok(summary)
}
