use crate::layout::{LayoutPlan, sheet_count, signature_ranges};
use crate::options::BookletOptions;
use crate::types::*;

/// Calculate statistics for imposing `source_pages` pages with `options`.
///
/// Only page counts matter, so no document needs to be loaded.
pub fn calculate_statistics(
    source_pages: usize,
    options: &BookletOptions,
) -> Result<BookletStatistics> {
    let settings = options.resolve()?;
    let ranges = signature_ranges(source_pages, options.signature_size)?;

    let mut stats = BookletStatistics {
        source_pages,
        signatures: ranges.len(),
        pages_per_signature: Vec::with_capacity(ranges.len()),
        output_pages_per_signature: Vec::with_capacity(ranges.len()),
        output_pages: 0,
        blank_pages_added: 0,
        sheet_sides: 0,
        paper_sheets: 0,
    };

    for range in ranges {
        let page_count = range.page_count();
        let plan = LayoutPlan::new(page_count, settings.blank_pages);

        stats.pages_per_signature.push(page_count);
        stats.output_pages_per_signature.push(plan.output_page_count);
        stats.output_pages += plan.output_page_count;
        stats.blank_pages_added += plan.blank_pages(page_count);
        stats.sheet_sides += sheet_count(plan.output_page_count, settings.mode);
    }

    // Duplex: two sides per sheet of paper
    stats.paper_sheets = stats.sheet_sides.div_ceil(2);
    Ok(stats)
}
