//! Sheet rendering for imposition

use crate::document::{PageSource, SheetSink};
use crate::layout::Sheet;
use crate::types::*;
use tracing::trace;

/// Hand one laid-out sheet to the sink
pub(crate) fn render_sheet<S, K>(source: &S, sink: &mut K, layout: &Sheet) -> Result<()>
where
    S: PageSource,
    K: SheetSink<Page = S::Page>,
{
    let mut sheet = sink.begin_sheet(layout.width, layout.height)?;

    for placement in &layout.placements {
        let Some(index) = placement.page.index() else {
            continue;
        };
        let page = source.page_handle(index)?;
        trace!(
            "placing page {} at ({}, {}) scale={:.3}",
            index + 1,
            placement.x,
            placement.y,
            placement.scale
        );
        sink.place(&mut sheet, &page, placement.scale, placement.x, placement.y)?;
    }

    sink.finish_sheet(sheet)
}
