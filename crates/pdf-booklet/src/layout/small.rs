//! Small (8-up) booklet layout
//!
//! Each sheet side holds a 2x4 grid of pages. The pointer walk first builds
//! the whole signature in sheet-slot order, then the sheets consume that
//! queue eight slots at a time:
//!
//! ```text
//! front side, per pass:  (b-0, f+0) (b-2, f+2) (b-4, f+4) (b-6, f+6)
//! back side,  per pass:  (f+3, b-3) (f+1, b-1) (f+7, b-7) (f+5, b-5)
//! ```
//!
//! where `f`/`b` are the front/back pointers, which then move 8 pages
//! inward. Pairs whose pointers have crossed are left blank.

use std::collections::VecDeque;

use crate::constants::{SMALL_PAGES_PER_PASS, SMALL_TILES_PER_SIDE};
use crate::document::PageSource;
use crate::options::LayoutSettings;
use crate::types::*;
use tracing::{debug, trace};

use super::{
    LayoutPlan, PageRef, Placement, Rect, Sheet, Signature, compute_transform, sheet_count,
};

const FRONT_SIDE_OFFSETS: [usize; 4] = [0, 2, 4, 6];
const BACK_SIDE_OFFSETS: [usize; 4] = [3, 1, 7, 5];

/// Lazy sequence of 8-up sheets for one signature
pub struct SmallLayout<'a, S> {
    signature: Signature<'a, S>,
    signature_number: usize,
    settings: LayoutSettings,
    queue: VecDeque<PageRef>,
    sheets_remaining: usize,
    sheet_width: f32,
    sheet_height: f32,
    rows: [f32; 2],
    columns: [f32; 4],
    tile_width: f32,
    tile_height: f32,
}

impl<'a, S: PageSource> SmallLayout<'a, S> {
    pub fn new(
        signature: Signature<'a, S>,
        signature_number: usize,
        plan: LayoutPlan,
        settings: LayoutSettings,
    ) -> Result<Self> {
        let (sheet_width, sheet_height) = settings.paper.rotated_dimensions();
        debug!(
            "Output paper height={}, width={}",
            sheet_height, sheet_width
        );

        let rows = [(sheet_height / 2.0).round_ties_even(), 0.0];
        let columns = [
            0.0,
            (sheet_width * 0.25).round_ties_even(),
            (sheet_width * 0.5).round_ties_even(),
            (sheet_width * 0.75).round_ties_even(),
        ];
        debug!("rows at {:?}", rows);
        debug!("columns at {:?}", columns);

        let sheets = sheet_count(plan.output_page_count, LayoutMode::Small);
        debug!("Signature will be printed onto {} sheets", sheets);

        let queue = booklet_order(&signature, plan)?;
        debug!("Generating new pages from {} slots", queue.len());

        Ok(Self {
            signature,
            signature_number,
            settings,
            queue,
            sheets_remaining: sheets,
            sheet_width,
            sheet_height,
            rows,
            columns,
            tile_width: (sheet_width / 4.0).round_ties_even(),
            tile_height: (sheet_height / 2.0).round_ties_even(),
        })
    }

    fn next_sheet(&mut self) -> Result<Sheet> {
        let mut sheet = Sheet::new(self.signature_number, self.sheet_width, self.sheet_height);

        for row in self.rows {
            for column in self.columns {
                let Some(page) = self.queue.pop_front() else {
                    return Ok(sheet);
                };
                let PageRef::Page(index) = page else {
                    trace!("Skipping empty location x={} y={}", column, row);
                    continue;
                };
                let transform = compute_transform(
                    self.signature.page_dimensions(index)?,
                    (self.tile_width, self.tile_height),
                    &self.settings.adjustments,
                    self.settings.alignment,
                    index,
                );
                let placement = Placement {
                    page,
                    tile: Rect::new(column, row, self.tile_width, self.tile_height),
                    scale: transform.scale,
                    x: column + transform.x_offset,
                    y: row + transform.y_offset,
                };
                trace!(
                    "Generating page {} scale={:.2} x={} y={}",
                    index + 1,
                    placement.scale,
                    placement.x,
                    placement.y
                );
                sheet.placements.push(placement);
            }
        }
        Ok(sheet)
    }
}

impl<S: PageSource> Iterator for SmallLayout<'_, S> {
    type Item = Result<Sheet>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.sheets_remaining == 0 {
            return None;
        }
        self.sheets_remaining -= 1;
        let sheet = self.next_sheet();
        if sheet.is_err() {
            self.sheets_remaining = 0;
        }
        Some(sheet)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sheets_remaining, Some(self.sheets_remaining))
    }
}

/// All slots of a signature in sheet order, front side then back side per pass
fn booklet_order<S: PageSource>(
    signature: &Signature<'_, S>,
    plan: LayoutPlan,
) -> Result<VecDeque<PageRef>> {
    let capacity = plan.output_page_count.next_multiple_of(SMALL_PAGES_PER_PASS);
    let mut order = VecDeque::with_capacity(capacity);
    let mut front_pointer = plan.front_pointer;
    let mut back_pointer = plan.back_pointer;

    while front_pointer < back_pointer {
        // Front of the sheet: back page on the left, front page on the right
        for offset in FRONT_SIDE_OFFSETS {
            match pointer_pair(front_pointer, back_pointer, offset) {
                Some((front, back)) => {
                    order.push_back(signature.page_or_blank(back)?);
                    order.push_back(signature.page_or_blank(front)?);
                }
                None => order.extend([PageRef::Blank, PageRef::Blank]),
            }
        }

        // Back of the sheet: front page on the left, back page on the right
        for offset in BACK_SIDE_OFFSETS {
            match pointer_pair(front_pointer, back_pointer, offset) {
                Some((front, back)) => {
                    order.push_back(signature.page_or_blank(front)?);
                    order.push_back(signature.page_or_blank(back)?);
                }
                None => order.extend([PageRef::Blank, PageRef::Blank]),
            }
        }

        back_pointer = back_pointer.saturating_sub(SMALL_TILES_PER_SIDE);
        front_pointer += SMALL_TILES_PER_SIDE;
    }
    Ok(order)
}

/// `(front + offset, back - offset)` while the pointers have not crossed
fn pointer_pair(
    front_pointer: usize,
    back_pointer: usize,
    offset: usize,
) -> Option<(usize, usize)> {
    let front = front_pointer + offset;
    let back = back_pointer.checked_sub(offset)?;
    (front < back).then_some((front, back))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PageSizes;
    use crate::layout::partition;

    fn order(page_count: usize, blank_pages: usize) -> Vec<Option<usize>> {
        let pages = PageSizes::uniform(page_count, 612.0, 792.0);
        let signature = partition(&pages, 0).unwrap()[0];
        let plan = LayoutPlan::new(page_count, blank_pages);
        booklet_order(&signature, plan)
            .unwrap()
            .into_iter()
            .map(PageRef::index)
            .collect()
    }

    #[test]
    fn test_eight_page_order() {
        assert_eq!(
            order(8, 0),
            vec![
                Some(7),
                Some(0),
                Some(5),
                Some(2),
                None,
                None,
                None,
                None,
                Some(3),
                Some(4),
                Some(1),
                Some(6),
                None,
                None,
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_sixteen_page_order() {
        let pages: Vec<_> = order(16, 0).into_iter().map(Option::unwrap).collect();
        assert_eq!(
            pages,
            vec![15, 0, 13, 2, 11, 4, 9, 6, 3, 12, 1, 14, 7, 8, 5, 10]
        );
    }

    #[test]
    fn test_pointer_pair_crossing() {
        assert_eq!(pointer_pair(0, 7, 2), Some((2, 5)));
        assert_eq!(pointer_pair(0, 7, 4), None);
        assert_eq!(pointer_pair(0, 3, 6), None);
    }
}
