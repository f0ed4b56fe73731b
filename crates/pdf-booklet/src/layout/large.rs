//! Large (2-up) booklet layout
//!
//! Each sheet side carries two pages next to each other. The front pointer
//! walks up from the first page while the back pointer walks down from the
//! last padded page, so sheet `n` pairs page `n` with page `count - 1 - n`.
//! Which of the two goes on the left alternates with the parity of the
//! front pointer; that alternation gives reading order after folding.

use crate::document::PageSource;
use crate::options::LayoutSettings;
use crate::types::*;
use tracing::{debug, trace};

use super::{LayoutPlan, PageRef, Placement, Rect, Sheet, Signature, compute_transform};

/// Lazy sequence of 2-up sheets for one signature
pub struct LargeLayout<'a, S> {
    signature: Signature<'a, S>,
    signature_number: usize,
    settings: LayoutSettings,
    front_pointer: usize,
    back_pointer: usize,
    sheet_width: f32,
    sheet_height: f32,
}

impl<'a, S: PageSource> LargeLayout<'a, S> {
    pub fn new(
        signature: Signature<'a, S>,
        signature_number: usize,
        plan: LayoutPlan,
        settings: LayoutSettings,
    ) -> Self {
        let (sheet_width, sheet_height) = settings.paper.rotated_dimensions();
        debug!(
            "Output paper height={}, width={}",
            sheet_height, sheet_width
        );
        Self {
            signature,
            signature_number,
            settings,
            front_pointer: plan.front_pointer,
            back_pointer: plan.back_pointer,
            sheet_width,
            sheet_height,
        }
    }

    fn next_sheet(&self) -> Result<Sheet> {
        let front_page = self.signature.page_or_blank(self.front_pointer)?;
        let back_page = self.signature.page_or_blank(self.back_pointer)?;

        let (left_page, right_page) = if self.front_pointer % 2 > 0 {
            (front_page, back_page)
        } else {
            (back_page, front_page)
        };
        debug!(
            "Printing page {} and {}{}",
            self.front_pointer + 1,
            self.back_pointer + 1,
            if back_page.is_blank() { " (blank page)" } else { "" }
        );

        let tile_width = self.sheet_width / 2.0;
        let tile_height = self.sheet_height;
        let tiles = [
            (left_page, Rect::new(0.0, 0.0, tile_width, tile_height)),
            (right_page, Rect::new(tile_width, 0.0, tile_width, tile_height)),
        ];

        let mut sheet = Sheet::new(self.signature_number, self.sheet_width, self.sheet_height);
        for (page, tile) in tiles {
            let PageRef::Page(index) = page else {
                continue;
            };
            let transform = compute_transform(
                self.signature.page_dimensions(index)?,
                (tile.width, tile.height),
                &self.settings.adjustments,
                self.settings.alignment,
                index,
            );
            trace!(
                "page {}: x_offset={}, y_offset={}, scale={}",
                index + 1,
                transform.x_offset,
                transform.y_offset,
                transform.scale
            );
            sheet.placements.push(Placement {
                page,
                tile,
                scale: transform.scale,
                x: tile.x + transform.x_offset,
                y: tile.y + transform.y_offset,
            });
        }
        Ok(sheet)
    }
}

impl<S: PageSource> Iterator for LargeLayout<'_, S> {
    type Item = Result<Sheet>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front_pointer >= self.back_pointer {
            return None;
        }
        let sheet = self.next_sheet();
        self.back_pointer -= 1;
        self.front_pointer += 1;
        Some(sheet)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.back_pointer + 1).saturating_sub(self.front_pointer) / 2;
        (remaining, Some(remaining))
    }
}
