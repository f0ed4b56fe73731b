//! Page count planning for one signature

use crate::constants::PAGES_PER_FOLD;
use tracing::debug;

/// Pointers and padded page count for imposing one signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    /// First signature-local page, walks forward
    pub front_pointer: usize,
    /// Last padded page, walks backward
    pub back_pointer: usize,
    /// Smallest multiple of 4 holding the signature and requested blanks
    pub output_page_count: usize,
}

impl LayoutPlan {
    /// Plan a signature of `page_count` pages followed by `blank_count` blanks.
    ///
    /// `page_count` is at least 1 for any partitioned signature.
    pub fn new(page_count: usize, blank_count: usize) -> Self {
        let target_pages = page_count + blank_count;
        let mut back_pointer = target_pages.saturating_sub(1);
        if target_pages % PAGES_PER_FOLD > 0 {
            back_pointer += PAGES_PER_FOLD - target_pages % PAGES_PER_FOLD;
        }
        let output_page_count = back_pointer + 1;

        debug!(
            "source signature has {} pages, add blank={} setting back_pointer to {}",
            page_count, blank_count, back_pointer
        );
        debug!("Signature will have {} pages", output_page_count);

        Self {
            front_pointer: 0,
            back_pointer,
            output_page_count,
        }
    }

    /// Padding pages appended to reach `output_page_count`, requested blanks included
    pub fn blank_pages(&self, page_count: usize) -> usize {
        self.output_page_count - page_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        let plan = LayoutPlan::new(8, 0);
        assert_eq!(plan.front_pointer, 0);
        assert_eq!(plan.back_pointer, 7);
        assert_eq!(plan.output_page_count, 8);
    }

    #[test]
    fn test_pads_to_multiple_of_four() {
        for (pages, blanks, expected) in [(1, 0, 4), (5, 0, 8), (6, 1, 8), (7, 2, 12), (3, 1, 4)] {
            let plan = LayoutPlan::new(pages, blanks);
            assert_eq!(plan.output_page_count, expected, "{} + {}", pages, blanks);
            assert_eq!(plan.back_pointer, expected - 1);
            assert_eq!(plan.blank_pages(pages), expected - pages);
        }
    }
}
