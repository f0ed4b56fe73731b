//! Signature partitioning
//!
//! A signature is a group of pages that is folded and bound together.
//! Large documents are split into several signatures so each stays thin
//! enough to fold; every signature is padded and imposed on its own.

use crate::constants::PAGES_PER_FOLD;
use crate::document::PageSource;
use crate::types::*;
use tracing::debug;

use super::PageRef;

/// Inclusive range of document page indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureRange {
    pub start: usize,
    pub end: usize,
}

impl SignatureRange {
    pub fn page_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Split `page_count` pages into signatures of at most `max_signature_size` pages.
///
/// A size of 0 (or a document no larger than the size) yields a single
/// signature. Otherwise every signature has exactly `max_signature_size`
/// pages except the last, which takes the remainder.
pub fn signature_ranges(page_count: usize, max_signature_size: usize) -> Result<Vec<SignatureRange>> {
    if page_count == 0 {
        return Err(BookletError::NoPages);
    }
    if max_signature_size % PAGES_PER_FOLD != 0 {
        return Err(BookletError::Config(format!(
            "signature size must be a multiple of {}, got {}",
            PAGES_PER_FOLD, max_signature_size
        )));
    }

    if max_signature_size < 1 {
        debug!("signature option not supplied--single signature will be generated");
        return Ok(vec![SignatureRange {
            start: 0,
            end: page_count - 1,
        }]);
    }
    if page_count <= max_signature_size {
        debug!("pages not greater than max signature--single signature will be generated");
        return Ok(vec![SignatureRange {
            start: 0,
            end: page_count - 1,
        }]);
    }

    let ranges: Vec<_> = (0..page_count)
        .step_by(max_signature_size)
        .map(|start| SignatureRange {
            start,
            end: (start + max_signature_size - 1).min(page_count - 1),
        })
        .collect();
    for (number, range) in ranges.iter().enumerate() {
        debug!(
            "Generating signature number {} from pages {}-{}",
            number + 1,
            range.start,
            range.end
        );
    }
    Ok(ranges)
}

/// Partition a document into signatures
pub fn partition<S: PageSource>(
    source: &S,
    max_signature_size: usize,
) -> Result<Vec<Signature<'_, S>>> {
    Ok(signature_ranges(source.page_count(), max_signature_size)?
        .into_iter()
        .map(|range| Signature::new(source, range))
        .collect())
}

/// A bounded view of a page source
pub struct Signature<'a, S> {
    source: &'a S,
    range: SignatureRange,
}

// Manual impls: the view is copyable whatever the source is.
impl<S> Clone for Signature<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Signature<'_, S> {}

impl<'a, S: PageSource> Signature<'a, S> {
    pub fn new(source: &'a S, range: SignatureRange) -> Self {
        Self { source, range }
    }

    pub fn page_count(&self) -> usize {
        self.range.page_count()
    }

    /// Map a signature-local index to a document index
    pub fn get_page(&self, local: usize) -> Result<usize> {
        let page = self.range.start + local;
        if page > self.range.end {
            return Err(BookletError::Range {
                page: local,
                start: self.range.start,
                end: self.range.end,
            });
        }
        Ok(page)
    }

    /// The page at `local`, or blank past the end of the signature
    pub fn page_or_blank(&self, local: usize) -> Result<PageRef> {
        if local >= self.page_count() {
            return Ok(PageRef::Blank);
        }
        self.get_page(local).map(PageRef::Page)
    }

    pub fn page_dimensions(&self, page: usize) -> Result<(f32, f32)> {
        self.source.page_dimensions(page)
    }
}
