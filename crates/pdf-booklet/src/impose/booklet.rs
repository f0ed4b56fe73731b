//! Lazy sheet sequence over every signature of a document

use crate::document::PageSource;
use crate::layout::{Sheet, SheetLayout, Signature, partition};
use crate::options::{BookletOptions, LayoutSettings};
use crate::types::*;
use std::iter::Enumerate;
use std::vec::IntoIter;
use tracing::debug;

/// All sheets of a booklet, signature after signature.
///
/// Nothing is computed until the iterator is pulled. After the first error
/// the sequence ends.
pub struct BookletSheets<'a, S> {
    signatures: Enumerate<IntoIter<Signature<'a, S>>>,
    signature_count: usize,
    settings: LayoutSettings,
    current: Option<SheetLayout<'a, S>>,
    failed: bool,
}

impl<'a, S: PageSource> BookletSheets<'a, S> {
    /// Validate `options` and partition `source`. All configuration
    /// errors surface here, before any sheet exists.
    pub fn new(source: &'a S, options: &BookletOptions) -> Result<Self> {
        let settings = options.resolve()?;
        let signatures = partition(source, options.signature_size)?;
        debug!(
            "{} source pages in {} signature(s), {} layout on {}",
            source.page_count(),
            signatures.len(),
            settings.mode,
            settings.paper
        );
        Ok(Self {
            signature_count: signatures.len(),
            signatures: signatures.into_iter().enumerate(),
            settings,
            current: None,
            failed: false,
        })
    }

    pub fn signature_count(&self) -> usize {
        self.signature_count
    }
}

impl<S: PageSource> Iterator for BookletSheets<'_, S> {
    type Item = Result<Sheet>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(layout) = self.current.as_mut() {
                match layout.next() {
                    Some(Ok(sheet)) => return Some(Ok(sheet)),
                    Some(Err(e)) => {
                        self.failed = true;
                        return Some(Err(e));
                    }
                    None => self.current = None,
                }
            }

            let (number, signature) = self.signatures.next()?;
            match SheetLayout::new(signature, number, self.settings) {
                Ok(layout) => self.current = Some(layout),
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
