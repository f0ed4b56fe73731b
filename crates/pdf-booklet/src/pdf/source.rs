//! Input pages of a loaded PDF

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::document::PageSource;
use crate::types::*;
use lopdf::{Document, Object, ObjectId};

/// Pages of an `lopdf` document, in page-tree order
pub struct PdfPageSource<'a> {
    document: &'a Document,
    page_ids: Vec<ObjectId>,
}

impl<'a> PdfPageSource<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            page_ids: document.get_pages().into_values().collect(),
        }
    }
}

impl PageSource for PdfPageSource<'_> {
    type Page = ObjectId;

    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn page_dimensions(&self, index: usize) -> Result<(f32, f32)> {
        self.check_index(index)?;
        get_page_dimensions(self.document, self.page_ids[index])
    }

    fn page_handle(&self, index: usize) -> Result<ObjectId> {
        self.check_index(index)?;
        Ok(self.page_ids[index])
    }
}

/// Source page dimensions (width, height) in points, from its MediaBox
pub fn get_page_dimensions(doc: &Document, page_id: ObjectId) -> Result<(f32, f32)> {
    let page_dict = doc.get_dictionary(page_id)?;

    let Some(mb) = page_dict
        .get(b"MediaBox")
        .and_then(|obj| obj.as_array())
        .ok()
        .filter(|mb| mb.len() == 4)
    else {
        return Ok(DEFAULT_PAGE_DIMENSIONS);
    };

    match (
        extract_number(&mb[0]),
        extract_number(&mb[1]),
        extract_number(&mb[2]),
        extract_number(&mb[3]),
    ) {
        (Some(llx), Some(lly), Some(urx), Some(ury)) => Ok(((urx - llx).abs(), (ury - lly).abs())),
        _ => Ok(DEFAULT_PAGE_DIMENSIONS),
    }
}

/// Integer or real operand as `f32`
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
