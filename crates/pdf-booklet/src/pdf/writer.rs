//! Output document assembly

use crate::document::{DocumentWriter, SheetSink};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;

use super::xobject::ObjectCopier;

/// A sheet being drawn
#[derive(Debug)]
pub struct PendingSheet {
    width: f32,
    height: f32,
    content: String,
    xobjects: Dictionary,
}

/// Builds the imposed document from sheets, copying pages out of `source`
pub struct PdfSheetWriter<'a> {
    source: &'a Document,
    output: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
    copier: ObjectCopier,
}

impl<'a> PdfSheetWriter<'a> {
    pub fn new(source: &'a Document) -> Self {
        let mut output = Document::with_version("1.7");
        let pages_tree_id = output.new_object_id();
        Self {
            source,
            output,
            pages_tree_id,
            page_refs: Vec::new(),
            copier: ObjectCopier::default(),
        }
    }

    pub fn sheet_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Add the pages tree and catalog and return the finished document
    pub fn into_document(mut self) -> Document {
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));
        self.output.trailer.set("Root", catalog_id);

        self.output
    }
}

impl SheetSink for PdfSheetWriter<'_> {
    type Page = ObjectId;
    type Sheet = PendingSheet;

    fn begin_sheet(&mut self, width: f32, height: f32) -> Result<PendingSheet> {
        Ok(PendingSheet {
            width,
            height,
            content: String::new(),
            xobjects: Dictionary::new(),
        })
    }

    fn place(
        &mut self,
        sheet: &mut PendingSheet,
        page: &ObjectId,
        scale: f32,
        x: f32,
        y: f32,
    ) -> Result<()> {
        let form_id = self.copier.page_form(&mut self.output, self.source, *page)?;
        let name = format!("P{}", sheet.xobjects.len());
        sheet.xobjects.set(name.as_bytes(), Object::Reference(form_id));
        sheet.content.push_str(&format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            scale, scale, x, y, name
        ));
        Ok(())
    }

    fn finish_sheet(&mut self, sheet: PendingSheet) -> Result<()> {
        let content_id = self.output.add_object(Stream::new(
            Dictionary::new(),
            sheet.content.into_bytes(),
        ));

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(sheet.xobjects));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(sheet.width),
                Object::Real(sheet.height),
            ]),
        );
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = self.output.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));
        Ok(())
    }
}

impl DocumentWriter for PdfSheetWriter<'_> {
    fn write_document<W: Write>(self, writer: &mut W) -> Result<usize> {
        let sheets = self.sheet_count();
        let mut document = self.into_document();
        document.save_to(writer)?;
        Ok(sheets)
    }
}
