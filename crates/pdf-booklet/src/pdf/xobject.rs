//! Form XObjects built from source pages
//!
//! Every source page placed on a sheet is wrapped once into a Form XObject
//! in the output document; later placements of the same page reuse it.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Copies source objects into the output document, at most once each
#[derive(Debug, Default)]
pub(crate) struct ObjectCopier {
    /// Source object id to output object id
    copied: HashMap<ObjectId, ObjectId>,
    /// Source page id to output XObject id
    forms: HashMap<ObjectId, ObjectId>,
}

impl ObjectCopier {
    /// The Form XObject drawing `page_id`, created on first use
    pub(crate) fn page_form(
        &mut self,
        output: &mut Document,
        source: &Document,
        page_id: ObjectId,
    ) -> Result<ObjectId> {
        if let Some(&form_id) = self.forms.get(&page_id) {
            return Ok(form_id);
        }
        let form_id = self.create_page_form(output, source, page_id)?;
        self.forms.insert(page_id, form_id);
        Ok(form_id)
    }

    fn create_page_form(
        &mut self,
        output: &mut Document,
        source: &Document,
        page_id: ObjectId,
    ) -> Result<ObjectId> {
        let page_dict = source.get_dictionary(page_id)?;

        let (width, height) = DEFAULT_PAGE_DIMENSIONS;
        let bbox = match page_dict.get(b"MediaBox").and_then(Object::as_array) {
            Ok(media_box) => media_box.clone(),
            Err(_) => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width),
                Object::Real(height),
            ],
        };

        let content = page_content(source, page_dict)?;

        let mut form = Dictionary::new();
        form.set("Type", Object::Name(b"XObject".to_vec()));
        form.set("Subtype", Object::Name(b"Form".to_vec()));
        form.set("BBox", Object::Array(bbox));
        form.set("FormType", Object::Integer(1));

        if let Ok(resources) = page_dict.get(b"Resources") {
            form.set("Resources", self.copy_deep(output, source, resources)?);
        }

        Ok(output.add_object(Stream::new(form, content)))
    }

    /// Copy `obj` into `output`, following references at most once each
    fn copy_deep(
        &mut self,
        output: &mut Document,
        source: &Document,
        obj: &Object,
    ) -> Result<Object> {
        Ok(match obj {
            Object::Reference(id) => {
                Object::Reference(self.copy_reference(output, source, *id)?)
            }
            Object::Dictionary(dict) => {
                Object::Dictionary(self.copy_dictionary(output, source, dict)?)
            }
            Object::Array(items) => Object::Array(
                items
                    .iter()
                    .map(|item| self.copy_deep(output, source, item))
                    .collect::<Result<_>>()?,
            ),
            Object::Stream(stream) => {
                let dict = self.copy_dictionary(output, source, &stream.dict)?;
                let mut copy = Stream::new(dict, stream.content.clone());
                copy.allows_compression = stream.allows_compression;
                Object::Stream(copy)
            }
            other => other.clone(),
        })
    }

    fn copy_reference(
        &mut self,
        output: &mut Document,
        source: &Document,
        id: ObjectId,
    ) -> Result<ObjectId> {
        if let Some(&copied) = self.copied.get(&id) {
            return Ok(copied);
        }
        // Registered before recursing so cycles resolve to this id
        let new_id = output.new_object_id();
        self.copied.insert(id, new_id);
        let object = self.copy_deep(output, source, source.get_object(id)?)?;
        output.objects.insert(new_id, object);
        Ok(new_id)
    }

    fn copy_dictionary(
        &mut self,
        output: &mut Document,
        source: &Document,
        dict: &Dictionary,
    ) -> Result<Dictionary> {
        let mut copy = Dictionary::new();
        for (key, value) in dict.iter() {
            copy.set(key.clone(), self.copy_deep(output, source, value)?);
        }
        Ok(copy)
    }
}

/// Page content streams decoded and joined, one per line
fn page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let ids: Vec<ObjectId> = match page_dict.get(b"Contents") {
        Ok(Object::Reference(id)) => vec![*id],
        Ok(Object::Array(refs)) => refs.iter().flat_map(Object::as_reference).collect(),
        _ => return Ok(Vec::new()),
    };

    let mut joined = Vec::new();
    for id in ids {
        let Ok(stream) = doc.get_object(id)?.as_stream() else {
            continue;
        };
        match stream.decompressed_content() {
            Ok(content) => joined.extend(content),
            Err(_) => joined.extend_from_slice(&stream.content),
        }
        joined.push(b'\n');
    }
    Ok(joined)
}
