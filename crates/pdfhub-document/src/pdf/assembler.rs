// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page assembler — build a fresh PDF by copying pages out of existing
// documents. Used by merge, split, and compress.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};
use pdfhub_core::error::{PdfHubError, Result};
use tracing::{debug, info, instrument, warn};

use super::reader::PdfReader;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Accumulates copied pages into a new document and serialises it.
///
/// Source documents are never modified. Objects reachable from a copied page
/// (content streams, fonts, images) are copied into the target once per
/// source, so repeated pages share content but each get their own page
/// object.
pub struct PageAssembler {
    target: Document,
    pages_id: ObjectId,
    kids: Vec<ObjectId>,
}

impl PageAssembler {
    /// Start an empty document with the given PDF header version.
    pub fn new(version: &str) -> Self {
        let mut target = Document::with_version(version);
        let pages_id = target.new_object_id();
        Self {
            target,
            pages_id,
            kids: Vec::new(),
        }
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Append every page of `source`, in document order.
    pub fn append_all(&mut self, source: &PdfReader) -> Result<()> {
        let page_ids = source.page_ids();
        let mut copier = ObjectCopier::new(source.document());
        copier.link_pages(&mut self.target, &page_ids, &page_ids);
        for page_id in page_ids {
            self.append_page(&mut copier, page_id)?;
        }
        Ok(())
    }

    /// Append the listed 1-based pages of `source`, in the order given.
    /// Repeated page numbers produce repeated pages.
    ///
    /// References to pages that are not appended (link destinations, outline
    /// entries) become `null`.
    pub fn append_pages(&mut self, source: &PdfReader, page_numbers: &[u32]) -> Result<()> {
        let selected = page_numbers
            .iter()
            .map(|&page_number| source.page_id(page_number))
            .collect::<Result<Vec<_>>>()?;
        let mut copier = ObjectCopier::new(source.document());
        copier.link_pages(&mut self.target, &source.page_ids(), &selected);
        for page_id in selected {
            self.append_page(&mut copier, page_id)?;
        }
        Ok(())
    }

    /// Finish the page tree and serialise the document.
    #[instrument(skip(self), fields(pages = self.kids.len()))]
    pub fn to_bytes(mut self) -> Result<Vec<u8>> {
        self.finish();

        let mut output = Vec::new();
        self.target.save_to(&mut output).map_err(|err| {
            PdfHubError::PdfError(format!("failed to serialise assembled PDF: {}", err))
        })?;

        debug!(output_bytes = output.len(), "Assembled PDF serialised");
        Ok(output)
    }

    /// Finish the document and write it to `path`, replacing any existing
    /// file. Returns the number of pages written.
    pub fn write_to_file(self, path: impl AsRef<Path>) -> Result<usize> {
        let pages = self.page_count();
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!(pages, "Wrote PDF to {}", path.as_ref().display());
        Ok(pages)
    }

    // -- Helpers --------------------------------------------------------------

    fn append_page(&mut self, copier: &mut ObjectCopier<'_>, page_id: ObjectId) -> Result<()> {
        let page = copier
            .source
            .get_dictionary(page_id)
            .map_err(|err| {
                PdfHubError::PdfError(format!("cannot read page object {:?}: {}", page_id, err))
            })?
            .clone();

        let mut flattened = page;
        for key in INHERITABLE {
            if !flattened.has(key) {
                if let Some(value) = inherited_attribute(copier.source, page_id, key) {
                    flattened.set(key.to_vec(), value);
                }
            }
        }

        // The first copy of a page takes the id reserved by `link_pages`, so
        // references from other pages land on it. Repeats get a fresh id.
        let new_id = match copier.unwritten_pages.remove(&page_id) {
            Some(reserved) => reserved,
            None => self.target.new_object_id(),
        };
        let mut copied = copier.copy_dictionary(&mut self.target, &flattened);

        copied.set("Parent", Object::Reference(self.pages_id));
        self.target.objects.insert(new_id, Object::Dictionary(copied));
        self.kids.push(new_id);
        Ok(())
    }

    fn finish(&mut self) {
        let kids: Vec<Object> = self.kids.iter().copied().map(Object::Reference).collect();

        let mut pages = Dictionary::new();
        pages.set("Type", Object::Name(b"Pages".to_vec()));
        pages.set("Count", Object::Integer(self.kids.len() as i64));
        pages.set("Kids", Object::Array(kids));
        self.target
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(self.pages_id));
        let catalog_id = self.target.add_object(catalog);
        self.target.trailer.set("Root", Object::Reference(catalog_id));
    }
}

/// Walk `/Parent` links from `page_id` looking for `key`.
fn inherited_attribute(source: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut current = source.get_dictionary(page_id).ok()?;
    // Bounded walk; malformed files can contain parent cycles.
    for _ in 0..64 {
        let parent_id = current.get(b"Parent").ok()?.as_reference().ok()?;
        current = source.get_dictionary(parent_id).ok()?;
        if let Ok(value) = current.get(key) {
            return Some(value.clone());
        }
    }
    None
}

/// Deep-copies objects from one source document into a target, remembering
/// which source objects were already copied.
struct ObjectCopier<'a> {
    source: &'a Document,
    mapping: HashMap<ObjectId, ObjectId>,
    /// Pages with a reserved target id whose dictionary is not written yet.
    unwritten_pages: HashMap<ObjectId, ObjectId>,
    /// Source pages left out of the output; references to them become null.
    omitted_pages: HashSet<ObjectId>,
}

impl<'a> ObjectCopier<'a> {
    fn new(source: &'a Document) -> Self {
        Self {
            source,
            mapping: HashMap::new(),
            unwritten_pages: HashMap::new(),
            omitted_pages: HashSet::new(),
        }
    }

    /// Reserve a target id for every page in `selected` and mark the other
    /// pages of `all` as omitted, before any page content is copied.
    fn link_pages(&mut self, target: &mut Document, all: &[ObjectId], selected: &[ObjectId]) {
        for &page_id in selected {
            if !self.mapping.contains_key(&page_id) {
                let reserved = target.new_object_id();
                self.mapping.insert(page_id, reserved);
                self.unwritten_pages.insert(page_id, reserved);
            }
        }
        self.omitted_pages.extend(
            all.iter()
                .copied()
                .filter(|page_id| !self.mapping.contains_key(page_id)),
        );
    }

    fn copy_object(&mut self, target: &mut Document, object: &Object) -> Object {
        match object {
            Object::Dictionary(dict) => Object::Dictionary(self.copy_dictionary(target, dict)),
            Object::Array(items) => Object::Array(
                items
                    .iter()
                    .map(|item| self.copy_object(target, item))
                    .collect(),
            ),
            Object::Stream(stream) => {
                let mut copied = stream.clone();
                copied.dict = self.copy_dictionary(target, &stream.dict);
                Object::Stream(copied)
            }
            Object::Reference(id) => self.copy_reference(target, *id),
            other => other.clone(),
        }
    }

    /// `/Parent` entries are dropped; the assembler re-links pages itself and
    /// following them would drag the whole source page tree along.
    fn copy_dictionary(&mut self, target: &mut Document, dict: &Dictionary) -> Dictionary {
        let mut copied = Dictionary::new();
        for (key, value) in dict.iter() {
            if key == b"Parent" {
                continue;
            }
            copied.set(key.clone(), self.copy_object(target, value));
        }
        copied
    }

    fn copy_reference(&mut self, target: &mut Document, id: ObjectId) -> Object {
        if let Some(&mapped) = self.mapping.get(&id) {
            return Object::Reference(mapped);
        }
        if self.omitted_pages.contains(&id) {
            return Object::Null;
        }
        match self.source.get_object(id) {
            Ok(referenced) => {
                // Reserve the id before recursing so cycles terminate.
                let new_id = target.new_object_id();
                self.mapping.insert(id, new_id);
                let copied = self.copy_object(target, referenced);
                target.objects.insert(new_id, copied);
                Object::Reference(new_id)
            }
            Err(err) => {
                warn!(?id, %err, "Cannot resolve reference, using Null");
                Object::Null
            }
        }
    }
}
