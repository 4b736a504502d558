//! Assembly of the document object graph.
//!
//! `PdfBuilder` creates the standard objects of a simple document (catalog,
//! page tree, pages, fonts, outlines, procedure set, info) and links them.
//! Links between registered objects go through the registry so a shared
//! dictionary, such as the page tree's, is mutated in one place.

use crate::error::{PdfError, Result};
use crate::metadata::DocumentInfo;
use crate::objects::{Array, Dictionary, Object, ObjectId, Stream};
use crate::registry::{ObjectRegistry, SealedRegistry};

#[derive(Debug, Default)]
pub struct PdfBuilder {
    registry: ObjectRegistry,
}

impl PdfBuilder {
    pub fn new() -> Self {
        Self {
            registry: ObjectRegistry::new(),
        }
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ObjectRegistry {
        &mut self.registry
    }

    /// `<< /Type /Catalog >>`
    pub fn create_catalog(&mut self) -> ObjectId {
        self.registry.create_with(Dictionary::with_type("Catalog"))
    }

    /// Root of the page tree, with empty `/Kids` and `/Count 0`.
    pub fn create_page_collection(
        &mut self,
        resources: Dictionary,
        media_box: Array,
    ) -> ObjectId {
        let mut pages = Dictionary::with_type("Pages");
        pages.set("Kids", Array::new());
        pages.set("Count", 0);
        pages.set("Resources", resources);
        pages.set("MediaBox", media_box);
        self.registry.create_with(pages)
    }

    /// A page whose `/Parent` is `page_collection`.
    pub fn create_page(&mut self, page_collection: ObjectId) -> ObjectId {
        let mut page = Dictionary::with_type("Page");
        page.set("Parent", Object::reference(page_collection));
        self.registry.create_with(page)
    }

    /// Empty dictionary that will carry a content stream.
    pub fn create_page_content(&mut self) -> ObjectId {
        self.registry.create_with(Dictionary::new())
    }

    /// A standard Type1 font known as `/<name>` in resource dictionaries.
    pub fn create_basic_font(&mut self, name: &str, base_font: &str) -> ObjectId {
        let mut font = Dictionary::with_type("Font");
        font.set("Subtype", Object::name("Type1"));
        font.set("Name", Object::name(name));
        font.set("BaseFont", Object::name(base_font));
        font.set("Encoding", Object::name("WinAnsiEncoding"));
        self.registry.create_with(font)
    }

    /// Empty outline tree.
    pub fn create_outlines(&mut self) -> ObjectId {
        let mut outlines = Dictionary::with_type("Outlines");
        outlines.set("Count", 0);
        self.registry.create_with(outlines)
    }

    /// Indirect procedure-set array `[ /PDF ]`, plus `/Text` when asked.
    pub fn create_proc_set(&mut self, text: bool) -> ObjectId {
        let mut procs = Array::new();
        procs.push(Object::name("PDF"));
        if text {
            procs.push(Object::name("Text"));
        }
        self.registry.create_with(procs)
    }

    /// Registers the `/Info` object, or nothing when `info` is empty.
    pub fn create_document_info(&mut self, info: &DocumentInfo) -> Option<ObjectId> {
        info.to_dictionary()
            .map(|dict| self.registry.create_with(dict))
    }

    /// `[ x y width height ]`
    pub fn media_box(width: f64, height: f64, x: f64, y: f64) -> Array {
        [x, y, width, height].into_iter().map(Object::from).collect()
    }

    pub fn resource_catalog() -> Dictionary {
        Dictionary::new()
    }

    pub fn fonts_resource() -> Dictionary {
        Dictionary::new()
    }

    pub fn register_page_collection(&mut self, catalog: ObjectId, pages: ObjectId) -> Result<()> {
        self.registry
            .set_item(catalog, "Pages", Object::reference(pages))
    }

    /// Appends `page` to `/Kids` and bumps `/Count`.
    pub fn register_page(&mut self, pages: ObjectId, page: ObjectId) -> Result<()> {
        if !self.registry.contains(page) {
            return Err(PdfError::UnknownObject(page));
        }
        self.registry
            .append_to_array(pages, "Kids", Object::reference(page))?;
        self.registry.increment(pages, "Count")?;
        Ok(())
    }

    pub fn register_page_content(&mut self, page: ObjectId, content: ObjectId) -> Result<()> {
        self.registry
            .set_item(page, "Contents", Object::reference(content))
    }

    pub fn register_media_box(&mut self, page: ObjectId, media_box: Array) -> Result<()> {
        self.registry.set_item(page, "MediaBox", media_box)
    }

    pub fn register_outlines(&mut self, catalog: ObjectId, outlines: ObjectId) -> Result<()> {
        self.registry
            .set_item(catalog, "Outlines", Object::reference(outlines))
    }

    /// Adds `/<font name> font 0 R` to a fonts resource dictionary.
    pub fn register_font(&self, fonts: &mut Dictionary, font: ObjectId) -> Result<()> {
        let name = self
            .registry
            .get_item(font, "Name")?
            .as_name()
            .ok_or_else(|| PdfError::InvalidOperation(format!("/Name of font {font} is not a name")))?
            .to_string();
        fonts.set(name, Object::reference(font));
        Ok(())
    }

    pub fn register_fonts_resource(resources: &mut Dictionary, fonts: Dictionary) {
        resources.set("Font", fonts);
    }

    pub fn register_proc_set_resource(resources: &mut Dictionary, proc_set: ObjectId) {
        resources.set("ProcSet", Object::reference(proc_set));
    }

    /// Encodes `raw` (Flate when `compress`) and attaches it to `object`.
    ///
    /// `/Filter` and `/Length` are taken from the encoded bytes.
    pub fn set_stream_content(
        &mut self,
        object: ObjectId,
        raw: Vec<u8>,
        compress: bool,
    ) -> Result<()> {
        let stream = if compress && cfg!(feature = "compression") {
            Stream::flate(&raw)?
        } else {
            if compress {
                tracing::warn!(object = %object, "built without compression, storing stream unfiltered");
            }
            Stream::new(raw)
        };
        self.registry.set_stream(object, stream)
    }

    /// Ends the build phase.
    pub fn finish(self) -> SealedRegistry {
        self.registry.seal()
    }
}
