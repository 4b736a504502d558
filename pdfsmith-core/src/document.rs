use crate::builder::PdfBuilder;
use crate::error::Result;
use crate::font::Font;
use crate::metadata::DocumentInfo;
use crate::page::Page;
use crate::writer::{PdfWriter, WriterConfig, WrittenPdf};
use std::io::Write;

/// A PDF document that can contain multiple pages and metadata.
///
/// # Example
///
/// ```rust
/// use pdfsmith::{Document, Font, Page};
///
/// let mut doc = Document::new();
/// doc.set_title("My Document");
/// doc.set_author("Jane Doe");
///
/// let mut page = Page::a4();
/// page.text(Font::Helvetica, 18.0, 72.0, 760.0, "Hello");
/// doc.add_page(page);
///
/// let mut buffer = Vec::new();
/// doc.write(&mut buffer).unwrap();
/// assert!(buffer.ends_with(b"%%EOF\n"));
/// ```
pub struct Document {
    pages: Vec<Page>,
    info: DocumentInfo,
    config: WriterConfig,
}

impl Document {
    /// Creates a new empty PDF document with timestamped metadata.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            info: DocumentInfo::now(),
            config: WriterConfig::default(),
        }
    }

    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn info(&self) -> &DocumentInfo {
        &self.info
    }

    /// Replaces the metadata record; `DocumentInfo::default()` drops `/Info`.
    pub fn set_info(&mut self, info: DocumentInfo) {
        self.info = info;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.info.title = Some(title.into());
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.info.author = Some(author.into());
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.info.subject = Some(subject.into());
    }

    pub fn set_keywords(&mut self, keywords: impl Into<String>) {
        self.info.keywords = Some(keywords.into());
    }

    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.info.creator = Some(creator.into());
    }

    pub fn set_producer(&mut self, producer: impl Into<String>) {
        self.info.producer = Some(producer.into());
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: WriterConfig) {
        self.config = config;
    }

    /// Enables or disables Flate compression of page content.
    pub fn set_compress(&mut self, compress: bool) {
        self.config.compress_streams = compress;
    }

    fn used_fonts(&self) -> Vec<Font> {
        let mut fonts = Vec::new();
        for font in self.pages.iter().flat_map(|page| page.fonts()) {
            if !fonts.contains(font) {
                fonts.push(*font);
            }
        }
        fonts
    }

    /// Builds the object graph and serializes it.
    ///
    /// Object order: catalog, outlines, procedure set, fonts, page tree,
    /// then page and content stream for each page, then info.
    pub fn build(&self) -> Result<WrittenPdf> {
        let mut builder = PdfBuilder::new();

        let catalog = builder.create_catalog();
        let outlines = builder.create_outlines();
        builder.register_outlines(catalog, outlines)?;

        let fonts = self.used_fonts();
        let proc_set = builder.create_proc_set(!fonts.is_empty());

        let mut fonts_resource = PdfBuilder::fonts_resource();
        for font in &fonts {
            let font_id = builder.create_basic_font(&font.resource_name(), font.pdf_name());
            builder.register_font(&mut fonts_resource, font_id)?;
        }

        let mut resources = PdfBuilder::resource_catalog();
        PdfBuilder::register_proc_set_resource(&mut resources, proc_set);
        if !fonts_resource.is_empty() {
            PdfBuilder::register_fonts_resource(&mut resources, fonts_resource);
        }

        let default_box = self
            .pages
            .first()
            .map_or_else(Page::a4, |page| Page::new(page.width(), page.height()));
        let pages = builder.create_page_collection(
            resources,
            PdfBuilder::media_box(default_box.width(), default_box.height(), 0.0, 0.0),
        );
        builder.register_page_collection(catalog, pages)?;

        for page in &self.pages {
            let page_id = builder.create_page(pages);
            builder.register_media_box(
                page_id,
                PdfBuilder::media_box(page.width(), page.height(), 0.0, 0.0),
            )?;
            let content = builder.create_page_content();
            builder.set_stream_content(
                content,
                page.content().to_vec(),
                self.config.compress_streams,
            )?;
            builder.register_page_content(page_id, content)?;
            builder.register_page(pages, page_id)?;
        }

        let info = builder.create_document_info(&self.info);
        tracing::debug!(
            pages = self.pages.len(),
            fonts = fonts.len(),
            objects = builder.registry().len(),
            "document graph assembled"
        );

        let registry = builder.finish();
        PdfWriter::new(self.config.clone()).write_document(&registry, catalog, info)
    }

    /// Serializes the document into a byte vector.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.touch();
        Ok(self.build()?.into_bytes())
    }

    /// Writes the document to `sink`. Nothing is written if building fails.
    pub fn write<W: Write>(&mut self, sink: &mut W) -> Result<()> {
        self.touch();
        self.build()?.write_to(sink)
    }

    /// Saves the document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be built or the file cannot
    /// be created or written.
    pub fn save(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.touch();
        let written = self.build()?;
        written.save(path.as_ref())?;
        tracing::info!(path = %path.as_ref().display(), bytes = written.bytes().len(), "saved PDF");
        Ok(())
    }

    fn touch(&mut self) {
        // Only refresh a date the caller asked for.
        if self.info.modification_date.is_some() {
            self.info.touch();
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{Object, ObjectId};

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert_eq!(doc.page_count(), 0);
        assert!(doc.info().title.is_none());
        assert_eq!(doc.info().creator.as_deref(), Some("pdfsmith"));
    }

    #[test]
    fn test_setters() {
        let mut doc = Document::new();
        doc.set_title("Title");
        doc.set_author("Author");
        doc.set_subject("Subject");
        doc.set_keywords("k1, k2");
        doc.set_creator("Creator");
        doc.set_producer("Producer");

        let info = doc.info();
        assert_eq!(info.title.as_deref(), Some("Title"));
        assert_eq!(info.author.as_deref(), Some("Author"));
        assert_eq!(info.subject.as_deref(), Some("Subject"));
        assert_eq!(info.keywords.as_deref(), Some("k1, k2"));
        assert_eq!(info.creator.as_deref(), Some("Creator"));
        assert_eq!(info.producer.as_deref(), Some("Producer"));
    }

    #[test]
    fn test_empty_document_still_has_page_tree() {
        let mut doc = Document::new();
        doc.set_info(DocumentInfo::default());
        let written = doc.build().unwrap();

        let text = String::from_utf8_lossy(written.bytes());
        assert!(text.contains("/Type /Pages /Kids [ ] /Count 0"));
        assert_eq!(written.trailer().info(), None);
        assert_eq!(written.trailer().root(), ObjectId::new(1, 0));
    }

    #[test]
    fn test_object_order() {
        let mut doc = Document::new();
        doc.set_compress(false);
        let mut page = Page::letter();
        page.text(Font::Courier, 10.0, 10.0, 10.0, "x");
        doc.add_page(page);
        let written = doc.build().unwrap();

        // catalog, outlines, procset, font, pages, page, content, info
        assert_eq!(written.cross_reference().size(), 9);
        assert_eq!(
            written.trailer().dictionary().get("Info"),
            Some(&Object::reference(ObjectId::new(8, 0)))
        );
        let text = String::from_utf8_lossy(written.bytes());
        assert!(text.contains(
            "4 0 obj\n<< /Type /Font /Subtype /Type1 /Name /F9 /BaseFont /Courier /Encoding /WinAnsiEncoding >>"
        ));
        assert!(text.contains("/Resources << /ProcSet 3 0 R /Font << /F9 4 0 R >> >>"));
    }

    #[test]
    fn test_write_leaves_sink_untouched_on_success_only() {
        let mut doc = Document::new();
        doc.add_page(Page::a4());
        let mut sink = Vec::new();
        doc.write(&mut sink).unwrap();
        assert!(sink.starts_with(b"%PDF-1.4\n"));
        assert!(sink.ends_with(b"%%EOF\n"));
    }
}
