use crate::encoding::win_ansi_encode;
use crate::font::Font;
use crate::objects::serializer::{format_real, literal_string};

/// A single page: its size and raw content stream.
///
/// Content is kept as uncompressed content-stream operators; it is encoded
/// when the document is written.
///
/// # Example
///
/// ```rust
/// use pdfsmith::{Font, Page};
///
/// let mut page = Page::a4();
/// page.text(Font::Helvetica, 24.0, 72.0, 750.0, "Hello, PDF!");
/// assert!(page.content().starts_with(b"BT /F1 24 Tf"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    width: f64,
    height: f64,
    content: Vec<u8>,
    fonts: Vec<Font>,
}

impl Page {
    /// Creates a new page with the specified width and height in points.
    ///
    /// Points are 1/72 of an inch.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            content: Vec::new(),
            fonts: Vec::new(),
        }
    }

    /// A4 (210 × 297 mm).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    /// US Letter (8.5 × 11 in).
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Fonts referenced by the content, in first-use order.
    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    pub fn set_content(&mut self, content: impl Into<Vec<u8>>) {
        self.content = content.into();
    }

    pub fn append_content(&mut self, content: &[u8]) {
        self.content.extend_from_slice(content);
    }

    /// Declares that the content uses `font`; returns its resource name.
    pub fn use_font(&mut self, font: Font) -> String {
        if !self.fonts.contains(&font) {
            self.fonts.push(font);
        }
        font.resource_name()
    }

    /// Appends a single line of text at `(x, y)`.
    ///
    /// The text is encoded as WinAnsi to match the standard fonts; characters
    /// outside that set are shown as `?`.
    pub fn text(&mut self, font: Font, size: f64, x: f64, y: f64, text: &str) -> &mut Self {
        let resource = self.use_font(font);
        let op = format!(
            "BT /{resource} {} Tf {} {} Td ",
            format_real(size),
            format_real(x),
            format_real(y)
        );
        self.content.extend_from_slice(op.as_bytes());
        self.content
            .extend_from_slice(&literal_string(&win_ansi_encode(text)));
        self.content.extend_from_slice(b" Tj ET\n");
        self
    }
}
