//! # pdfsmith
//!
//! A small, pure Rust PDF writer: build an object graph, then serialize it as
//! a classic PDF file with a cross-reference table and trailer.
//!
//! ## Features
//!
//! - **Object model**: null, booleans, integers, reals, strings, names,
//!   arrays, dictionaries and indirect references
//! - **Two-phase registry**: objects are created and linked while building,
//!   then sealed before writing
//! - **Deterministic output**: identical graphs produce identical bytes
//! - **Standard fonts**: the 14 base Type1 fonts, referenced by name
//! - **Compression**: Flate-encoded content streams (`compression` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use pdfsmith::{Document, Font, Page, Result};
//!
//! # fn main() -> Result<()> {
//! let mut doc = Document::new();
//! doc.set_title("My PDF");
//!
//! let mut page = Page::a4();
//! page.text(Font::Helvetica, 24.0, 50.0, 700.0, "Hello, PDF!");
//! doc.add_page(page);
//!
//! let bytes = doc.to_bytes()?;
//! assert!(bytes.starts_with(b"%PDF-1.4"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Low-level assembly
//!
//! ```rust
//! use pdfsmith::{PdfBuilder, PdfWriter, WriterConfig, Result};
//!
//! # fn main() -> Result<()> {
//! let mut builder = PdfBuilder::new();
//! let catalog = builder.create_catalog();
//! let pages = builder.create_page_collection(
//!     PdfBuilder::resource_catalog(),
//!     PdfBuilder::media_box(612.0, 792.0, 0.0, 0.0),
//! );
//! builder.register_page_collection(catalog, pages)?;
//!
//! let written = PdfWriter::new(WriterConfig::default())
//!     .write_document(&builder.finish(), catalog, None)?;
//! assert_eq!(written.cross_reference().size(), 3);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod compression;
pub mod document;
pub mod encoding;
pub mod error;
pub mod font;
pub mod metadata;
pub mod objects;
pub mod page;
pub mod registry;
pub mod writer;

pub use builder::PdfBuilder;
pub use document::Document;
pub use error::{PdfError, Result};
pub use font::Font;
pub use metadata::DocumentInfo;
pub use objects::{Array, Dictionary, Object, ObjectId, ObjectSerializer, ResolveReference, Stream};
pub use page::Page;
pub use registry::{IndirectObject, ObjectRegistry, SealedRegistry};
pub use writer::{CrossReferenceTable, PdfWriter, Trailer, WriterConfig, WrittenPdf};

/// Current version of pdfsmith
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
