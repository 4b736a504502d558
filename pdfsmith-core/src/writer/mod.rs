//! PDF writing functionality
//!
//! [`PdfWriter`] makes one forward pass over a [`SealedRegistry`]: header,
//! every object in creation order, the cross-reference table, the trailer.
//! Output is accumulated in memory; the caller's sink only sees the bytes of
//! a document that was produced completely.

mod trailer;
mod xref;

pub use trailer::Trailer;
pub use xref::{CrossReferenceTable, XRefEntry, ENTRY_LEN};

use crate::error::{PdfError, Result};
use crate::objects::{Object, ObjectId, ObjectSerializer};
use crate::registry::{IndirectObject, SealedRegistry};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Version written in the `%PDF-x.y` header.
    pub pdf_version: String,
    /// Emit the `%âãÏÓ` comment line after the header.
    pub binary_marker: bool,
    /// Flate-compress content streams built through the document layer.
    pub compress_streams: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            pdf_version: "1.4".to_string(),
            binary_marker: true,
            compress_streams: cfg!(feature = "compression"),
        }
    }
}

pub struct PdfWriter {
    config: WriterConfig,
    buffer: Vec<u8>,
    xref_positions: Vec<(ObjectId, u64)>,
}

impl PdfWriter {
    pub fn new(config: WriterConfig) -> Self {
        Self {
            config,
            buffer: Vec::new(),
            xref_positions: Vec::new(),
        }
    }

    pub fn write_document(
        mut self,
        registry: &SealedRegistry,
        root: ObjectId,
        info: Option<ObjectId>,
    ) -> Result<WrittenPdf> {
        tracing::debug!(
            objects = registry.len(),
            version = %self.config.pdf_version,
            "writing document"
        );
        let serializer = ObjectSerializer::new(registry);

        self.write_header()?;
        for object in registry.iter() {
            self.write_object(&serializer, object)?;
        }

        let table = CrossReferenceTable::from_offsets(&self.xref_positions)?;
        let xref_offset = self.position();
        table.write_to(&mut self.buffer)?;

        let trailer = Trailer::build(registry, root, xref_offset, table.size(), info)?;
        trailer.write_to(&mut self.buffer, &serializer)?;

        tracing::debug!(bytes = self.buffer.len(), xref_offset, "document written");
        Ok(WrittenPdf {
            bytes: self.buffer,
            xref_offset,
            table,
            trailer,
        })
    }

    fn position(&self) -> u64 {
        self.buffer.len() as u64
    }

    fn write_header(&mut self) -> Result<()> {
        write!(self.buffer, "%PDF-{}\n", self.config.pdf_version)?;
        if self.config.binary_marker {
            // Binary comment to ensure file is treated as binary
            self.buffer
                .extend_from_slice(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n']);
        }
        Ok(())
    }

    fn write_object(
        &mut self,
        serializer: &ObjectSerializer<'_>,
        object: &IndirectObject,
    ) -> Result<()> {
        let id = object.id();
        let offset = self.position();
        self.xref_positions.push((id, offset));
        tracing::trace!(object = id.number(), offset, "writing object");

        if object.body().is_null() {
            tracing::warn!(object = id.number(), "object body was never populated");
        }

        write!(self.buffer, "{} {} obj\n", id.number(), id.generation())?;
        serializer.write_object(&mut self.buffer, object.body())?;

        if let Some(stream) = object.stream() {
            check_stream_length(id, object.body(), stream.len())?;
            self.buffer.extend_from_slice(b"\nstream\n");
            self.buffer.extend_from_slice(stream.data());
            self.buffer.extend_from_slice(b"\nendstream");
        }

        self.buffer.extend_from_slice(b"\nendobj\n");
        Ok(())
    }
}

fn check_stream_length(id: ObjectId, body: &Object, actual: usize) -> Result<()> {
    let declared = body
        .as_dict()
        .and_then(|dict| dict.get("Length"))
        .and_then(Object::as_integer);
    match declared {
        Some(length) if length == actual as i64 => Ok(()),
        Some(length) => Err(PdfError::InvalidStructure(format!(
            "stream {id} declares /Length {length} but carries {actual} bytes"
        ))),
        None => Err(PdfError::InvalidStructure(format!(
            "stream {id} has no integer /Length"
        ))),
    }
}

/// A fully serialized document.
#[derive(Debug, Clone)]
pub struct WrittenPdf {
    bytes: Vec<u8>,
    xref_offset: u64,
    table: CrossReferenceTable,
    trailer: Trailer,
}

impl WrittenPdf {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Byte offset of the `xref` keyword.
    pub fn xref_offset(&self) -> u64 {
        self.xref_offset
    }

    pub fn cross_reference(&self) -> &CrossReferenceTable {
        &self.table
    }

    pub fn trailer(&self) -> &Trailer {
        &self.trailer
    }

    /// Byte offset at which `n 0 obj` of `id` begins.
    pub fn object_offset(&self, id: ObjectId) -> Option<u64> {
        if id.generation() != 0 {
            return None;
        }
        self.table
            .entries()
            .get(id.number() as usize)
            .filter(|entry| entry.in_use)
            .map(|entry| entry.offset)
    }

    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<()> {
        sink.write_all(&self.bytes)?;
        sink.flush()?;
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
    }
}
