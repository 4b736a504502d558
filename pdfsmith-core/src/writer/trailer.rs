use crate::error::{PdfError, Result};
use crate::objects::{Dictionary, Object, ObjectId, ObjectSerializer};
use crate::registry::SealedRegistry;
use std::io::Write;

/// The file trailer: `/Size`, `/Root`, optional `/Info`, and `startxref`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trailer {
    dictionary: Dictionary,
    root: ObjectId,
    info: Option<ObjectId>,
    xref_offset: u64,
}

impl Trailer {
    /// Builds the trailer.
    ///
    /// `root` (and `info`, when present) must be registered objects; a
    /// trailer without a valid root cannot describe a readable file.
    pub fn build(
        registry: &SealedRegistry,
        root: ObjectId,
        xref_offset: u64,
        xref_size: u32,
        info: Option<ObjectId>,
    ) -> Result<Self> {
        if !registry.contains(root) {
            return Err(PdfError::MissingRoot);
        }
        if let Some(info) = info.filter(|id| !registry.contains(*id)) {
            return Err(PdfError::InvalidStructure(format!(
                "trailer /Info {info} is not a registered object"
            )));
        }

        let mut dictionary = Dictionary::new();
        dictionary.set("Size", xref_size);
        dictionary.set("Root", Object::reference(root));
        if let Some(info) = info {
            dictionary.set("Info", Object::reference(info));
        }

        Ok(Self {
            dictionary,
            root,
            info,
            xref_offset,
        })
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn root(&self) -> ObjectId {
        self.root
    }

    pub fn info(&self) -> Option<ObjectId> {
        self.info
    }

    pub fn xref_offset(&self) -> u64 {
        self.xref_offset
    }

    pub fn write_to<W: Write>(&self, w: &mut W, serializer: &ObjectSerializer<'_>) -> Result<()> {
        w.write_all(b"trailer\n")?;
        serializer.write_dictionary(w, &self.dictionary)?;
        write!(w, "\nstartxref\n{}\n%%EOF\n", self.xref_offset)?;
        Ok(())
    }
}
