//! Classic cross-reference table (`xref` section).
//!
//! One subsection starting at object 0. Every entry is exactly 20 bytes:
//! `oooooooooo ggggg n \n`.

use crate::error::{PdfError, Result};
use crate::objects::ObjectId;
use std::io::Write;

/// Length in bytes of one xref entry including its line terminator.
pub const ENTRY_LEN: usize = 20;

const MAX_OFFSET: u64 = 9_999_999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XRefEntry {
    pub offset: u64,
    pub generation: u16,
    pub in_use: bool,
}

impl XRefEntry {
    /// Entry 0, head of the free list.
    pub fn free_head() -> Self {
        Self {
            offset: 0,
            generation: 65535,
            in_use: false,
        }
    }

    pub fn in_use(offset: u64) -> Self {
        Self {
            offset,
            generation: 0,
            in_use: true,
        }
    }

    /// The 20-byte line for this entry.
    pub fn to_line(&self) -> String {
        let flag = if self.in_use { 'n' } else { 'f' };
        format!("{:010} {:05} {} \n", self.offset, self.generation, flag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossReferenceTable {
    entries: Vec<XRefEntry>,
}

impl CrossReferenceTable {
    /// Builds the table from `(object, offset)` pairs for objects `1..=N`.
    ///
    /// Pairs must be in ascending order with no gaps and generation 0.
    pub fn from_offsets(offsets: &[(ObjectId, u64)]) -> Result<Self> {
        let mut entries = Vec::with_capacity(offsets.len() + 1);
        entries.push(XRefEntry::free_head());

        for (expected, (id, offset)) in (1u32..).zip(offsets) {
            if id.number() != expected || id.generation() != 0 {
                return Err(PdfError::InvalidStructure(format!(
                    "xref expects object {expected} 0 next, got {} {}",
                    id.number(),
                    id.generation()
                )));
            }
            if *offset > MAX_OFFSET {
                return Err(PdfError::InvalidStructure(format!(
                    "offset {offset} of object {} does not fit in 10 digits",
                    id.number()
                )));
            }
            entries.push(XRefEntry::in_use(*offset));
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[XRefEntry] {
        &self.entries
    }

    /// Number of entries including the free head, i.e. the trailer `/Size`.
    pub fn size(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        w.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// `xref`, the subsection header and every entry line.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(16 + self.entries.len() * ENTRY_LEN);
        buf.extend_from_slice(format!("xref\n0 {}\n", self.entries.len()).as_bytes());
        for entry in &self.entries {
            buf.extend_from_slice(entry.to_line().as_bytes());
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(offsets: &[u64]) -> Vec<(ObjectId, u64)> {
        offsets
            .iter()
            .enumerate()
            .map(|(i, off)| (ObjectId::new(i as u32 + 1, 0), *off))
            .collect()
    }

    #[test]
    fn test_write_xref() {
        let table = CrossReferenceTable::from_offsets(&ids(&[15, 94, 152])).unwrap();

        let expected = "xref\n\
                        0 4\n\
                        0000000000 65535 f \n\
                        0000000015 00000 n \n\
                        0000000094 00000 n \n\
                        0000000152 00000 n \n";
        assert_eq!(String::from_utf8(table.to_bytes()).unwrap(), expected);
        assert_eq!(table.size(), 4);

        let mut sink = Vec::new();
        table.write_to(&mut sink).unwrap();
        assert_eq!(sink, expected.as_bytes());
    }

    #[test]
    fn test_entries_are_twenty_bytes() {
        let table =
            CrossReferenceTable::from_offsets(&ids(&[9, 1_234_567, MAX_OFFSET])).unwrap();
        for entry in table.entries() {
            assert_eq!(entry.to_line().len(), ENTRY_LEN);
        }
    }

    #[test]
    fn test_empty_table_has_only_free_head() {
        let table = CrossReferenceTable::from_offsets(&[]).unwrap();
        assert_eq!(table.entries(), &[XRefEntry::free_head()]);
        assert_eq!(
            String::from_utf8(table.to_bytes()).unwrap(),
            "xref\n0 1\n0000000000 65535 f \n"
        );
    }

    #[test]
    fn test_gap_is_rejected() {
        let offsets = vec![(ObjectId::new(1, 0), 15), (ObjectId::new(3, 0), 40)];
        assert!(matches!(
            CrossReferenceTable::from_offsets(&offsets),
            Err(PdfError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_out_of_order_is_rejected() {
        let offsets = vec![(ObjectId::new(2, 0), 15), (ObjectId::new(1, 0), 40)];
        assert!(CrossReferenceTable::from_offsets(&offsets).is_err());
    }

    #[test]
    fn test_nonzero_generation_is_rejected() {
        let offsets = vec![(ObjectId::new(1, 2), 15)];
        assert!(CrossReferenceTable::from_offsets(&offsets).is_err());
    }

    #[test]
    fn test_oversized_offset_is_rejected() {
        assert!(CrossReferenceTable::from_offsets(&ids(&[MAX_OFFSET + 1])).is_err());
    }
}
