use crate::error::Result;
use crate::objects::{Dictionary, Object};

/// Encoded payload of a stream object.
///
/// `data` always holds the bytes exactly as they will appear between
/// `stream` and `endstream`; `filter` names the encoding that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    data: Vec<u8>,
    filter: Option<String>,
}

impl Stream {
    /// An unfiltered stream.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, filter: None }
    }

    /// Wraps bytes that were already encoded with `filter`.
    pub fn encoded(data: Vec<u8>, filter: impl Into<String>) -> Self {
        Self {
            data,
            filter: Some(filter.into()),
        }
    }

    /// Compresses `raw` and tags the result `/FlateDecode`.
    pub fn flate(raw: &[u8]) -> Result<Self> {
        let compressed = crate::compression::compress(raw)?;
        Ok(Self::encoded(compressed, "FlateDecode"))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Encoded length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Writes `/Filter` and `/Length` for this payload into `dict`.
    pub fn apply_to(&self, dict: &mut Dictionary) {
        match &self.filter {
            Some(filter) => dict.set("Filter", Object::name(filter.as_str())),
            None => {
                dict.remove("Filter");
            }
        }
        dict.set("Length", self.data.len());
    }
}
