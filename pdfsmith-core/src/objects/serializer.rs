//! PDF object serialization.
//!
//! Turns [`Object`] values into PDF syntax. Output conventions:
//!
//! - dictionaries: `<< /Key value /Key value >>`, empty `<< >>`
//! - arrays: `[ a b c ]`, empty `[ ]`
//! - references: `n g R`, checked against a [`ResolveReference`]
//! - strings: literal `( … )` for ASCII, `<FEFF…>` UTF-16BE hex otherwise

use crate::encoding::utf16_be_with_bom;
use crate::error::{PdfError, Result};
use crate::objects::{Dictionary, Object, ObjectId};
use std::io::Write;

/// Answers whether an object id names a registered indirect object.
pub trait ResolveReference {
    fn resolves(&self, id: ObjectId) -> bool;
}

/// Serializer for PDF values.
pub struct ObjectSerializer<'a> {
    resolver: &'a dyn ResolveReference,
}

impl<'a> ObjectSerializer<'a> {
    pub fn new(resolver: &'a dyn ResolveReference) -> Self {
        Self { resolver }
    }

    /// Serialize an object to bytes.
    pub fn serialize(&self, object: &Object) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_object(&mut buf, object)?;
        Ok(buf)
    }

    /// Serialize an object to a string (for debugging and tests).
    pub fn serialize_to_string(&self, object: &Object) -> Result<String> {
        Ok(String::from_utf8_lossy(&self.serialize(object)?).into_owned())
    }

    pub fn write_object<W: Write>(&self, w: &mut W, object: &Object) -> Result<()> {
        match object {
            Object::Null => w.write_all(b"null")?,
            Object::Boolean(b) => w.write_all(if *b { b"true" } else { b"false" })?,
            Object::Integer(i) => write!(w, "{i}")?,
            Object::Real(f) => w.write_all(format_real(*f).as_bytes())?,
            Object::String(s) => write_string(w, s)?,
            Object::Name(n) => write_name(w, n)?,
            Object::Array(items) => {
                w.write_all(b"[ ")?;
                for item in items {
                    self.write_object(w, item)?;
                    w.write_all(b" ")?;
                }
                w.write_all(b"]")?;
            }
            Object::Dictionary(dict) => self.write_dictionary(w, dict)?,
            Object::Reference(id) => {
                if !self.resolver.resolves(*id) {
                    return Err(PdfError::UnregisteredReference(*id));
                }
                write!(w, "{} {} R", id.number(), id.generation())?;
            }
        }
        Ok(())
    }

    pub fn write_dictionary<W: Write>(&self, w: &mut W, dict: &Dictionary) -> Result<()> {
        w.write_all(b"<< ")?;
        for (key, value) in dict.iter() {
            write_name(w, key)?;
            w.write_all(b" ")?;
            self.write_object(w, value)?;
            w.write_all(b" ")?;
        }
        w.write_all(b">>")?;
        Ok(())
    }
}

/// Shortest round-trippable decimal form without exponent.
///
/// `f64`'s `Display` never switches to scientific notation and drops a
/// trailing `.0`, so exact integers come out without a decimal point.
pub fn format_real(value: f64) -> String {
    if !value.is_finite() {
        tracing::warn!(value, "non-finite real has no PDF syntax, writing 0");
        return "0".to_string();
    }
    if value == 0.0 {
        // also folds -0.0
        return "0".to_string();
    }
    format!("{value}")
}

fn is_regular_name_byte(byte: u8) -> bool {
    matches!(byte, b'!'..=b'~')
        && !matches!(
            byte,
            b'%' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'#'
        )
}

/// Write a PDF name: `/` followed by the bytes, irregular ones as `#xx`.
///
/// A NUL byte cannot appear in a name, even escaped.
pub fn write_name<W: Write>(w: &mut W, name: &str) -> Result<()> {
    if name.bytes().any(|byte| byte == 0) {
        return Err(PdfError::InvalidOperation(format!(
            "name {name:?} contains a NUL byte"
        )));
    }
    w.write_all(b"/")?;
    for byte in name.bytes() {
        if is_regular_name_byte(byte) {
            w.write_all(&[byte])?;
        } else {
            write!(w, "#{byte:02X}")?;
        }
    }
    Ok(())
}

/// Literal string `( … )` over raw bytes.
///
/// Parentheses and backslash are escaped, and so is a carriage return,
/// which readers would otherwise turn into a line feed.
pub fn literal_string(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + 2);
    out.push(b'(');
    for &byte in bytes {
        match byte {
            b'(' | b')' | b'\\' => out.extend_from_slice(&[b'\\', byte]),
            b'\r' => out.extend_from_slice(b"\\r"),
            _ => out.push(byte),
        }
    }
    out.push(b')');
    out
}

/// Write a text string.
///
/// ASCII text is written as a literal string; anything else as a hex string
/// holding UTF-16BE with a byte order mark.
pub fn write_string<W: Write>(w: &mut W, text: &str) -> std::io::Result<()> {
    if text.is_ascii() {
        return w.write_all(&literal_string(text.as_bytes()));
    }
    w.write_all(b"<")?;
    for byte in utf16_be_with_bom(text) {
        write!(w, "{byte:02X}")?;
    }
    w.write_all(b">")
}
