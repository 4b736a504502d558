//! Document information dictionary (`/Info`).

use crate::objects::{Dictionary, Object};
use chrono::{DateTime, FixedOffset, Local};

/// Optional descriptive metadata for a document.
///
/// Every field is optional. A record with no fields set produces no `/Info`
/// object at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    /// Software that created the original document
    pub creator: Option<String>,
    /// Software that produced the PDF
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<FixedOffset>>,
    pub modification_date: Option<DateTime<FixedOffset>>,
}

impl DocumentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creator/Producer set to this library, both dates set to now.
    pub fn now() -> Self {
        let now = Local::now().fixed_offset();
        let producer = format!("pdfsmith v{}", env!("CARGO_PKG_VERSION"));
        Self {
            creator: Some("pdfsmith".to_string()),
            producer: Some(producer),
            creation_date: Some(now),
            modification_date: Some(now),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Sets the modification date to the current time.
    pub fn touch(&mut self) {
        self.modification_date = Some(Local::now().fixed_offset());
    }

    /// Non-empty entries in `/Info` key order.
    ///
    /// Empty strings count as absent.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let texts = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Keywords", &self.keywords),
            ("Creator", &self.creator),
            ("Producer", &self.producer),
        ];
        let dates = [
            ("CreationDate", &self.creation_date),
            ("ModDate", &self.modification_date),
        ];

        let mut entries: Vec<(&'static str, String)> = texts
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (key, v.to_string()))
            })
            .collect();
        entries.extend(
            dates
                .into_iter()
                .filter_map(|(key, date)| date.as_ref().map(|d| (key, format_pdf_date(d)))),
        );
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// The `/Info` dictionary, or `None` when nothing is set.
    ///
    /// Values are text strings; non-ASCII ones serialize as UTF-16BE.
    pub fn to_dictionary(&self) -> Option<Dictionary> {
        let entries = self.entries();
        if entries.is_empty() {
            return None;
        }
        Some(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), Object::String(value)))
                .collect(),
        )
    }
}

/// Formats a date as a PDF date string: `D:YYYYMMDDHHmmSSOHH'mm'`.
pub fn format_pdf_date(date: &DateTime<FixedOffset>) -> String {
    let offset = date.offset().local_minus_utc();
    let sign = if offset < 0 { '-' } else { '+' };
    let minutes = offset.abs() / 60;
    format!(
        "{}{}{:02}'{:02}'",
        date.format("D:%Y%m%d%H%M%S"),
        sign,
        minutes / 60,
        minutes % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(offset_secs: i32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_secs)
            .unwrap()
            .with_ymd_and_hms(2023, 12, 25, 15, 30, 45)
            .unwrap()
    }

    #[test]
    fn test_format_pdf_date() {
        assert_eq!(format_pdf_date(&date(0)), "D:20231225153045+00'00'");
        assert_eq!(format_pdf_date(&date(3600)), "D:20231225153045+01'00'");
        assert_eq!(
            format_pdf_date(&date(-(5 * 3600 + 30 * 60))),
            "D:20231225153045-05'30'"
        );
    }

    #[test]
    fn test_default_is_empty() {
        let info = DocumentInfo::default();
        assert!(info.is_empty());
        assert_eq!(info.to_dictionary(), None);
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let info = DocumentInfo::new().with_title("").with_author("");
        assert!(info.is_empty());
    }

    #[test]
    fn test_title_only_has_one_key() {
        let dict = DocumentInfo::new().with_title("Report").to_dictionary().unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("Title"), Some(&Object::String("Report".to_string())));
    }

    #[test]
    fn test_entry_order() {
        let mut info = DocumentInfo::new()
            .with_keywords("a, b")
            .with_title("T")
            .with_subject("S")
            .with_author("A");
        info.creation_date = Some(date(0));

        let keys: Vec<_> = info.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Title", "Author", "Subject", "Keywords", "CreationDate"]);
    }

    #[test]
    fn test_now_stamps_dates_and_tools() {
        let info = DocumentInfo::now();
        assert_eq!(info.creator.as_deref(), Some("pdfsmith"));
        assert!(info.producer.as_deref().unwrap().starts_with("pdfsmith v"));
        assert_eq!(info.creation_date, info.modification_date);

        let dict = info.to_dictionary().unwrap();
        let created = dict.get("CreationDate").and_then(Object::as_string).unwrap();
        assert!(created.starts_with("D:"));
        assert!(created.ends_with('\''));
    }

    #[test]
    fn test_touch_updates_modification_date() {
        let mut info = DocumentInfo::new();
        info.touch();
        assert!(info.modification_date.is_some());
        assert!(info.creation_date.is_none());
    }
}
