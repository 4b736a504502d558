/// The 14 standard Type1 fonts every PDF reader provides.
///
/// These are referenced by name only; nothing is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    Symbol,
    ZapfDingbats,
}

impl Font {
    pub const ALL: [Font; 14] = [
        Font::Helvetica,
        Font::HelveticaBold,
        Font::HelveticaOblique,
        Font::HelveticaBoldOblique,
        Font::TimesRoman,
        Font::TimesBold,
        Font::TimesItalic,
        Font::TimesBoldItalic,
        Font::Courier,
        Font::CourierBold,
        Font::CourierOblique,
        Font::CourierBoldOblique,
        Font::Symbol,
        Font::ZapfDingbats,
    ];

    /// PostScript name used for `/BaseFont`.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
            Font::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Font::TimesRoman => "Times-Roman",
            Font::TimesBold => "Times-Bold",
            Font::TimesItalic => "Times-Italic",
            Font::TimesBoldItalic => "Times-BoldItalic",
            Font::Courier => "Courier",
            Font::CourierBold => "Courier-Bold",
            Font::CourierOblique => "Courier-Oblique",
            Font::CourierBoldOblique => "Courier-BoldOblique",
            Font::Symbol => "Symbol",
            Font::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Key under which the font appears in `/Resources /Font`, e.g. `F1`.
    pub fn resource_name(&self) -> String {
        format!("F{}", *self as usize + 1)
    }

    /// Case-insensitive lookup by PostScript name.
    pub fn from_name(name: &str) -> Option<Font> {
        Font::ALL
            .into_iter()
            .find(|f| f.pdf_name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names_are_unique() {
        let mut names: Vec<_> = Font::ALL.iter().map(Font::resource_name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 14);
        assert_eq!(Font::Helvetica.resource_name(), "F1");
        assert_eq!(Font::ZapfDingbats.resource_name(), "F14");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Font::from_name("times-roman"), Some(Font::TimesRoman));
        assert_eq!(Font::from_name("Courier-Bold"), Some(Font::CourierBold));
        assert_eq!(Font::from_name("Comic Sans"), None);
    }
}
