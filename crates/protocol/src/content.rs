//! Card content types.
//!
//! A card body is described as an ordered list of [`ContentLine`] values.
//! The layout engine turns each of them into one or more [`RenderedLine`]s,
//! which the document assembler positions vertically.

use serde::{Deserialize, Serialize};

/// Leading decoration placed before section titles.
pub const SECTION_LEAD: &str = "—";

/// One logical line of card content, as supplied to the layout engine.
///
/// Control lines (gaps, section headers, bio overflow) are explicit variants
/// rather than magic key strings, so user data can never collide with them.
///
/// # Examples
///
/// ```
/// use termcard_protocol::ContentLine;
///
/// let line = ContentLine::key_value("Editors", "Cursor, Doom Emacs");
/// assert!(matches!(line, ContentLine::KeyValue { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentLine {
    /// The title line: display name and GitHub handle.
    Header {
        /// Display name (may contain wide or invisible characters).
        name: String,
        /// Handle, rendered with a leading `@`.
        handle: String,
    },
    /// A dot-filled `key: value` line. The value may carry inline markup.
    KeyValue {
        /// Field label.
        key: String,
        /// Field value, plain text or inline `<tspan>` markup.
        value: String,
    },
    /// Vertical spacing with no text.
    Gap,
    /// A full-width decorative line introducing a group of fields.
    SectionHeader {
        /// Title text, rendered verbatim before the fill characters.
        title: String,
    },
    /// The free-text bio field.
    Bio {
        /// Unwrapped bio text.
        text: String,
    },
    /// A wrapped continuation of the bio. Produced by the layout engine only.
    BioOverflow {
        /// Continuation text.
        text: String,
    },
}

impl ContentLine {
    /// Creates a header line.
    #[must_use]
    pub fn header(name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self::Header {
            name: name.into(),
            handle: handle.into(),
        }
    }

    /// Creates a key/value line.
    #[must_use]
    pub fn key_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::KeyValue {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a section header with the standard `— Title ` decoration.
    ///
    /// # Examples
    ///
    /// ```
    /// use termcard_protocol::ContentLine;
    ///
    /// let line = ContentLine::section("Contact");
    /// assert_eq!(
    ///     line,
    ///     ContentLine::SectionHeader { title: "— Contact ".to_string() }
    /// );
    /// ```
    #[must_use]
    pub fn section(title: impl AsRef<str>) -> Self {
        Self::SectionHeader {
            title: format!("{SECTION_LEAD} {} ", title.as_ref()),
        }
    }

    /// Creates a bio line.
    #[must_use]
    pub fn bio(text: impl Into<String>) -> Self {
        Self::Bio { text: text.into() }
    }
}

/// The kind of a [`RenderedLine`], telling the assembler how to place it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Title line.
    Header,
    /// Dot-filled key/value line.
    KeyValue,
    /// Vertical gap; carries no text.
    Gap,
    /// Section header line.
    SectionHeader,
    /// First bio line.
    Bio {
        /// Column at which the bio text starts, `None` when the first line
        /// holds only dots. Overflow lines align here.
        text_column: Option<usize>,
    },
    /// Left-aligned bio continuation, not right-padded.
    BioOverflow,
}

/// A laid-out line ready for document assembly.
///
/// `markup` is SVG-safe text content: inline `<tspan class="...">` spans
/// with XML entities escaped. Once the markup is stripped, every line except
/// [`LineKind::BioOverflow`] and [`LineKind::Gap`] is exactly the configured
/// total width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    /// What produced this line.
    pub kind: LineKind,
    /// Markup content of the line.
    pub markup: String,
    /// Whether any part of the line had to be shortened to fit its budget.
    pub truncated: bool,
}

impl RenderedLine {
    /// Creates a rendered line.
    #[must_use]
    pub fn new(kind: LineKind, markup: impl Into<String>, truncated: bool) -> Self {
        Self {
            kind,
            markup: markup.into(),
            truncated,
        }
    }

    /// Creates an empty gap line.
    #[must_use]
    pub fn gap() -> Self {
        Self::new(LineKind::Gap, String::new(), false)
    }

    /// Returns `true` for gap lines.
    #[must_use]
    pub fn is_gap(&self) -> bool {
        self.kind == LineKind::Gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_adds_lead_and_trailing_space() {
        let ContentLine::SectionHeader { title } = ContentLine::section("GitHub Statistics") else {
            panic!("expected a section header");
        };
        assert_eq!(title, "— GitHub Statistics ");
    }

    #[test]
    fn gap_line_is_empty() {
        let line = RenderedLine::gap();
        assert!(line.is_gap());
        assert!(line.markup.is_empty());
        assert!(!line.truncated);
    }

    #[test]
    fn content_line_tagged_serialization() {
        let json = serde_json::to_string(&ContentLine::Gap).unwrap();
        assert_eq!(json, r#"{"kind":"gap"}"#);

        let line: ContentLine =
            serde_json::from_str(r#"{"kind":"key_value","key":"OS","value":"macOS"}"#).unwrap();
        assert_eq!(line, ContentLine::key_value("OS", "macOS"));
    }
}
