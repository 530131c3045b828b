//! Dot-filled `key: value` lines and section headers.
//!
//! ```text
//! . Editors:.............................................. Cursor, Doom Emacs
//! — GitHub Statistics ———————————————————————————————————————————————————————
//! ```
//!
//! Every line produced here is exactly `total_width` visible columns. When
//! the content does not fit, the value (and, if that is not enough, the key)
//! is shortened with an ellipsis and the dot run absorbs the slack left by
//! wide characters.

use termcard_config::layout::ELLIPSIS_WIDTH;
use tracing::debug;

use crate::markup::{self, escape, key_span};
use crate::metrics::{ellipsize, visible_width};

/// Prefix of every key/value line.
const KEY_PREFIX: &str = ". ";

/// Columns between the separator and the value: at least one dot and a space.
const MIN_GUTTER: usize = 2;

/// Text of a single formatted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    /// Line text (plain or markup, depending on the formatter).
    pub text: String,
    /// Whether any part of the input was shortened.
    pub truncated: bool,
}

impl Formatted {
    fn new(text: String, truncated: bool) -> Self {
        Self { text, truncated }
    }
}

/// The `. key:` part of a line after any shortening.
struct KeySlot {
    key: String,
    width: usize,
    truncated: bool,
}

impl KeySlot {
    fn new(key: &str, separator: &str) -> Self {
        Self {
            key: key.to_string(),
            width: visible_width(KEY_PREFIX) + visible_width(key) + visible_width(separator),
            truncated: false,
        }
    }

    /// Shortens the key so that at least `MIN_GUTTER` plus an ellipsis worth
    /// of columns remain for the dots and value.
    fn fitted(key: &str, separator: &str, total_width: usize) -> Self {
        let slot = Self::new(key, separator);
        let max_width = total_width.saturating_sub(MIN_GUTTER + ELLIPSIS_WIDTH);
        if slot.width <= max_width {
            return slot;
        }

        let fixed = visible_width(KEY_PREFIX) + visible_width(separator);
        let budget = max_width.saturating_sub(fixed);
        let short = ellipsize(key, budget).unwrap_or_else(|| key.to_string());
        debug!(key, budget, "truncated key");
        Self {
            width: fixed + visible_width(&short),
            key: short,
            truncated: true,
        }
    }

    /// Columns left for the value after the key and the minimum gutter.
    fn value_budget(&self, total_width: usize) -> usize {
        total_width.saturating_sub(self.width + MIN_GUTTER)
    }

    /// Dots needed to fill the line given the value width.
    fn dots(&self, total_width: usize, value_width: usize) -> usize {
        total_width.saturating_sub(self.width + 1 + value_width)
    }
}

/// Formats a plain-text key/value line.
///
/// Produces `. {key}{separator}{dots} {value}` with at least one dot. When
/// that cannot fit, the value is ellipsized to `total_width - width(". key:") - 2`
/// columns so the line still comes out exactly `total_width` wide.
///
/// # Examples
///
/// ```
/// use termcard_layout::line::format_key_value;
///
/// let line = format_key_value("OS", "Linux", 20, ":");
/// assert_eq!(line.text, ". OS:......... Linux");
/// assert!(!line.truncated);
/// ```
#[must_use]
pub fn format_key_value(key: &str, value: &str, total_width: usize, separator: &str) -> Formatted {
    let slot = KeySlot::new(key, separator);
    let value_width = visible_width(value);

    if slot.width + 1 + value_width < total_width {
        let dots = slot.dots(total_width, value_width);
        return Formatted::new(
            format!("{KEY_PREFIX}{key}{separator}{} {value}", ".".repeat(dots)),
            false,
        );
    }

    let slot = KeySlot::fitted(key, separator, total_width);
    let budget = slot.value_budget(total_width);
    let (value, value_cut) = match ellipsize(value, budget) {
        Some(short) => (short, true),
        None => (value.to_string(), false),
    };
    let dots = slot.dots(total_width, visible_width(&value));
    debug!(key, budget, "truncated key/value line");

    Formatted::new(
        format!(
            "{KEY_PREFIX}{}{separator}{} {value}",
            slot.key,
            ".".repeat(dots)
        ),
        slot.truncated || value_cut,
    )
}

/// Formats a key/value line whose value may carry inline markup.
///
/// Widths are measured on visible text. The key is wrapped in a key span and
/// the value is kept as-is unless it must be truncated, in which case it is
/// replaced by a single value span (see [`markup::truncate`]).
///
/// # Examples
///
/// ```
/// use termcard_layout::line::format_styled_key_value;
///
/// let line = format_styled_key_value(
///     "Lines",
///     r#"<tspan class="add">+5</tspan>"#,
///     20,
///     ":",
/// );
/// assert_eq!(
///     line.text,
///     r#". <tspan class="key">Lines</tspan>:......... <tspan class="add">+5</tspan>"#
/// );
/// ```
#[must_use]
pub fn format_styled_key_value(
    key: &str,
    value: &str,
    total_width: usize,
    separator: &str,
) -> Formatted {
    let slot = KeySlot::new(key, separator);
    let value_width = markup::true_length(value);

    let (slot, value, truncated) = if slot.width + 1 + value_width < total_width {
        (slot, value.to_string(), false)
    } else {
        let slot = KeySlot::fitted(key, separator, total_width);
        let budget = slot.value_budget(total_width);
        let value = markup::truncate(value, budget).into_owned();
        let value_cut = markup::true_length(&value) != value_width;
        debug!(key, budget, "truncated styled key/value line");
        let truncated = slot.truncated || value_cut;
        (slot, value, truncated)
    };

    let dots = slot.dots(total_width, markup::true_length(&value));
    Formatted::new(
        format!(
            "{KEY_PREFIX}{}{}{} {value}",
            key_span(&slot.key),
            escape(separator),
            ".".repeat(dots)
        ),
        truncated,
    )
}

/// Formats a section header: the title followed by `fill` up to the full width.
///
/// A title wider than the line is ellipsized so the line stays exactly
/// `total_width` columns. `fill` must be a single-column character.
///
/// # Examples
///
/// ```
/// use termcard_layout::line::format_section_header;
///
/// let line = format_section_header("— Contact ", 20, '—');
/// assert_eq!(line.text, "— Contact ——————————");
/// ```
#[must_use]
pub fn format_section_header(title: &str, total_width: usize, fill: char) -> Formatted {
    let (title, truncated) = match ellipsize(title, total_width) {
        Some(short) => (short, true),
        None => (title.to_string(), false),
    };
    let padding = total_width.saturating_sub(visible_width(&title));
    let fill = fill.to_string().repeat(padding);
    Formatted::new(format!("{title}{fill}"), truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{is_balanced, true_length};

    #[test]
    fn editors_line() {
        let line = format_key_value("Editors", "Cursor, Doom Emacs", 75, ":");
        let dots = ".".repeat(46);
        assert_eq!(line.text, format!(". Editors:{dots} Cursor, Doom Emacs"));
        assert_eq!(visible_width(&line.text), 75);
        assert!(!line.truncated);
    }

    #[test]
    fn single_dot_when_tight() {
        // ". K:" (4) + "." + " " + 14 = 20
        let line = format_key_value("K", "abcdefghijklmn", 20, ":");
        assert_eq!(line.text, ". K:. abcdefghijklmn");
        assert!(!line.truncated);
    }

    #[test]
    fn value_truncated_to_exact_width() {
        // one character too long for the tight layout above
        let line = format_key_value("K", "abcdefghijklmno", 20, ":");
        assert_eq!(line.text, ". K:. abcdefghijk...");
        assert_eq!(visible_width(&line.text), 20);
        assert!(line.truncated);
    }

    #[test]
    fn long_value_is_truncated() {
        let value = "x".repeat(200);
        let line = format_key_value("Languages", &value, 75, ":");
        assert_eq!(visible_width(&line.text), 75);
        assert!(line.text.ends_with("x..."));
        assert!(line.text.starts_with(". Languages:. "));
        assert!(line.truncated);
    }

    #[test]
    fn empty_value() {
        let line = format_key_value("Empty", "", 20, ":");
        assert_eq!(line.text, ". Empty:........... ");
        assert_eq!(visible_width(&line.text), 20);
    }

    #[test]
    fn overlong_key_is_truncated() {
        let key = "k".repeat(40);
        let line = format_key_value(&key, "v", 20, ":");
        assert_eq!(visible_width(&line.text), 20);
        assert!(line.truncated);
        assert!(line.text.contains("..."));
        assert!(line.text.ends_with(" v"));
    }

    #[test]
    fn wide_value_absorbed_by_dots() {
        let line = format_key_value("Name", "张三", 20, "：");
        // "：" is a fullwidth colon
        assert_eq!(visible_width(&line.text), 20);
        assert_eq!(line.text, ". Name：....... 张三");
    }

    #[test]
    fn wide_value_truncation_keeps_width() {
        let value = "张".repeat(20);
        let line = format_key_value("Name", &value, 20, ":");
        assert_eq!(visible_width(&line.text), 20);
        assert!(line.truncated);
    }

    #[test]
    fn styled_value_measured_without_tags() {
        let value = r#"<tspan class="add">+12</tspan>, <tspan class="del">-3</tspan>"#;
        let line = format_styled_key_value("Lines of code", value, 75, ":");
        assert!(line.text.ends_with(value));
        assert_eq!(true_length(&line.text), 75);
        assert!(!line.truncated);
    }

    #[test]
    fn styled_value_truncated_to_single_span() {
        let value = format!(r#"<tspan class="add">{}</tspan>"#, "9".repeat(100));
        let line = format_styled_key_value("Commits", &value, 40, ":");
        assert_eq!(true_length(&line.text), 40);
        assert!(line.truncated);
        assert!(is_balanced(&line.text));
        assert!(line.text.contains(r#"<tspan class="value">"#));
        assert!(!line.text.contains(r#"class="add""#));
    }

    #[test]
    fn styled_key_is_escaped() {
        let line = format_styled_key_value("R&D", "yes", 20, ":");
        assert!(line.text.starts_with(r#". <tspan class="key">R&amp;D</tspan>:"#));
        assert_eq!(true_length(&line.text), 20);
    }

    #[test]
    fn section_header_fills_width() {
        let line = format_section_header("— GitHub Statistics ", 75, '—');
        assert_eq!(visible_width(&line.text), 75);
        assert_eq!(line.text.chars().count(), 75);
        assert!(line.text.starts_with("— GitHub Statistics ——"));
        assert!(!line.truncated);
    }

    #[test]
    fn section_header_exact_fit() {
        let line = format_section_header("0123456789", 10, '=');
        assert_eq!(line.text, "0123456789");
    }

    #[test]
    fn section_header_overlong_title() {
        let line = format_section_header(&"T".repeat(30), 20, '—');
        assert_eq!(line.text, format!("{}...", "T".repeat(17)));
        assert!(line.truncated);
    }
}
