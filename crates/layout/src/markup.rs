//! Inline-markup handling: true length measurement and safe truncation.
//!
//! Values handed to the layout engine may already carry `<tspan>` styling,
//! e.g. `<tspan class="add">+12</tspan>, <tspan class="del">-3</tspan>`.
//! Measuring or cutting such a value by its raw characters would count tag
//! text and could split a tag in half. Everything here works on the visible
//! text instead.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::metrics::{ellipsize, visible_width};

/// CSS class of key labels.
pub const KEY_CLASS: &str = "key";

/// CSS class of plain values.
pub const VALUE_CLASS: &str = "value";

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is a valid regex"));

static ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(?P<close>/?)(?P<name>[A-Za-z][\w:.-]*)[^>]*?(?P<slash>/?)>")
        .expect("element pattern is a valid regex")
});

/// Removes every tag, leaving entity-encoded text.
#[must_use]
pub fn strip(markup: &str) -> Cow<'_, str> {
    TAG.replace_all(markup, "")
}

/// Decodes the five predefined XML entities.
#[must_use]
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Escapes text for use as SVG text content.
///
/// # Examples
///
/// ```
/// use termcard_layout::markup::escape;
///
/// assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
/// ```
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    )
}

/// The visible text of a markup value: tags removed, entities decoded.
#[must_use]
pub fn plain_text(markup: &str) -> String {
    unescape(&strip(markup))
}

/// Visible width of a markup value.
///
/// # Examples
///
/// ```
/// use termcard_layout::markup::true_length;
///
/// let value = r#"<tspan class="add">+12</tspan>, <tspan class="del">-3</tspan>"#;
/// assert_eq!(true_length(value), 7);
/// assert_eq!(true_length("Q&amp;A"), 3);
/// ```
#[must_use]
pub fn true_length(markup: &str) -> usize {
    visible_width(&plain_text(markup))
}

/// Wraps escaped text in a `<tspan>` of the given class.
#[must_use]
pub fn span(class: &str, text: &str) -> String {
    format!(r#"<tspan class="{class}">{}</tspan>"#, escape(text))
}

/// Wraps text in a value span.
#[must_use]
pub fn value_span(text: &str) -> String {
    span(VALUE_CLASS, text)
}

/// Wraps text in a key span.
#[must_use]
pub fn key_span(text: &str) -> String {
    span(KEY_CLASS, text)
}

/// Fits a markup value into `available` columns.
///
/// A value that fits is returned untouched (borrowed). Otherwise its visible
/// text is cut to `available - 3` columns plus `...` and re-wrapped as a
/// single value span, so the result is always balanced markup. Original
/// styling of a truncated value is not preserved.
///
/// # Examples
///
/// ```
/// use termcard_layout::markup::{truncate, true_length};
///
/// let value = r#"<tspan class="add">+123456</tspan>, <tspan class="del">-654321</tspan>"#;
/// let cut = truncate(value, 10);
/// assert_eq!(cut, r#"<tspan class="value">+123456...</tspan>"#);
/// assert_eq!(true_length(&cut), 10);
/// ```
#[must_use]
pub fn truncate(markup: &str, available: usize) -> Cow<'_, str> {
    let length = true_length(markup);
    if length <= available {
        return Cow::Borrowed(markup);
    }

    let plain = plain_text(markup);
    let cut = ellipsize(&plain, available).unwrap_or(plain);
    debug!(length, available, "truncated markup value");
    Cow::Owned(value_span(&cut))
}

/// Checks that every opened element is closed in order and no stray angle
/// bracket is left in the text.
#[must_use]
pub fn is_balanced(markup: &str) -> bool {
    let mut open = Vec::new();
    for caps in ELEMENT.captures_iter(markup) {
        let name = caps.name("name").map_or("", |m| m.as_str());
        let closing = caps.name("close").is_some_and(|m| !m.is_empty());
        let self_closing = caps.name("slash").is_some_and(|m| !m.is_empty());

        if closing {
            if open.pop() != Some(name) {
                return false;
            }
        } else if !self_closing {
            open.push(name);
        }
    }
    open.is_empty() && !strip(markup).contains(['<', '>'])
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLED: &str = r#"<tspan class="add">+123456</tspan>, <tspan class="del">-654321</tspan>"#;

    #[test]
    fn true_length_ignores_tags() {
        assert_eq!(true_length(STYLED), 16);
        assert_eq!(true_length("plain"), 5);
        assert_eq!(true_length(""), 0);
    }

    #[test]
    fn true_length_decodes_entities() {
        assert_eq!(true_length("&lt;tag&gt;"), 5);
        assert_eq!(true_length("&quot;x&apos;"), 3);
        assert_eq!(true_length(r#"<tspan class="value">a &amp; b</tspan>"#), 5);
    }

    #[test]
    fn unescape_does_not_double_decode() {
        assert_eq!(unescape("&amp;lt;"), "&lt;");
    }

    #[test]
    fn escape_borrows_clean_text() {
        assert!(matches!(escape("Rust"), Cow::Borrowed("Rust")));
        assert_eq!(escape("<b>"), "&lt;b&gt;");
    }

    #[test]
    fn span_escapes_content() {
        assert_eq!(
            span("cc", "C & C++"),
            r#"<tspan class="cc">C &amp; C++</tspan>"#
        );
    }

    #[test]
    fn truncate_keeps_fitting_value() {
        assert!(matches!(truncate(STYLED, 16), Cow::Borrowed(_)));
        assert!(matches!(truncate(STYLED, 40), Cow::Borrowed(_)));
    }

    #[test]
    fn truncate_rewraps_visible_text() {
        let cut = truncate(STYLED, 10);
        assert_eq!(cut, r#"<tspan class="value">+123456...</tspan>"#);
        assert_eq!(true_length(&cut), 10);
        assert!(is_balanced(&cut));
    }

    #[test]
    fn truncate_escapes_decoded_entities() {
        let cut = truncate("R&amp;D &lt;lab&gt; rocks", 8);
        assert_eq!(cut, r#"<tspan class="value">R&amp;D &lt;...</tspan>"#);
        assert_eq!(true_length(&cut), 8);
    }

    #[test]
    fn balanced_markup() {
        assert!(is_balanced(STYLED));
        assert!(is_balanced("no markup at all"));
        assert!(is_balanced(r#"<tspan class="a"><tspan class="b">x</tspan></tspan>"#));
        assert!(is_balanced(r#"<tspan class="a/b">x</tspan>"#));
        assert!(is_balanced("<br/>"));
    }

    #[test]
    fn unbalanced_markup() {
        assert!(!is_balanced(r#"<tspan class="a">x"#));
        assert!(!is_balanced("x</tspan>"));
        assert!(!is_balanced(r#"<tspan class="a"><text>x</tspan></text>"#));
        assert!(!is_balanced(r#"<tspan class="a">x</tsp"#));
        assert!(!is_balanced("1 > 0"));
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn styled_value() -> impl Strategy<Value = String> {
        prop::collection::vec(("[a-z]{1,6}", "[ -~]{0,12}"), 1..5).prop_map(|parts| {
            parts
                .iter()
                .map(|(class, text)| span(class, text))
                .collect::<Vec<_>>()
                .join(", ")
        })
    }

    proptest! {
        /// Truncated markup is balanced, parses as XML and fits its budget.
        #[test]
        fn truncation_is_markup_safe(value in styled_value(), available in 3usize..40) {
            let cut = truncate(&value, available);
            prop_assert!(is_balanced(&cut));
            prop_assert!(true_length(&cut) <= available);

            let document = format!("<text>{cut}</text>");
            prop_assert!(roxmltree::Document::parse(&document).is_ok());
        }

        /// Spans built from arbitrary text measure as that text.
        #[test]
        fn span_true_length_matches_text(text in "\\PC{0,30}") {
            prop_assert_eq!(true_length(&value_span(&text)), visible_width(&text));
        }
    }
}
