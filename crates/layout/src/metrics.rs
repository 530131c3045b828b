//! Visible-width measurement of Unicode text.
//!
//! A monospace column model: invisible characters (format characters,
//! nonspacing and enclosing marks, zero-width and bidi controls) take no
//! column, East Asian Wide and Fullwidth characters take two, everything else
//! takes one.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use termcard_config::layout::ELLIPSIS_WIDTH;
use unicode_width::UnicodeWidthChar;

/// Appended to text that was shortened to fit its budget.
pub const ELLIPSIS: &str = "...";

/// Characters that occupy no column. The explicit code points are all `Cf`
/// already; they are listed so the set stays fixed across Unicode versions.
static INVISIBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Cf}\p{Mn}\p{Me}\x{200B}-\x{200D}\x{2060}\x{FEFF}\x{202A}-\x{202E}]")
        .expect("invisible character class is a valid regex")
});

/// Removes invisible characters.
///
/// Returns the input unchanged (borrowed) when there is nothing to strip.
///
/// # Examples
///
/// ```
/// use termcard_layout::metrics::clean;
///
/// assert_eq!(clean("Ada\u{200B} Lovelace\u{FEFF}"), "Ada Lovelace");
/// ```
#[must_use]
pub fn clean(text: &str) -> Cow<'_, str> {
    INVISIBLE.replace_all(text, "")
}

/// Columns taken by a single visible character: 2 for wide, otherwise 1.
///
/// Control characters have no defined width and count as one column.
#[must_use]
pub fn char_width(c: char) -> usize {
    match c.width() {
        Some(2) => 2,
        _ => 1,
    }
}

/// Returns the number of columns `text` occupies.
///
/// # Examples
///
/// ```
/// use termcard_layout::metrics::visible_width;
///
/// assert_eq!(visible_width("hello"), 5);
/// assert_eq!(visible_width("张三"), 4);
/// assert_eq!(visible_width("e\u{301}"), 1);
/// ```
#[must_use]
pub fn visible_width(text: &str) -> usize {
    clean(text).chars().map(char_width).sum()
}

/// Shortens `text` to at most `budget` columns, ending in [`ELLIPSIS`].
///
/// Returns `None` when the text already fits. Characters are kept while they
/// and the ellipsis fit; a budget narrower than the ellipsis yields that many
/// dots. Invisible characters are dropped from shortened output.
///
/// # Examples
///
/// ```
/// use termcard_layout::metrics::ellipsize;
///
/// assert_eq!(ellipsize("short", 10), None);
/// assert_eq!(ellipsize("a rather long value", 10).as_deref(), Some("a rathe..."));
/// assert_eq!(ellipsize("张三李四", 6).as_deref(), Some("张..."));
/// ```
#[must_use]
pub fn ellipsize(text: &str, budget: usize) -> Option<String> {
    if visible_width(text) <= budget {
        return None;
    }

    if budget < ELLIPSIS_WIDTH {
        return Some(".".repeat(budget));
    }

    let limit = budget - ELLIPSIS_WIDTH;
    let mut out = String::new();
    let mut width = 0;
    for c in clean(text).chars() {
        let w = char_width(c);
        if width + w > limit {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push_str(ELLIPSIS);
    Some(out)
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Plain printable ASCII measures one column per byte.
        #[test]
        fn ascii_width_equals_len(s in "[ -~]{0,120}") {
            prop_assert_eq!(visible_width(&s), s.len());
        }

        /// Measuring cleaned text gives the same width as the original.
        #[test]
        fn width_is_stable_under_cleaning(s in "\\PC{0,60}") {
            let cleaned = clean(&s).into_owned();
            prop_assert_eq!(visible_width(&cleaned), visible_width(&s));
        }

        /// Shortened text never exceeds the budget and keeps its ellipsis.
        #[test]
        fn ellipsize_respects_budget(s in "\\PC{0,80}", budget in 3usize..60) {
            if let Some(cut) = ellipsize(&s, budget) {
                prop_assert!(visible_width(&cut) <= budget);
                prop_assert!(cut.ends_with(ELLIPSIS));
            }
        }
    }
}
