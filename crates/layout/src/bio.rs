//! Bio wrapping.
//!
//! The bio is the one free-text field of a card. Its first line shares the
//! row with the `. Bio:` key and is right-aligned against the card edge;
//! whatever does not fit continues on left-aligned overflow lines under the
//! first word:
//!
//! ```text
//! . Bio:............ Building small tools for terminal people who like things
//!                    fast, quiet, and predictable.
//! ```

use termcard_config::layout::BIO_KEY_WIDTH;
use tracing::debug;

use crate::metrics::{ellipsize, visible_width};

/// The key rendered at the start of the bio line.
pub const BIO_KEY: &str = ". Bio:";

/// Result of wrapping a bio.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BioLayout {
    /// Dots between the key and the first-line text.
    pub dots: usize,
    /// First-line text (may be empty).
    pub text: String,
    /// Continuation lines, left-aligned, at most `max_lines - 1` of them.
    pub overflow: Vec<String>,
    /// Whether words were dropped or an overlong word was shortened.
    pub truncated: bool,
}

impl BioLayout {
    /// Column where the first-line text starts and overflow lines align.
    ///
    /// `None` when the first line carries no text.
    #[must_use]
    pub fn text_column(&self) -> Option<usize> {
        (!self.text.is_empty()).then(|| BIO_KEY_WIDTH + self.dots + 1)
    }

    /// Renders the first line as plain text.
    ///
    /// # Examples
    ///
    /// ```
    /// use termcard_layout::bio::wrap;
    ///
    /// let bio = wrap("Hi.", 20, 3, 5, 10);
    /// assert_eq!(bio.first_line(), ". Bio:.......... Hi.");
    /// ```
    #[must_use]
    pub fn first_line(&self) -> String {
        let dots = ".".repeat(self.dots);
        if self.text.is_empty() {
            format!("{BIO_KEY}{dots}")
        } else {
            format!("{BIO_KEY}{dots} {}", self.text)
        }
    }
}

/// Wraps `bio` for a card `total_width` columns wide.
///
/// Whitespace is normalized first: runs of spaces, tabs and newlines become a
/// single space. A bio that fits on the first line with at least `min_dots`
/// dots is right-aligned there. Otherwise the first line takes as many whole
/// words as leave `min_dots` dots, and the remaining words are packed into
/// lines of at most `overflow_line_width` columns. At most `max_lines` lines
/// are produced in total; words that do not fit are dropped. Words are never
/// split, except a single word wider than an overflow line, which is
/// ellipsized and placed on a line of its own.
///
/// # Examples
///
/// ```
/// use termcard_layout::bio::wrap;
///
/// let bio = wrap("one two three four", 20, 3, 5, 10);
/// assert_eq!(bio.text, "one two");
/// assert_eq!(bio.overflow, vec!["three four"]);
/// assert_eq!(bio.first_line().len(), 20);
/// ```
#[must_use]
pub fn wrap(
    bio: &str,
    total_width: usize,
    min_dots: usize,
    max_lines: usize,
    overflow_line_width: usize,
) -> BioLayout {
    let words: Vec<&str> = bio.split_whitespace().collect();
    let space = total_width.saturating_sub(BIO_KEY_WIDTH);

    if words.is_empty() {
        return BioLayout {
            dots: space,
            ..BioLayout::default()
        };
    }

    let text = words.join(" ");
    let text_width = visible_width(&text);
    if text_width + min_dots + 1 <= space {
        return BioLayout {
            dots: space - text_width - 1,
            text,
            ..BioLayout::default()
        };
    }

    let first_budget = space.saturating_sub(min_dots + 1);
    let mut first = Vec::new();
    let mut first_width = 0;
    for word in &words {
        let width = visible_width(word);
        let candidate = if first.is_empty() {
            width
        } else {
            first_width + 1 + width
        };
        if candidate > first_budget {
            break;
        }
        first.push(*word);
        first_width = candidate;
    }

    let dots = if first.is_empty() {
        space
    } else {
        space.saturating_sub(first_width + 1)
    };

    let rest = &words[first.len()..];
    let (overflow, truncated) = pack_lines(
        rest,
        overflow_line_width,
        max_lines.saturating_sub(1),
    );
    if truncated {
        debug!(words = words.len(), max_lines, "bio truncated to fit");
    }

    BioLayout {
        dots,
        text: first.join(" "),
        overflow,
        truncated,
    }
}

/// Greedily packs words into at most `capacity` lines of `width` columns.
///
/// Returns the lines and whether anything was dropped or shortened.
fn pack_lines(words: &[&str], width: usize, capacity: usize) -> (Vec<String>, bool) {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    let mut shortened = false;
    let mut next = 0;

    while next < words.len() && lines.len() < capacity {
        let word = words[next];
        let word_width = visible_width(word);
        let candidate = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if candidate <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = candidate;
            next += 1;
        } else if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        } else {
            // a single word wider than the line
            lines.push(ellipsize(word, width).unwrap_or_else(|| word.to_string()));
            shortened = true;
            next += 1;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    (lines, shortened || next < words.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_BIO: &str = "I build developer tools and terminal user interfaces in Rust, \
        contribute to open source projects in my spare time, write about systems \
        programming, performance engineering, and text rendering, and occasionally \
        give talks at local meetups about it all.";

    #[test]
    fn short_bio_fits_first_line() {
        let bio = wrap("Hi.", 75, 8, 5, 60);
        assert_eq!(bio.dots, 65);
        assert_eq!(bio.text, "Hi.");
        assert!(bio.overflow.is_empty());
        assert!(!bio.truncated);
        assert_eq!(bio.first_line().len(), 75);
        assert_eq!(bio.text_column(), Some(72));
    }

    #[test]
    fn empty_bio_is_all_dots() {
        let bio = wrap("", 75, 8, 5, 60);
        assert_eq!(bio.dots, 69);
        assert_eq!(bio.first_line(), format!(". Bio:{}", ".".repeat(69)));
        assert!(bio.overflow.is_empty());
        assert_eq!(bio.text_column(), None);

        assert_eq!(wrap(" \n\t ", 75, 8, 5, 60), bio);
    }

    #[test]
    fn whitespace_is_normalized() {
        let bio = wrap("  Rust\n\nand   tea\t", 75, 8, 5, 60);
        assert_eq!(bio.text, "Rust and tea");
    }

    #[test]
    fn fits_with_exactly_min_dots() {
        // space = 14, text 5 + min_dots 8 + 1 = 14
        let bio = wrap("abcde", 20, 8, 5, 10);
        assert_eq!(bio.dots, 8);
        assert!(bio.overflow.is_empty());
    }

    #[test]
    fn one_column_over_wraps() {
        let bio = wrap("abc def", 20, 8, 5, 10);
        // first budget = 14 - 9 = 5
        assert_eq!(bio.text, "abc");
        assert_eq!(bio.dots, 10);
        assert_eq!(bio.overflow, vec!["def"]);
        assert_eq!(bio.first_line().len(), 20);
    }

    #[test]
    fn long_bio_wraps() {
        let bio = wrap(LONG_BIO, 75, 8, 5, 60);

        assert_eq!(bio.first_line().len(), 75);
        assert!(bio.dots >= 8);
        assert!(!bio.overflow.is_empty());
        assert!(bio.overflow.len() <= 4);
        for line in &bio.overflow {
            assert!(line.len() <= 60, "{line:?} is too long");
        }

        let mut rebuilt = vec![bio.text.clone()];
        rebuilt.extend(bio.overflow.iter().cloned());
        let rebuilt = rebuilt.join(" ");
        assert!(LONG_BIO.starts_with(&rebuilt));
    }

    #[test]
    fn excess_words_are_dropped() {
        let bio = wrap(&"word ".repeat(200), 75, 8, 3, 60);
        assert_eq!(bio.overflow.len(), 2);
        assert!(bio.truncated);
    }

    #[test]
    fn single_line_limit_drops_overflow() {
        let bio = wrap(LONG_BIO, 75, 8, 1, 60);
        assert!(bio.overflow.is_empty());
        assert!(bio.truncated);
        assert_eq!(bio.first_line().len(), 75);
    }

    #[test]
    fn unbreakable_first_word() {
        let word = "x".repeat(100);
        let bio = wrap(&word, 75, 8, 5, 60);
        assert_eq!(bio.text, "");
        assert_eq!(bio.dots, 69);
        assert_eq!(bio.overflow, vec![format!("{}...", "x".repeat(57))]);
        assert!(bio.truncated);
    }

    #[test]
    fn overlong_word_gets_own_line() {
        let bio = wrap(&format!("tiny {} end", "y".repeat(30)), 20, 3, 5, 10);
        assert_eq!(bio.text, "tiny");
        assert_eq!(bio.overflow, vec!["yyyyyyy...".to_string(), "end".to_string()]);
        assert!(bio.truncated);
    }

    #[test]
    fn wide_characters_count_double() {
        // 10 wide characters are 20 columns, too many for a 14-column first line
        let bio = wrap("你好 世界 你好 世界 你好", 20, 3, 5, 10);
        assert_eq!(bio.text, "你好 世界");
        assert_eq!(visible_width(&bio.first_line()), 20);
        assert_eq!(bio.overflow, vec!["你好 世界".to_string(), "你好".to_string()]);
    }
}
