//! The card title line.
//!
//! ```text
//! Ada Lovelace -—- @ada -—————————————————————————————————————————————————-—-
//! ```
//!
//! The fill between the handle and the closing `—-—-` stretches so the line
//! is exactly the card width, whatever mix of narrow and wide characters the
//! display name contains.

use termcard_config::layout::HEADER_TEMPLATE_WIDTH;
use tracing::debug;

use crate::line::Formatted;
use crate::metrics::{clean, ellipsize, visible_width};

/// Closing decoration of the header.
const HEADER_END: &str = "—-—-";

/// Fill between the handle and [`HEADER_END`].
const HEADER_FILL: char = '—';

fn handle_part(handle: &str) -> String {
    format!(" -—- @{handle} -")
}

/// Formats the header line for `display_name` and `handle`.
///
/// Invisible characters are removed from the name. A name too wide for the
/// space left by the handle and decorations is ellipsized. If the handle
/// alone leaves no room, the name is dropped and the handle ellipsized.
///
/// # Examples
///
/// ```
/// use termcard_layout::header::format;
///
/// let line = format("Ada", "ada", 24);
/// assert_eq!(line.text, "Ada -—- @ada -———————-—-");
/// ```
#[must_use]
pub fn format(display_name: &str, handle: &str, total_width: usize) -> Formatted {
    let mut truncated = false;

    let max_handle = total_width.saturating_sub(HEADER_TEMPLATE_WIDTH);
    let (name, handle) = if visible_width(handle) > max_handle {
        debug!(handle, total_width, "handle too wide for header, dropping name");
        truncated = true;
        let short = ellipsize(handle, max_handle).unwrap_or_else(|| handle.to_string());
        (String::new(), short)
    } else {
        (clean(display_name).into_owned(), handle.to_string())
    };

    let start_tail = handle_part(&handle);
    let fixed = visible_width(&start_tail) + visible_width(HEADER_END);
    let available = total_width.saturating_sub(fixed);

    let name = match ellipsize(&name, available) {
        Some(short) => {
            debug!(name = %name, available, "display name truncated");
            truncated = true;
            short
        }
        None => name,
    };

    let used = visible_width(&name) + fixed;
    let fill = HEADER_FILL.to_string().repeat(total_width.saturating_sub(used));
    Formatted {
        text: format!("{name}{start_tail}{fill}{HEADER_END}"),
        truncated,
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The header is exactly the card width for any name.
        #[test]
        fn header_exact_width(
            name in "\\PC{0,60}",
            handle in "[a-z0-9-]{1,39}",
            total_width in 16usize..120,
        ) {
            let line = format(&name, &handle, total_width);
            prop_assert_eq!(visible_width(&line.text), total_width);
        }
    }
}
