//! Fixed-width text layout for terminal-style profile cards.
//!
//! Each card line is exactly [`LayoutConfig::total_width`] visible columns:
//! key/value lines are padded with a run of dots, section headers with a fill
//! character, and the title line with a decorated rule. Text is measured in
//! monospace columns, so wide CJK characters count double and zero-width
//! characters not at all.
//!
//! # Overview
//!
//! - [`metrics`]: visible width of Unicode text
//! - [`markup`]: width and truncation of values carrying `<tspan>` styling
//! - [`line`]: key/value lines and section headers
//! - [`bio`]: wrapping of the free-text bio
//! - [`header`]: the title line
//! - [`engine`]: [`LayoutEngine`], which turns [`ContentLine`]s into [`RenderedLine`]s
//!
//! # Examples
//!
//! ```
//! use termcard_config::LayoutConfig;
//! use termcard_layout::{layout, markup};
//! use termcard_protocol::ContentLine;
//!
//! let lines = layout(
//!     &[
//!         ContentLine::header("Jane Doe", "janedoe"),
//!         ContentLine::key_value("Editors", "Cursor, Doom Emacs"),
//!     ],
//!     &LayoutConfig::default(),
//! )?;
//!
//! for line in &lines {
//!     assert_eq!(markup::true_length(&line.markup), 75);
//! }
//! # Ok::<(), termcard_config::ConfigError>(())
//! ```

pub mod bio;
pub mod engine;
pub mod header;
pub mod line;
pub mod markup;
pub mod metrics;

pub use engine::{LayoutEngine, layout};
pub use line::Formatted;
pub use metrics::visible_width;

#[doc(no_inline)]
pub use termcard_config::LayoutConfig;
#[doc(no_inline)]
pub use termcard_protocol::{ContentLine, RenderedLine};
