//! Document assembly for termcard.
//!
//! This crate turns fetched [`ProfileStats`] into the final SVG documents:
//! it builds the card content, hands it to the layout engine, and positions
//! the laid-out lines next to the ASCII art, followed by the language bar,
//! notes and prompt.
//!
//! # Overview
//!
//! - [`content`]: card content from the configured items and the statistics
//! - [`svg`]: document assembly, geometry constants, and file output
//! - [`theme`]: dark and light colour palettes
//! - [`window`]: optional macOS-style window chrome
//! - [`error`]: error types for rendering
//!
//! # Examples
//!
//! ```
//! use termcard_config::{CardDefinition, LayoutConfig};
//! use termcard_protocol::ProfileStats;
//! use termcard_render::{RenderOptions, Theme, render_card};
//!
//! let svg = render_card(
//!     &LayoutConfig::default(),
//!     &CardDefinition::default(),
//!     &ProfileStats::default(),
//!     &RenderOptions::new(Theme::Dark),
//! )?;
//! assert!(svg.starts_with("<?xml"));
//! # Ok::<(), termcard_render::RenderError>(())
//! ```

pub mod content;
pub mod error;
pub mod svg;
pub mod theme;
pub mod window;

use termcard_config::{CardDefinition, LayoutConfig};
use termcard_layout::LayoutEngine;
use termcard_protocol::ProfileStats;
use tracing::debug;

pub use content::build_content;
pub use error::{RenderError, Result};
pub use svg::{RenderOptions, render_svg, save};
pub use theme::Theme;
pub use window::wrap_in_window;

/// Builds, lays out and assembles a complete card document.
///
/// # Errors
///
/// Returns [`RenderError::Layout`] if `layout` is rejected by the engine.
pub fn render_card(
    layout: &LayoutConfig,
    card: &CardDefinition,
    stats: &ProfileStats,
    options: &RenderOptions,
) -> Result<String> {
    let engine = LayoutEngine::new(layout.clone())?;
    let content = build_content(card, stats, options.generated_at);
    let lines = engine.render(&content);

    let truncated = lines.iter().filter(|line| line.truncated).count();
    if truncated > 0 {
        debug!(truncated, "some card lines were shortened to fit");
    }

    Ok(render_svg(&lines, stats, options))
}
