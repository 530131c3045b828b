//! Shared protocol types for the termcard application.
//!
//! This crate defines the types exchanged between the termcard components:
//! the card content handed to the layout engine, the lines it produces, and
//! the profile statistics gathered from GitHub.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`content`]: `ContentLine` input variants and the `RenderedLine` output
//! - [`stats`]: User profile, language statistics, and percentage breakdowns
//!
//! # Examples
//!
//! Describing a card body:
//!
//! ```
//! use termcard_protocol::ContentLine;
//!
//! let lines = vec![
//!     ContentLine::bio("Building things in Rust."),
//!     ContentLine::key_value("OS", "macOS"),
//!     ContentLine::Gap,
//!     ContentLine::section("Contact"),
//!     ContentLine::key_value("Email", "hi@example.dev"),
//! ];
//! assert_eq!(lines.len(), 5);
//! ```

pub mod content;
pub mod stats;

// Re-export primary types at crate root for convenience
pub use content::{ContentLine, LineKind, RenderedLine, SECTION_LEAD};
pub use stats::{LanguageShare, LanguageStat, ProfileStats, UserProfile};
