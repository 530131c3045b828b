//! Column budgets for the fixed-width card layout.
//!
//! This module provides the [`LayoutConfig`] type which holds every width
//! budget the layout engine works with. All budgets are expressed in
//! monospace columns; pixel geometry is the document assembler's concern.
//!
//! # Defaults
//!
//! - `total_width`: 75 columns per line
//! - `min_dots`: 8 dots on the bio line
//! - `max_lines`: 5 bio lines (first line plus 4 overflow lines)
//! - `separator`: `":"`
//! - `overflow_line_width`: 60 columns for bio continuation lines
//! - `section_fill`: `'—'`

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::error::{ConfigError, Result};

/// Default line width in columns.
pub const DEFAULT_TOTAL_WIDTH: usize = 75;

/// Default minimum number of dots on the bio line.
pub const DEFAULT_MIN_DOTS: usize = 8;

/// Default maximum number of bio lines, the first line included.
pub const DEFAULT_MAX_LINES: usize = 5;

/// Default separator between a key and its dot fill.
pub const DEFAULT_SEPARATOR: &str = ":";

/// Default width of bio continuation lines.
pub const DEFAULT_OVERFLOW_LINE_WIDTH: usize = 60;

/// Default fill character for section header lines.
pub const DEFAULT_SECTION_FILL: char = '—';

/// Width of the fixed `. Bio:` key on the bio line.
pub const BIO_KEY_WIDTH: usize = 6;

/// Width of the `...` ellipsis appended to truncated text.
pub const ELLIPSIS_WIDTH: usize = 3;

/// Width of the header template without name and handle: ` -—- @`, ` -`, `—-—-`.
pub const HEADER_TEMPLATE_WIDTH: usize = 12;

/// Narrowest overflow line that can still hold one character and an ellipsis.
pub const MIN_OVERFLOW_LINE_WIDTH: usize = ELLIPSIS_WIDTH + 1;

/// Column budgets for the card layout.
///
/// # Examples
///
/// ```
/// use termcard_config::LayoutConfig;
///
/// let config = LayoutConfig::default();
/// assert_eq!(config.total_width, 75);
/// assert!(config.validate().is_ok());
///
/// let narrow = LayoutConfig::with_width(40);
/// assert_eq!(narrow.total_width, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Width of every full line, in visible columns.
    #[serde(default = "default_total_width")]
    pub total_width: usize,

    /// Minimum dots between the bio key and its text.
    #[serde(default = "default_min_dots")]
    pub min_dots: usize,

    /// Maximum number of bio lines, the first line included.
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Text placed right after each key.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Width of bio continuation lines.
    ///
    /// Supplied by whoever owns the document geometry; the layout engine
    /// never derives it from pixel sizes.
    #[serde(default = "default_overflow_line_width")]
    pub overflow_line_width: usize,

    /// Character repeated after section titles.
    #[serde(default = "default_section_fill")]
    pub section_fill: char,
}

fn default_total_width() -> usize {
    DEFAULT_TOTAL_WIDTH
}

fn default_min_dots() -> usize {
    DEFAULT_MIN_DOTS
}

fn default_max_lines() -> usize {
    DEFAULT_MAX_LINES
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_overflow_line_width() -> usize {
    DEFAULT_OVERFLOW_LINE_WIDTH
}

fn default_section_fill() -> char {
    DEFAULT_SECTION_FILL
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            total_width: DEFAULT_TOTAL_WIDTH,
            min_dots: DEFAULT_MIN_DOTS,
            max_lines: DEFAULT_MAX_LINES,
            separator: DEFAULT_SEPARATOR.to_string(),
            overflow_line_width: DEFAULT_OVERFLOW_LINE_WIDTH,
            section_fill: DEFAULT_SECTION_FILL,
        }
    }
}

impl LayoutConfig {
    /// Creates a default layout with a different line width.
    ///
    /// # Examples
    ///
    /// ```
    /// use termcard_config::LayoutConfig;
    ///
    /// let config = LayoutConfig::with_width(50);
    /// assert_eq!(config.total_width, 50);
    /// assert_eq!(config.min_dots, 8);
    /// ```
    #[must_use]
    pub fn with_width(total_width: usize) -> Self {
        Self {
            total_width,
            ..Self::default()
        }
    }

    /// Returns the narrowest `total_width` these budgets can work with.
    ///
    /// The bound is the widest of three fixed shapes:
    ///
    /// - the header template plus an ellipsised name and a one-letter handle
    /// - `. Bio:`, the minimum dots, a space and one character
    /// - `. ` plus a one-column key, the separator, one dot, a space and an ellipsis
    ///
    /// The separator is measured in display columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use termcard_config::LayoutConfig;
    ///
    /// assert_eq!(LayoutConfig::default().minimum_total_width(), 16);
    /// ```
    #[must_use]
    pub fn minimum_total_width(&self) -> usize {
        let header = HEADER_TEMPLATE_WIDTH + ELLIPSIS_WIDTH + 1;
        let bio = BIO_KEY_WIDTH + self.min_dots + 2;
        let key_value = 2 + 1 + self.separator.width() + 2 + ELLIPSIS_WIDTH;
        header.max(bio).max(key_value)
    }

    /// Validates the layout budgets.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLayout`] if any budget would lead to
    /// negative-length or garbled lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use termcard_config::LayoutConfig;
    ///
    /// assert!(LayoutConfig::default().validate().is_ok());
    /// assert!(LayoutConfig::with_width(10).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.min_dots == 0 {
            return Err(invalid("min_dots must be at least 1".to_string()));
        }

        if self.max_lines == 0 {
            return Err(invalid("max_lines must be at least 1".to_string()));
        }

        if self.overflow_line_width < MIN_OVERFLOW_LINE_WIDTH {
            return Err(invalid(format!(
                "overflow_line_width {} is below minimum of {}",
                self.overflow_line_width, MIN_OVERFLOW_LINE_WIDTH
            )));
        }

        if self.separator.chars().any(char::is_control) {
            return Err(invalid(format!(
                "separator {:?} contains control characters",
                self.separator
            )));
        }

        if self.separator.contains(['<', '>']) {
            return Err(invalid(format!(
                "separator {:?} looks like markup",
                self.separator
            )));
        }

        if self.section_fill.is_control() || self.section_fill.is_whitespace() {
            return Err(invalid(format!(
                "section_fill {:?} must be a visible character",
                self.section_fill
            )));
        }

        let minimum = self.minimum_total_width();
        if self.total_width < minimum {
            return Err(invalid(format!(
                "total_width {} is below minimum of {} for these budgets",
                self.total_width, minimum
            )));
        }

        Ok(())
    }
}

fn invalid(reason: String) -> ConfigError {
    ConfigError::InvalidLayout { reason }
}
