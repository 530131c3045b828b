//! The layout engine: content lines in, rendered lines out.

use termcard_config::{ConfigError, LayoutConfig};
use termcard_protocol::{ContentLine, LineKind, RenderedLine};
use tracing::{debug, instrument, warn};

use crate::markup::{escape, key_span, span, value_span};
use crate::metrics::char_width;
use crate::{bio, header, line};

/// CSS class of section header lines.
pub const SECTION_CLASS: &str = "separator";

/// Lays out card content at a fixed column width.
///
/// The configuration is validated once on construction, so rendering itself
/// cannot fail. Lines that had to be shortened are flagged with
/// [`RenderedLine::truncated`] and logged at debug level.
///
/// # Examples
///
/// ```
/// use termcard_config::LayoutConfig;
/// use termcard_layout::LayoutEngine;
/// use termcard_protocol::ContentLine;
///
/// let engine = LayoutEngine::new(LayoutConfig::default()).unwrap();
/// let lines = engine.render(&[ContentLine::key_value("OS", "Linux")]);
/// assert_eq!(lines.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Creates an engine after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLayout`] if the configuration cannot
    /// produce well-formed lines, including a section fill character that is
    /// not exactly one column wide.
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if char_width(config.section_fill) != 1 {
            return Err(ConfigError::InvalidLayout {
                reason: format!(
                    "section_fill {:?} must be a single-column character",
                    config.section_fill
                ),
            });
        }
        Ok(Self { config })
    }

    /// The configuration this engine lays out with.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Renders content lines in order.
    ///
    /// A bio may expand into several lines; gaps are passed through.
    /// [`ContentLine::BioOverflow`] is produced by the engine itself and is
    /// skipped if supplied as input.
    #[instrument(skip_all, fields(lines = lines.len(), width = self.config.total_width))]
    pub fn render(&self, lines: &[ContentLine]) -> Vec<RenderedLine> {
        let mut rendered = Vec::with_capacity(lines.len());
        for content in lines {
            self.render_line(content, &mut rendered);
        }

        let truncated = rendered.iter().filter(|l| l.truncated).count();
        debug!(rendered = rendered.len(), truncated, "laid out card content");
        rendered
    }

    fn render_line(&self, content: &ContentLine, out: &mut Vec<RenderedLine>) {
        let width = self.config.total_width;
        match content {
            ContentLine::Header { name, handle } => {
                let formatted = header::format(name, handle, width);
                out.push(RenderedLine::new(
                    LineKind::Header,
                    escape(&formatted.text),
                    formatted.truncated,
                ));
            }
            ContentLine::KeyValue { key, value } => {
                let formatted =
                    line::format_styled_key_value(key, value, width, &self.config.separator);
                out.push(RenderedLine::new(
                    LineKind::KeyValue,
                    formatted.text,
                    formatted.truncated,
                ));
            }
            ContentLine::Gap => out.push(RenderedLine::gap()),
            ContentLine::SectionHeader { title } => {
                let formatted =
                    line::format_section_header(title, width, self.config.section_fill);
                out.push(RenderedLine::new(
                    LineKind::SectionHeader,
                    span(SECTION_CLASS, &formatted.text),
                    formatted.truncated,
                ));
            }
            ContentLine::Bio { text } => self.render_bio(text, out),
            ContentLine::BioOverflow { text } => {
                warn!(text = %text, "ignoring bio overflow line supplied as input");
            }
        }
    }

    fn render_bio(&self, text: &str, out: &mut Vec<RenderedLine>) {
        let layout = bio::wrap(
            text,
            self.config.total_width,
            self.config.min_dots,
            self.config.max_lines,
            self.config.overflow_line_width,
        );

        let dots = ".".repeat(layout.dots);
        let mut markup = format!(". {}:{dots}", key_span("Bio"));
        if !layout.text.is_empty() {
            markup.push(' ');
            markup.push_str(&value_span(&layout.text));
        }

        out.push(RenderedLine::new(
            LineKind::Bio {
                text_column: layout.text_column(),
            },
            markup,
            layout.truncated,
        ));
        out.extend(
            layout
                .overflow
                .iter()
                .map(|text| RenderedLine::new(LineKind::BioOverflow, value_span(text), false)),
        );
    }
}

/// Validates `config` and lays out `lines` in one go.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLayout`] for an unusable configuration; see
/// [`LayoutEngine::new`].
pub fn layout(lines: &[ContentLine], config: &LayoutConfig) -> Result<Vec<RenderedLine>, ConfigError> {
    Ok(LayoutEngine::new(config.clone())?.render(lines))
}
