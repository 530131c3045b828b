//! SVG document assembly.
//!
//! The document is 1024px wide. The ASCII art sits on the left at x=25 and
//! the laid-out card on the right at x=360. Below the card come the language
//! bar, the top-language details, the notes and a shell prompt.
//!
//! The vertical cursor lives here only; the layout engine knows nothing
//! about pixels.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use termcard_layout::markup::escape;
use termcard_protocol::{LanguageShare, LineKind, ProfileStats, RenderedLine};
use tracing::{debug, info};

use crate::content::{login_text, thousands};
use crate::error::{RenderError, Result};
use crate::theme::{Palette, Theme};
use crate::window::wrap_in_window;

/// Document width in pixels.
pub const SVG_WIDTH: u32 = 1024;
/// Vertical distance between card lines.
pub const LINE_HEIGHT: u32 = 18;
/// Baseline of the title line.
pub const TOP_MARGIN: u32 = 35;
/// Bottom of the ASCII art.
pub const ASCII_HEIGHT: u32 = 258;
/// Width of the language bar.
pub const LANGUAGE_BAR_WIDTH: f64 = 560.0;
/// Languages listed below the bar.
pub const TOP_LANGUAGES: usize = 10;
/// Approximate advance of one monospace column at 14px.
pub const CHAR_WIDTH: f64 = 8.4;

const FONT_FAMILY: &str = "'Monaspace Krypton',monospace";
const FONT_IMPORT: &str =
    "https://cdn.jsdelivr.net/gh/iXORTech/webfonts@main/monaspace/krypton/krypton.css";
const ASCII_X: u32 = 25;
const MAIN_X: u32 = 360;
const HEADER_ADVANCE: u32 = 25;
const BAR_HEIGHT: u32 = 10;
const BAR_ADVANCE: u32 = 35;
const NOTES_ADVANCE: u32 = 20;
const SECOND_NOTE_ADVANCE: u32 = 15;
const PROMPT_ADVANCE: u32 = 25;
/// Fixed space below the card: bar, gaps, notes and prompt.
const FOOTER_HEIGHT: u32 = 10 + 35 + 15 + 20 + 20 + 15 + 25 + 20;

const ASCII_ART: [&str; 14] = [
    r"           ____",
    r"          /\   \",
    r"         /  \   \",
    r"        /    \   \",
    r"       /      \   \",
    r"      /   /\   \   \",
    r"     /   /  \   \   \",
    r"    /   /    \   \   \",
    r"   /   /    / \   \   \",
    r"  /   /    /   \   \   \",
    r" /   /    /---------'   \",
    r"/   /    /_______________\",
    r"\  /                     /",
    r" \/_____________________/",
];

/// How a document is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Colour scheme.
    pub theme: Theme,
    /// Wrap the card in macOS-style window chrome.
    pub macos_window: bool,
    /// Timestamp shown in the generation note.
    pub generated_at: DateTime<Utc>,
}

impl RenderOptions {
    /// Creates options for `theme` stamped with the current time.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            macos_window: false,
            generated_at: Utc::now(),
        }
    }
}

/// A rendered card body, before it is wrapped in a root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Height in pixels.
    pub height: u32,
    /// Background colour.
    pub background: &'static str,
    /// Style block and drawing elements.
    pub body: String,
}

impl Canvas {
    /// Wraps the body in a standalone `<svg>` root.
    #[must_use]
    pub fn into_document(self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        let _ = write!(
            &mut out,
            r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg" font-family="{FONT_FAMILY}" width="{SVG_WIDTH}px" height="{}px" font-size="14px">
"#,
            self.height
        );
        out.push_str(&self.body);
        out.push_str("\n</svg>");
        out
    }
}

/// Height of the document for `line_count` card lines (title, gaps and bio
/// overflow included) and `language_count` listed languages.
///
/// # Examples
///
/// ```
/// use termcard_render::svg::document_height;
///
/// // Short cards are as tall as the ASCII art.
/// assert_eq!(document_height(2, 0), 298);
/// assert_eq!(document_height(20, 10), 705);
/// ```
#[must_use]
pub fn document_height(line_count: usize, language_count: usize) -> u32 {
    let lines = u32::try_from(line_count + language_count.min(TOP_LANGUAGES)).unwrap_or(u32::MAX);
    let content = lines.saturating_mul(LINE_HEIGHT).saturating_add(FOOTER_HEIGHT);
    (ASCII_HEIGHT + TOP_MARGIN).max(content) + 5
}

/// Assembles the SVG document for laid-out `lines`.
///
/// `lines` are expected to start with the title line, as produced from
/// [`build_content`](crate::build_content).
#[must_use]
pub fn render_svg(lines: &[RenderedLine], stats: &ProfileStats, options: &RenderOptions) -> String {
    let canvas = draw(lines, stats, options);
    if options.macos_window {
        wrap_in_window(&canvas, options.theme, &stats.profile.login)
    } else {
        canvas.into_document()
    }
}

/// Draws the card body.
#[must_use]
pub fn draw(lines: &[RenderedLine], stats: &ProfileStats, options: &RenderOptions) -> Canvas {
    let palette = options.theme.palette();
    let shares = stats.language_shares();
    let height = document_height(lines.len(), shares.len());
    debug!(
        theme = %options.theme,
        lines = lines.len(),
        languages = shares.len(),
        height,
        "drawing card"
    );

    let mut out = String::new();
    push_style(&mut out, palette);
    let radius = if options.macos_window { "" } else { r#" rx="15""# };
    let _ = write!(
        &mut out,
        r#"
<rect width="{SVG_WIDTH}px" height="{height}px" fill="{}"{radius}/>"#,
        palette.background
    );
    push_ascii_art(&mut out, palette);

    let mut y = push_lines(&mut out, lines, palette);

    if !shares.is_empty() {
        push_language_bar(&mut out, &shares, y);
        y += BAR_ADVANCE;
        for share in shares.iter().take(TOP_LANGUAGES) {
            push_language_detail(&mut out, share, palette, y);
            y += LINE_HEIGHT;
        }
    }

    y += NOTES_ADVANCE;
    let stamp = options.generated_at.format("%Y-%m-%d %H:%M:%S UTC");
    push_note(&mut out, palette, y, &format!("Generated on {stamp}"));
    if stats.includes_private {
        y += SECOND_NOTE_ADVANCE;
        push_note(&mut out, palette, y, "These metrics include private contributions.");
    }

    y += PROMPT_ADVANCE;
    let _ = write!(
        &mut out,
        r#"
<text x="{ASCII_X}" y="{y}" fill="{text}" class="prompt">
<tspan x="{ASCII_X}" y="{y}" class="prompt">{login}@github.com:~$ </tspan><tspan class="cursor blinking">█</tspan>
</text>"#,
        text = palette.text,
        login = login_text(&stats.profile),
    );

    Canvas {
        height,
        background: palette.background,
        body: out,
    }
}

fn push_style(out: &mut String, p: &Palette) {
    let _ = write!(
        out,
        r#"<style>
@import url("{FONT_IMPORT}");
.key {{fill: {key}; font-weight: bold;}}
.value {{fill: {value};}}
.addColor {{fill: {add};}}
.delColor {{fill: {del};}}
.separator {{fill: {text};}}
.green {{fill: {green};}}
.red {{fill: {red};}}
.purple {{fill: {purple};}}
.gray {{fill: {gray};}}
.note {{fill: {note}; font-size: 12px;}}
.prompt {{fill: {prompt}; font-size: 14px;}}
.cursor {{fill: {cursor};}}
text, tspan {{white-space: pre;}}

@keyframes blink {{
    0%, 50% {{ opacity: 1; }}
    51%, 100% {{ opacity: 0; }}
}}

.blinking {{
    animation: blink 1s infinite;
}}
</style>"#,
        key = p.key,
        value = p.value,
        add = p.addition,
        del = p.deletion,
        text = p.text,
        green = p.green,
        red = p.red,
        purple = p.purple,
        gray = p.gray,
        note = p.note,
        prompt = p.prompt,
        cursor = p.cursor,
    );
}

fn push_ascii_art(out: &mut String, p: &Palette) {
    let _ = write!(
        out,
        r#"
<text x="{ASCII_X}" y="30" fill="{}" class="ascii">"#,
        p.text
    );
    for (row, art) in (0u32..).zip(ASCII_ART) {
        let _ = write!(
            out,
            r#"
    <tspan x="{ASCII_X}" y="{}">{}</tspan>"#,
            50 + row * 16,
            escape(art)
        );
    }
    out.push_str("\n</text>");
}

/// Emits the card lines and returns the y position below them.
fn push_lines(out: &mut String, lines: &[RenderedLine], p: &Palette) -> u32 {
    let mut y = TOP_MARGIN;
    let mut overflow_x = f64::from(MAIN_X);

    for line in lines {
        let x = match line.kind {
            LineKind::Gap => {
                y += LINE_HEIGHT;
                continue;
            }
            LineKind::Bio { text_column } => {
                overflow_x = f64::from(MAIN_X)
                    + text_column.map_or(0.0, |column| column as f64 * CHAR_WIDTH);
                format_px(f64::from(MAIN_X))
            }
            LineKind::BioOverflow => format_px(overflow_x),
            LineKind::Header | LineKind::KeyValue | LineKind::SectionHeader => {
                format_px(f64::from(MAIN_X))
            }
        };

        let _ = write!(
            out,
            r#"
<text x="{x}" y="{y}" fill="{}" font-size="14px">
<tspan x="{x}" y="{y}">{}</tspan>
</text>"#,
            p.text, line.markup
        );
        y += if line.kind == LineKind::Header {
            HEADER_ADVANCE
        } else {
            LINE_HEIGHT
        };
    }

    y
}

fn push_language_bar(out: &mut String, shares: &[LanguageShare], y: u32) {
    let _ = write!(out, r#"<g transform="translate({MAIN_X}, {y})">"#);
    let mut offset = 0.0;
    for share in shares {
        let width = share.percentage / 100.0 * LANGUAGE_BAR_WIDTH;
        if width < 1.0 {
            continue;
        }
        let _ = write!(
            out,
            r#"  <rect x="{offset:.1}" y="0" width="{width:.1}" height="{BAR_HEIGHT}" fill="{}" rx="1"/>"#,
            escape(&share.color)
        );
        offset += width;
    }
    out.push_str("</g>");
}

fn push_language_detail(out: &mut String, share: &LanguageShare, p: &Palette, y: u32) {
    let _ = write!(
        out,
        r#"
<text x="{MAIN_X}" y="{y}" fill="{}" font-size="14px">
<tspan x="{MAIN_X}" y="{y}">  <tspan style="fill:{}">●</tspan> <tspan class="key">{}</tspan>: <tspan class="value">{:.1}%</tspan> <tspan class="value">{} commits</tspan></tspan>
</text>"#,
        p.text,
        escape(&share.color),
        escape(&share.name),
        share.percentage,
        thousands(share.commits),
    );
}

fn push_note(out: &mut String, p: &Palette, y: u32, note: &str) {
    let _ = write!(
        out,
        r#"
<text x="{ASCII_X}" y="{y}" fill="{}" class="note">
<tspan x="{ASCII_X}" y="{y}" class="note">{}</tspan>
</text>"#,
        p.text,
        escape(note)
    );
}

/// Formats a pixel position without a trailing `.0`.
fn format_px(px: f64) -> String {
    let s = format!("{px:.1}");
    s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
}

/// Writes a rendered document to `path`.
///
/// # Errors
///
/// Returns [`RenderError::Write`] if the file cannot be written.
pub fn save(path: &Path, document: &str) -> Result<()> {
    std::fs::write(path, document).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = document.len(), "wrote document");
    Ok(())
}
