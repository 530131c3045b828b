//! macOS-style window chrome.
//!
//! The card is placed below a 28px title bar with traffic lights and a
//! centred title, and gets a rounded bottom edge in its background colour.

use std::fmt::Write as _;

use termcard_layout::markup::escape;

use crate::svg::{Canvas, SVG_WIDTH};
use crate::theme::Theme;

const TITLEBAR_HEIGHT: u32 = 28;
const BOTTOM_PADDING: u32 = 28;
const LIGHT_SIZE: u32 = 12;
const LIGHT_SPACING: u32 = 8;
const LIGHT_COLORS: [&str; 3] = ["#ff5f57", "#ffbd2e", "#28ca42"];

/// Wraps `canvas` in window chrome titled after `login`.
///
/// # Examples
///
/// ```
/// use termcard_render::svg::Canvas;
/// use termcard_render::{Theme, wrap_in_window};
///
/// let canvas = Canvas { height: 300, background: "#0d1117", body: String::new() };
/// let svg = wrap_in_window(&canvas, Theme::Dark, "octocat");
/// assert!(svg.contains(r#"height="356px""#));
/// assert!(svg.contains("Profile — octocat@github.com"));
/// ```
#[must_use]
pub fn wrap_in_window(canvas: &Canvas, theme: Theme, login: &str) -> String {
    let p = theme.palette();
    let width = SVG_WIDTH;
    let height = canvas.height + TITLEBAR_HEIGHT + BOTTOM_PADDING;
    let half = TITLEBAR_HEIGHT / 2;
    let bottom = TITLEBAR_HEIGHT + canvas.height;

    let mut out = String::with_capacity(canvas.body.len() + 2048);
    let _ = write!(
        &mut out,
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg" font-family="'Monaspace Krypton',monospace" width="{width}px" height="{height}px" font-size="14px">
<defs>
    <filter id="window-shadow" x="-20%" y="-20%" width="140%" height="140%">
        <feDropShadow dx="0" dy="8" stdDeviation="16" flood-color="{shadow}" flood-opacity="0.3"/>
    </filter>
    <linearGradient id="titlebar-gradient" x1="0%" y1="0%" x2="0%" y2="100%">
        <stop offset="0%" stop-color="{bar}"/>
        <stop offset="100%" stop-color="{bar}"/>
    </linearGradient>
</defs>
<rect x="0" y="0" width="{width}" height="{TITLEBAR_HEIGHT}" rx="12" ry="12" fill="url(#titlebar-gradient)" filter="url(#window-shadow)"/>
<rect x="0" y="{half}" width="{width}" height="{half}" fill="url(#titlebar-gradient)"/>
<rect x="0" y="{bottom}" width="{width}" height="{BOTTOM_PADDING}" rx="12" ry="12" fill="{bg}"/>
<rect x="0" y="{bottom}" width="{width}" height="{}" fill="{bg}"/>"#,
        BOTTOM_PADDING / 2,
        shadow = p.shadow,
        bar = p.titlebar,
        bg = canvas.background,
    );

    let radius = LIGHT_SIZE / 2;
    for (i, color) in (0u32..).zip(LIGHT_COLORS) {
        let cx = 12 + i * (LIGHT_SIZE + LIGHT_SPACING) + radius;
        let _ = write!(
            &mut out,
            r#"
<circle cx="{cx}" cy="{half}" r="{radius}" fill="{color}"/>"#
        );
    }

    let _ = write!(
        &mut out,
        r#"
<text x="{}" y="{}" fill="{}" font-size="13px" font-weight="500" text-anchor="middle" opacity="0.8">Profile — {}@github.com</text>
<g transform="translate(0, {TITLEBAR_HEIGHT})">
"#,
        width / 2,
        half + 4,
        p.title,
        escape(login),
    );
    out.push_str(&canvas.body);
    out.push_str("\n</g>\n</svg>");
    out
}
