//! Colour palettes for the dark and light documents.
//!
//! | Role | Dark | Light |
//! |------|------|-------|
//! | background | `#0d1117` | `#f6f8fa` |
//! | text | `#c9d1d9` | `#24292f` |
//! | key | `#ffa657` | `#953800` |
//! | value | `#a5d6ff` | `#0a3069` |

use std::fmt;

/// A document colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// GitHub dark.
    Dark,
    /// GitHub light.
    Light,
}

/// Resolved colours of a [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub addition: &'static str,
    pub deletion: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub purple: &'static str,
    pub gray: &'static str,
    pub note: &'static str,
    pub prompt: &'static str,
    pub cursor: &'static str,
    /// Window chrome title bar.
    pub titlebar: &'static str,
    /// Window chrome title.
    pub title: &'static str,
    /// Window drop shadow.
    pub shadow: &'static str,
}

const DARK: Palette = Palette {
    background: "#0d1117",
    text: "#c9d1d9",
    key: "#ffa657",
    value: "#a5d6ff",
    addition: "#3fb950",
    deletion: "#f85149",
    green: "#238636",
    red: "#da3633",
    purple: "#8b5cf6",
    gray: "#6e7681",
    note: "#7c3aed",
    prompt: "#39d353",
    cursor: "#f0f6fc",
    titlebar: "#2c2c2e",
    title: "#ffffff",
    shadow: "#000000",
};

const LIGHT: Palette = Palette {
    background: "#f6f8fa",
    text: "#24292f",
    key: "#953800",
    value: "#0a3069",
    addition: "#1a7f37",
    deletion: "#cf222e",
    green: "#1a7f37",
    red: "#cf222e",
    purple: "#7c3aed",
    gray: "#656d76",
    note: "#7c3aed",
    prompt: "#1a7f37",
    cursor: "#24292f",
    titlebar: "#e5e5e7",
    title: "#1d1d1f",
    shadow: "#00000040",
};

impl Theme {
    /// Both themes, dark first.
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    /// Returns the colours of this theme.
    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
        }
    }

    /// Returns the lowercase theme name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(p: &Palette) -> [&'static str; 16] {
        [
            p.background, p.text, p.key, p.value, p.addition, p.deletion, p.green, p.red,
            p.purple, p.gray, p.note, p.prompt, p.cursor, p.titlebar, p.title, p.shadow,
        ]
    }

    #[test]
    fn palettes_are_hex_colors() {
        for theme in Theme::ALL {
            for color in colors(theme.palette()) {
                assert!(color.starts_with('#'), "{theme}: {color}");
                assert!(matches!(color.len(), 7 | 9), "{theme}: {color}");
                assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }

    #[test]
    fn themes_differ() {
        assert_ne!(Theme::Dark.palette(), Theme::Light.palette());
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.name(), "light");
    }
}
