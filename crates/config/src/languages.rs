//! Language display colours.
//!
//! GitHub usually reports a colour with each language; this table is the
//! fallback used when it does not. Entries from the configuration file are
//! merged over the built-in table.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Colour used when a language is unknown everywhere.
pub const FALLBACK_COLOR: &str = "#000000";

const BUILTIN_COLORS: &[(&str, &str)] = &[
    ("ActionScript", "#882B0F"),
    ("Ada", "#02f88c"),
    ("Assembly", "#6E4C13"),
    ("Batchfile", "#C1F12E"),
    ("C", "#555555"),
    ("C#", "#239120"),
    ("C++", "#f34b7d"),
    ("CMake", "#DA3434"),
    ("COBOL", "#005590"),
    ("CSS", "#1572B6"),
    ("Chapel", "#8dc63f"),
    ("Clojure", "#db5855"),
    ("CoffeeScript", "#244776"),
    ("Crystal", "#000100"),
    ("D", "#ba595e"),
    ("Dart", "#00B4AB"),
    ("Dockerfile", "#384d54"),
    ("Elixir", "#6e4a7e"),
    ("Elm", "#60B5CC"),
    ("Erlang", "#B83998"),
    ("F#", "#b845fc"),
    ("Fortran", "#4d41b1"),
    ("Go", "#00ADD8"),
    ("Groovy", "#e69f56"),
    ("HTML", "#e34c26"),
    ("Haskell", "#5e5086"),
    ("JSON", "#292929"),
    ("Java", "#b07219"),
    ("JavaScript", "#f1e05a"),
    ("Julia", "#a270ba"),
    ("Jupyter Notebook", "#DA5B0B"),
    ("Kotlin", "#F18E33"),
    ("LiveScript", "#499886"),
    ("Lua", "#000080"),
    ("MATLAB", "#e16737"),
    ("Makefile", "#427819"),
    ("Markdown", "#083fa1"),
    ("Nim", "#ffc200"),
    ("Nix", "#7e7eff"),
    ("OCaml", "#3be133"),
    ("Objective-C", "#438eff"),
    ("PHP", "#4F5D95"),
    ("Perl", "#0298c3"),
    ("Pike", "#005390"),
    ("PowerShell", "#012456"),
    ("PureScript", "#1D222D"),
    ("Python", "#3572A5"),
    ("R", "#198CE7"),
    ("Racket", "#3c5caa"),
    ("React", "#61dafb"),
    ("Ruby", "#701516"),
    ("Rust", "#dea584"),
    ("Scala", "#c22d40"),
    ("Shell", "#89e051"),
    ("Smalltalk", "#596706"),
    ("Standard ML", "#dc566d"),
    ("Swift", "#ffac45"),
    ("TeX", "#3D6117"),
    ("TypeScript", "#2b7489"),
    ("V", "#4f87c4"),
    ("Vim script", "#199f4b"),
    ("Vue", "#2c3e50"),
    ("YAML", "#cb171e"),
    ("Zig", "#ec915c"),
];

/// Mapping from language name to display colour.
///
/// # Examples
///
/// ```
/// use termcard_config::LanguageColors;
///
/// let colors = LanguageColors::default();
/// assert_eq!(colors.get("Rust"), Some("#dea584"));
/// assert_eq!(colors.resolve("Brainfuck"), "#000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageColors {
    colors: BTreeMap<String, String>,
}

impl Default for LanguageColors {
    fn default() -> Self {
        Self {
            colors: BUILTIN_COLORS
                .iter()
                .map(|(name, color)| ((*name).to_string(), (*color).to_string()))
                .collect(),
        }
    }
}

impl LanguageColors {
    /// Creates an empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// Returns the built-in table with `overrides` applied on top.
    #[must_use]
    pub fn with_overrides(overrides: BTreeMap<String, String>) -> Self {
        let mut colors = Self::default();
        colors.colors.extend(overrides);
        colors
    }

    /// Sets the colour of a language.
    pub fn insert(&mut self, language: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(language.into(), color.into());
    }

    /// Returns the colour of a language, if known.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&str> {
        self.colors.get(language).map(String::as_str)
    }

    /// Returns the colour of a language or [`FALLBACK_COLOR`].
    #[must_use]
    pub fn resolve(&self, language: &str) -> &str {
        self.get(language).unwrap_or(FALLBACK_COLOR)
    }

    /// Number of known languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if no colours are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<'de> Deserialize<'de> for LanguageColors {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let overrides = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(Self::with_overrides(overrides))
    }
}
