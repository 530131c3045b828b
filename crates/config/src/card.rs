//! Card content definition with flexible parsing.
//!
//! The card body is configured as an ordered list of [`CardItem`]s. Each
//! item accepts a short string form or a full object form:
//!
//! ```json5
//! {
//!   "card": [
//!     "bio",                                   // GitHub bio
//!     { "bio": "Custom bio text" },            // fixed bio
//!     "uptime",                                // account age
//!     { "key": "OS", "value": "macOS" },
//!     "gap",
//!     { "section": "GitHub Statistics" },
//!     "repository", "commits", "issues", "pull_requests",
//!   ]
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use termcard_config::{CardItem, StatKind};
//!
//! let item: CardItem = serde_json::from_str(r#""commits""#).unwrap();
//! assert_eq!(item, CardItem::Stat(StatKind::Commits));
//!
//! let item: CardItem = serde_json::from_str(r#"{"key": "OS", "value": "macOS"}"#).unwrap();
//! assert_eq!(item, CardItem::key_value("OS", "macOS"));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConfigError, Result};

/// A statistic filled in from the fetched profile data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    /// Owned and contributed repositories, stars and followers.
    Repository,
    /// Total commits across the fetched years.
    Commits,
    /// Open and closed issues.
    Issues,
    /// Open, draft, merged and closed pull requests.
    PullRequests,
    /// Account age in years, months and days.
    Uptime,
}

impl StatKind {
    /// Every statistic, in the order the default card shows them.
    pub const ALL: [StatKind; 5] = [
        StatKind::Uptime,
        StatKind::Repository,
        StatKind::Commits,
        StatKind::Issues,
        StatKind::PullRequests,
    ];

    /// Returns the configuration name of the statistic.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Repository => "repository",
            Self::Commits => "commits",
            Self::Issues => "issues",
            Self::PullRequests => "pull_requests",
            Self::Uptime => "uptime",
        }
    }

    /// Returns the label shown on the card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Repository => "Repository",
            Self::Commits => "Commits",
            Self::Issues => "Issues",
            Self::PullRequests => "Pull Requests",
            Self::Uptime => "Uptime",
        }
    }

    /// Parses a statistic from its configuration name.
    ///
    /// # Examples
    ///
    /// ```
    /// use termcard_config::StatKind;
    ///
    /// assert_eq!(StatKind::parse("pull_requests"), Some(StatKind::PullRequests));
    /// assert_eq!(StatKind::parse("stars"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name.trim())
    }
}

/// One configured card line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardItem {
    /// The bio line. `None` uses the GitHub profile bio.
    Bio(Option<String>),
    /// A fixed key/value line.
    KeyValue {
        /// Field label.
        key: String,
        /// Field value.
        value: String,
    },
    /// A statistic filled in from profile data.
    Stat(StatKind),
    /// A section header.
    Section(String),
    /// Vertical spacing.
    Gap,
}

impl CardItem {
    /// Creates a fixed key/value item.
    #[must_use]
    pub fn key_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::KeyValue {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parses an item from its short string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `gap`, `bio` or a statistic name.
    ///
    /// # Examples
    ///
    /// ```
    /// use termcard_config::CardItem;
    ///
    /// assert_eq!(CardItem::parse_short("gap").unwrap(), CardItem::Gap);
    /// assert!(CardItem::parse_short("nonsense").is_err());
    /// ```
    pub fn parse_short(s: &str) -> Result<Self> {
        match s.trim() {
            "gap" => Ok(Self::Gap),
            "bio" => Ok(Self::Bio(None)),
            other => StatKind::parse(other).map(Self::Stat).ok_or_else(|| {
                ConfigError::InvalidCardItem(format!(
                    "expected 'gap', 'bio' or a statistic name, got '{s}'"
                ))
            }),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::KeyValue { key, .. } if key.trim().is_empty() => Err(
                ConfigError::InvalidCardItem("key cannot be empty".to_string()),
            ),
            Self::Section(title) if title.trim().is_empty() => Err(ConfigError::InvalidCardItem(
                "section title cannot be empty".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

impl Serialize for CardItem {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            Self::Gap => serializer.serialize_str("gap"),
            Self::Bio(None) => serializer.serialize_str("bio"),
            Self::Stat(kind) => serializer.serialize_str(kind.name()),
            Self::Bio(Some(text)) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("bio", text)?;
                map.end()
            }
            Self::Section(title) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("section", title)?;
                map.end()
            }
            Self::KeyValue { key, value } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("key", key)?;
                map.serialize_entry("value", value)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for CardItem {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        struct CardItemVisitor;

        impl<'de> Visitor<'de> for CardItemVisitor {
            type Value = CardItem;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str(
                    "'gap', 'bio', a statistic name, or an object with key/value, section, bio or stat",
                )
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                CardItem::parse_short(v).map_err(de::Error::custom)
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut key: Option<String> = None;
                let mut value: Option<String> = None;
                let mut section: Option<String> = None;
                let mut bio: Option<String> = None;
                let mut stat: Option<String> = None;

                while let Some(field) = map.next_key::<String>()? {
                    let slot = match field.as_str() {
                        "key" => &mut key,
                        "value" => &mut value,
                        "section" => &mut section,
                        "bio" => &mut bio,
                        "stat" => &mut stat,
                        _ => {
                            // Ignore unknown fields for forward compatibility
                            let _: serde::de::IgnoredAny = map.next_value()?;
                            continue;
                        }
                    };
                    if slot.is_some() {
                        return Err(de::Error::custom(format!("duplicate field `{field}`")));
                    }
                    *slot = Some(map.next_value()?);
                }

                if let Some(title) = section {
                    return Ok(CardItem::Section(title));
                }
                if let Some(name) = stat {
                    return StatKind::parse(&name).map(CardItem::Stat).ok_or_else(|| {
                        de::Error::custom(format!("unknown statistic '{name}'"))
                    });
                }
                if let Some(text) = bio {
                    return Ok(CardItem::Bio(Some(text)));
                }

                let key = key.ok_or_else(|| de::Error::missing_field("key"))?;
                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                Ok(CardItem::KeyValue { key, value })
            }
        }

        deserializer.deserialize_any(CardItemVisitor)
    }
}

/// The ordered list of items making up the card body.
///
/// The default card shows the GitHub bio, the account age and a statistics
/// section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardDefinition {
    items: Vec<CardItem>,
}

impl Default for CardDefinition {
    fn default() -> Self {
        Self::new(vec![
            CardItem::Bio(None),
            CardItem::Stat(StatKind::Uptime),
            CardItem::Gap,
            CardItem::Section("GitHub Statistics".to_string()),
            CardItem::Stat(StatKind::Repository),
            CardItem::Stat(StatKind::Commits),
            CardItem::Stat(StatKind::Issues),
            CardItem::Stat(StatKind::PullRequests),
        ])
    }
}

impl CardDefinition {
    /// Creates a card from a list of items.
    #[must_use]
    pub fn new(items: Vec<CardItem>) -> Self {
        Self { items }
    }

    /// Returns the configured items.
    #[must_use]
    pub fn items(&self) -> &[CardItem] {
        &self.items
    }

    /// Validates every item.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCardItem`] for empty keys or section titles.
    pub fn validate(&self) -> Result<()> {
        self.items.iter().try_for_each(CardItem::validate)
    }
}
