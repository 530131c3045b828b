//! Card content building.
//!
//! Turns the configured [`CardDefinition`] and the fetched [`ProfileStats`]
//! into the [`ContentLine`] sequence handed to the layout engine. The title
//! line always comes first.

use chrono::{DateTime, Utc};
use termcard_config::{CardDefinition, CardItem, StatKind};
use termcard_layout::markup::{escape, key_span, span, value_span};
use termcard_protocol::{ContentLine, ProfileStats, UserProfile};

const GREEN: &str = "green";
const RED: &str = "red";
const GRAY: &str = "gray";
const PURPLE: &str = "purple";

/// Builds the card content for `stats`.
///
/// Statistic items become inline-markup values; fixed key/value items are
/// escaped and wrapped in a value span.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use termcard_config::CardDefinition;
/// use termcard_protocol::{ContentLine, ProfileStats};
/// use termcard_render::build_content;
///
/// let lines = build_content(&CardDefinition::default(), &ProfileStats::default(), Utc::now());
/// assert!(matches!(lines[0], ContentLine::Header { .. }));
/// ```
#[must_use]
pub fn build_content(
    card: &CardDefinition,
    stats: &ProfileStats,
    now: DateTime<Utc>,
) -> Vec<ContentLine> {
    let profile = &stats.profile;
    let mut lines = Vec::with_capacity(card.items().len() + 1);
    lines.push(ContentLine::header(profile.display_name(), &profile.login));

    lines.extend(card.items().iter().map(|item| match item {
        CardItem::Bio(Some(text)) => ContentLine::bio(text),
        CardItem::Bio(None) => ContentLine::bio(profile.bio.as_deref().unwrap_or_default().trim()),
        CardItem::KeyValue { key, value } => ContentLine::key_value(key, value_span(value)),
        CardItem::Stat(kind) => ContentLine::key_value(kind.label(), stat_value(*kind, stats, now)),
        CardItem::Section(title) => ContentLine::section(title),
        CardItem::Gap => ContentLine::Gap,
    }));

    lines
}

/// Markup value of a statistic line.
fn stat_value(kind: StatKind, stats: &ProfileStats, now: DateTime<Utc>) -> String {
    let p = &stats.profile;
    match kind {
        StatKind::Repository => [
            format!(
                r#"<tspan class="value">{} ({}: {})</tspan>"#,
                p.repositories,
                key_span("Contributed"),
                p.repositories_contributed
            ),
            labelled("Stars", &p.stars.to_string()),
            labelled("Followers", &p.followers.to_string()),
        ]
        .join(" | "),
        StatKind::Commits => value_span(&thousands(stats.total_commits)),
        StatKind::Issues => [
            labelled("Open", &span(GREEN, &p.open_issues.to_string())),
            labelled("Closed", &span(RED, &p.closed_issues.to_string())),
        ]
        .join(" | "),
        StatKind::PullRequests => [
            labelled("Open", &span(GREEN, &p.ready_pull_requests().to_string())),
            labelled("Draft", &span(GRAY, &p.draft_pull_requests.to_string())),
            labelled("Merged", &span(PURPLE, &p.merged_pull_requests.to_string())),
            labelled("Closed", &span(RED, &p.closed_pull_requests.to_string())),
        ]
        .join(" | "),
        StatKind::Uptime => value_span(&uptime(p, now)),
    }
}

/// `<value><key>label</key>: inner</value>`; `inner` is markup.
fn labelled(label: &str, inner: &str) -> String {
    format!(r#"<tspan class="value">{}: {inner}</tspan>"#, key_span(label))
}

/// Account age as `"Y years, M months, D days"`.
///
/// A year is 365 days and a month 30; a creation date in the future counts
/// as zero.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use termcard_protocol::UserProfile;
/// use termcard_render::content::uptime;
///
/// let profile = UserProfile {
///     created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
///     ..Default::default()
/// };
/// let now = Utc.with_ymd_and_hms(2021, 3, 2, 0, 0, 0).unwrap();
/// assert_eq!(uptime(&profile, now), "1 years, 2 months, 1 days");
/// ```
#[must_use]
pub fn uptime(profile: &UserProfile, now: DateTime<Utc>) -> String {
    let days = (now - profile.created_at).num_days().max(0);
    let years = days / 365;
    let months = (days % 365) / 30;
    let days = (days % 365) % 30;
    format!("{years} years, {months} months, {days} days")
}

/// Formats `n` with comma thousands separators.
///
/// # Examples
///
/// ```
/// use termcard_render::content::thousands;
///
/// assert_eq!(thousands(1234567), "1,234,567");
/// assert_eq!(thousands(999), "999");
/// ```
#[must_use]
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Escaped text of a prompt or title that embeds the login.
pub(crate) fn login_text(profile: &UserProfile) -> String {
    escape(&profile.login).into_owned()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use termcard_layout::markup::{is_balanced, plain_text};

    use super::*;

    fn stats() -> ProfileStats {
        ProfileStats {
            profile: UserProfile {
                login: "grace".into(),
                name: Some("Grace Hopper".into()),
                bio: Some("  Wrote the first compiler.  ".into()),
                created_at: Utc.with_ymd_and_hms(2015, 6, 1, 0, 0, 0).unwrap(),
                repositories: 12,
                repositories_contributed: 34,
                stars: 56,
                followers: 1_024,
                open_issues: 3,
                closed_issues: 17,
                open_pull_requests: 5,
                draft_pull_requests: 2,
                merged_pull_requests: 40,
                closed_pull_requests: 1,
            },
            total_commits: 12_345,
            ..Default::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 6, 3, 0, 0, 0).unwrap()
    }

    fn value_of(lines: &[ContentLine], wanted: &str) -> String {
        lines
            .iter()
            .find_map(|line| match line {
                ContentLine::KeyValue { key, value } if key == wanted => Some(value.clone()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn default_card_starts_with_header_and_profile_bio() {
        let lines = build_content(&CardDefinition::default(), &stats(), now());
        assert_eq!(lines[0], ContentLine::header("Grace Hopper", "grace"));
        assert_eq!(lines[1], ContentLine::bio("Wrote the first compiler."));
        assert_eq!(lines.len(), CardDefinition::default().items().len() + 1);
    }

    #[test]
    fn stat_values_plain_text() {
        let lines = build_content(&CardDefinition::default(), &stats(), now());

        assert_eq!(
            plain_text(&value_of(&lines, "Repository")),
            "12 (Contributed: 34) | Stars: 56 | Followers: 1024"
        );
        assert_eq!(plain_text(&value_of(&lines, "Commits")), "12,345");
        assert_eq!(plain_text(&value_of(&lines, "Issues")), "Open: 3 | Closed: 17");
        assert_eq!(
            plain_text(&value_of(&lines, "Pull Requests")),
            "Open: 3 | Draft: 2 | Merged: 40 | Closed: 1"
        );
        assert_eq!(
            plain_text(&value_of(&lines, "Uptime")),
            "8 years, 0 months, 4 days"
        );
    }

    #[test]
    fn stat_values_are_balanced_markup() {
        let lines = build_content(&CardDefinition::default(), &stats(), now());
        for line in &lines {
            if let ContentLine::KeyValue { value, .. } = line {
                assert!(is_balanced(value), "{value}");
            }
        }
    }

    #[test]
    fn fixed_values_are_escaped() {
        let card = CardDefinition::new(vec![
            CardItem::key_value("Languages", "C & C++ <3"),
            CardItem::Bio(Some("custom".into())),
        ]);
        let lines = build_content(&card, &stats(), now());
        assert_eq!(
            lines[1],
            ContentLine::key_value(
                "Languages",
                r#"<tspan class="value">C &amp; C++ &lt;3</tspan>"#
            )
        );
        assert_eq!(lines[2], ContentLine::bio("custom"));
    }

    #[test]
    fn missing_bio_is_empty() {
        let mut stats = stats();
        stats.profile.bio = None;
        let lines = build_content(&CardDefinition::new(vec![CardItem::Bio(None)]), &stats, now());
        assert_eq!(lines[1], ContentLine::bio(""));
    }

    #[test]
    fn uptime_clamps_future_dates() {
        let mut profile = stats().profile;
        profile.created_at = now() + chrono::Duration::days(3);
        assert_eq!(uptime(&profile, now()), "0 years, 0 months, 0 days");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(100_000), "100,000");
        assert_eq!(thousands(u64::MAX), "18,446,744,073,709,551,615");
    }
}
