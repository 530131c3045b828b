//! Full card pipeline: content, layout and SVG assembly.

use chrono::{TimeZone, Utc};
use termcard_config::{CardDefinition, CardItem, LayoutConfig, StatKind};
use termcard_layout::markup::plain_text;
use termcard_layout::{LayoutEngine, visible_width};
use termcard_protocol::{LanguageStat, LineKind, ProfileStats, UserProfile};
use termcard_render::{RenderOptions, Theme, build_content, render_card, render_svg};

fn stats() -> ProfileStats {
    let mut stats = ProfileStats {
        profile: UserProfile {
            login: "grace".into(),
            name: Some("Grace Brewster Murray Hopper".into()),
            bio: Some(
                "Computer scientist & rear admiral. Wrote the first compiler, popularized \
                 machine-independent programming languages, and found an actual bug in the machine."
                    .into(),
            ),
            created_at: Utc.with_ymd_and_hms(2012, 3, 4, 5, 6, 7).unwrap(),
            repositories: 42,
            repositories_contributed: 7,
            stars: 1_906,
            followers: 99_999,
            open_issues: 4,
            closed_issues: 120,
            open_pull_requests: 6,
            draft_pull_requests: 1,
            merged_pull_requests: 300,
            closed_pull_requests: 12,
        },
        total_commits: 4_321,
        includes_private: true,
        ..Default::default()
    };
    for (name, commits, color) in [("COBOL", 3_000, "#005590"), ("Fortran", 1_000, "#4d41b1"), ("C", 321, "#555555")] {
        let mut stat = LanguageStat {
            color: color.to_string(),
            ..Default::default()
        };
        stat.add_commits("grace/flow-matic", commits);
        stats.languages.insert(name.to_string(), stat);
    }
    stats
}

fn options(theme: Theme, macos_window: bool) -> RenderOptions {
    RenderOptions {
        theme,
        macos_window,
        generated_at: Utc.with_ymd_and_hms(2024, 12, 9, 0, 0, 0).unwrap(),
    }
}

fn card() -> CardDefinition {
    CardDefinition::new(vec![
        CardItem::Bio(None),
        CardItem::Stat(StatKind::Uptime),
        CardItem::key_value("Editors", "ed & vi"),
        CardItem::Gap,
        CardItem::Section("GitHub Statistics".into()),
        CardItem::Stat(StatKind::Repository),
        CardItem::Stat(StatKind::Commits),
        CardItem::Stat(StatKind::Issues),
        CardItem::Stat(StatKind::PullRequests),
    ])
}

#[test]
fn every_card_line_fits_the_width() {
    let stats = stats();
    let content = build_content(&card(), &stats, Utc.with_ymd_and_hms(2024, 12, 9, 0, 0, 0).unwrap());
    let engine = LayoutEngine::new(LayoutConfig::default()).unwrap();

    for line in engine.render(&content) {
        let width = visible_width(&plain_text(&line.markup));
        match line.kind {
            LineKind::Gap => {}
            LineKind::BioOverflow => assert!(width <= 60),
            _ => assert_eq!(width, 75, "{}", line.markup),
        }
    }
}

#[test]
fn pull_request_line_is_truncated_at_default_width() {
    let stats = stats();
    let content = build_content(&card(), &stats, Utc::now());
    let lines = LayoutEngine::new(LayoutConfig::default()).unwrap().render(&content);

    let prs = lines
        .iter()
        .find(|l| l.markup.contains(r#"<tspan class="key">Pull Requests</tspan>"#))
        .unwrap();
    // "Open: 5 | Draft: 1 | Merged: 300 | Closed: 12" fits, so colours survive.
    assert!(!prs.truncated);
    assert!(prs.markup.contains(r#"<tspan class="purple">300</tspan>"#));

    let narrow = LayoutEngine::new(LayoutConfig::with_width(40)).unwrap().render(&content);
    assert!(narrow.iter().any(|l| l.truncated));
}

#[test]
fn documents_are_well_formed_xml() {
    let stats = stats();
    for theme in Theme::ALL {
        for window in [false, true] {
            let svg = render_card(&LayoutConfig::default(), &card(), &stats, &options(theme, window)).unwrap();
            let doc = roxmltree::Document::parse(&svg).unwrap_or_else(|e| panic!("{theme} {window}: {e}"));

            let text: String = doc
                .descendants()
                .filter(|n| n.is_text())
                .filter_map(|n| n.text())
                .collect();
            assert!(text.contains("Grace Brewster Murray Hopper -—- @grace -"));
            assert!(text.contains("ed & vi"));
            assert!(text.contains("These metrics include private contributions."));
            assert!(text.contains("COBOL"));
            assert_eq!(window, text.contains("Profile — grace@github.com"));
        }
    }
}

#[test]
fn themes_use_their_palette() {
    let stats = stats();
    let lines = LayoutEngine::new(LayoutConfig::default())
        .unwrap()
        .render(&build_content(&card(), &stats, Utc::now()));

    let dark = render_svg(&lines, &stats, &options(Theme::Dark, false));
    let light = render_svg(&lines, &stats, &options(Theme::Light, false));
    assert!(dark.contains(r##"fill="#0d1117""##));
    assert!(light.contains(r##"fill="#f6f8fa""##));
    assert!(!dark.contains("#f6f8fa"));
}

#[test]
fn invalid_layout_fails_rendering() {
    let layout = LayoutConfig {
        max_lines: 0,
        ..LayoutConfig::default()
    };
    let result = render_card(&layout, &card(), &stats(), &options(Theme::Dark, false));
    assert!(matches!(result, Err(termcard_render::RenderError::Layout(_))));
}
