// Integration tests for t20stats-tui
// Exercise config persistence and the full query flow through AppState.

use std::time::{SystemTime, UNIX_EPOCH};

use t20stats_tui::app::{AppState, Theme, queryconf::QueryDefaults};
use t20stats_tui::query::{FilterKey, SortOrder};
use t20stats_tui::roster::{Role, Roster, StatField};

/// Unique temp path so parallel tests never collide.
fn temp_path(prefix: &str) -> String {
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    std::env::temp_dir()
        .join(format!("{}-{}-{}.conf", prefix, std::process::id(), nonce))
        .to_string_lossy()
        .into_owned()
}

const SAMPLE_JSON: &str = r#"{
  "players": {
    "batsmen": [
      {"name": "Virat Kohli", "slug": "virat-kohli", "matches": 125,
       "runs": 4188, "average": 48.69, "strikeRate": 137.96, "highestScore": "122*"},
      {"name": "Rohit Sharma", "slug": "rohit-sharma", "matches": 159,
       "runs": 4231, "average": 31.32, "strikeRate": 140.89, "highestScore": 118},
      {"name": "Shubman Gill", "slug": "shubman-gill", "matches": 21,
       "runs": 578, "average": 30.42, "strikeRate": 139.28, "highestScore": 126}
    ],
    "bowlers": [
      {"name": "Jasprit Bumrah", "slug": "jasprit-bumrah", "matches": 70,
       "wickets": 89, "economy": 6.27, "bestBowling": "3/7"},
      {"name": "Arshdeep Singh", "slug": "arshdeep-singh", "matches": 63,
       "wickets": 99, "economy": 8.29, "bestBowling": "4/9"}
    ],
    "allrounders": [
      {"name": "Hardik Pandya", "slug": "hardik-pandya", "matches": 114,
       "runs": 1812, "strikeRate": 141.13, "wickets": 94, "economy": 8.21}
    ]
  }
}"#;

#[test]
fn test_theme_roundtrip() {
    let path = temp_path("t20stats-theme");
    let theme = Theme::mocha();
    theme.write_file(&path).unwrap();

    let loaded = Theme::from_file(&path).unwrap();
    assert_eq!(loaded.text, theme.text);
    assert_eq!(loaded.title, theme.title);
    assert_eq!(loaded.header_bg, theme.header_bg);
    assert_eq!(loaded.highlight_fg, theme.highlight_fg);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_theme_load_or_init_creates_file() {
    let path = temp_path("t20stats-theme-init");
    assert!(!std::path::Path::new(&path).exists());

    let theme = Theme::load_or_init(&path);
    assert!(std::path::Path::new(&path).exists());
    assert_eq!(theme.text, Theme::mocha().text);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_query_defaults_roundtrip() {
    let path = temp_path("t20stats-query");
    let cfg = QueryDefaults {
        page_size: 20,
        sort_by: Some(StatField::StrikeRate),
        sort_order: SortOrder::Asc,
    };
    cfg.write_file(&path).unwrap();

    let loaded = QueryDefaults::from_file(&path).unwrap();
    assert_eq!(loaded.page_size, 20);
    assert_eq!(loaded.sort_by, Some(StatField::StrikeRate));
    assert_eq!(loaded.sort_order, SortOrder::Asc);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_query_defaults_bad_values_fall_back() {
    let path = temp_path("t20stats-query-bad");
    std::fs::write(&path, "page_size = 0\nsort_by = bogus\nsort_order = sideways\n").unwrap();

    let loaded = QueryDefaults::from_file(&path).unwrap();
    let defaults = QueryDefaults::default();
    assert_eq!(loaded.page_size, defaults.page_size);
    assert_eq!(loaded.sort_by, defaults.sort_by);
    assert_eq!(loaded.sort_order, defaults.sort_order);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_app_search_and_filter_flow() {
    let roster = Roster::from_json(SAMPLE_JSON).unwrap();
    let mut app = AppState::new(roster, 12, Theme::dark());
    assert_eq!(app.result.total_matches, 3);

    app.search_query = "sharma".to_string();
    app.reset_page();
    app.refresh();
    assert_eq!(app.result.total_matches, 1);
    assert_eq!(app.result.page_items[0].slug, "rohit-sharma");

    app.clear_query();
    app.filters
        .insert(FilterKey::MatchesGt, "100".to_string());
    app.reset_page();
    app.refresh();
    let names: Vec<&str> = app.result.page_items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Virat Kohli", "Rohit Sharma"]);
}

#[test]
fn test_app_role_switch_resets_page() {
    let roster = Roster::from_json(SAMPLE_JSON).unwrap();
    let mut app = AppState::new(roster, 2, Theme::dark());
    app.next_page();
    assert_eq!(app.page, 2);

    app.set_role(Role::Bowler);
    assert_eq!(app.page, 1);
    assert_eq!(app.result.total_matches, 2);
}

#[test]
fn test_app_sort_by_stat() {
    let roster = Roster::from_json(SAMPLE_JSON).unwrap();
    let mut app = AppState::new(roster, 12, Theme::dark());
    app.set_role(Role::Bowler);
    app.sort_by = Some(StatField::Economy);
    app.sort_order = SortOrder::Asc;
    app.refresh();
    assert_eq!(app.result.page_items[0].slug, "jasprit-bumrah");

    app.sort_order = app.sort_order.toggled();
    app.refresh();
    assert_eq!(app.result.page_items[0].slug, "arshdeep-singh");
}

#[test]
fn test_stale_page_yields_empty_not_error() {
    let roster = Roster::from_json(SAMPLE_JSON).unwrap();
    let mut app = AppState::new(roster, 2, Theme::dark());
    app.next_page();
    assert!(!app.result.page_items.is_empty());

    // narrow the result set while on page 2
    app.search_query = "kohli".to_string();
    app.refresh();
    assert_eq!(app.result.total_matches, 1);
    assert!(app.result.page_items.is_empty());
}

#[test]
fn test_find_by_slug() {
    let roster = Roster::from_json(SAMPLE_JSON).unwrap();

    let (role, player) = roster.find_by_slug("hardik-pandya").unwrap();
    assert_eq!(role, Role::Allrounder);
    assert_eq!(player.name, "Hardik Pandya");

    assert!(roster.find_by_slug("no-such-player").is_none());
}

#[test]
fn test_bundled_roster_loads() {
    let roster = Roster::bundled().unwrap();
    assert!(!roster.is_empty());
    assert!(roster.by_role(Role::Batsman).len() > 12);
    assert!(roster.find_by_slug("virat-kohli").is_some());
}
