// Unit tests for t20stats-tui
// These tests work with the public API without modifying the main codebase

#[cfg(test)]
mod roster_tests {
    use t20stats_tui::roster::{HighScore, Player, Role, StatField, slugify};

    fn sample_batsman() -> Player {
        Player {
            name: "Test Batsman".to_string(),
            slug: "test-batsman".to_string(),
            matches: 100,
            runs: Some(3500),
            average: Some(38.5),
            strike_rate: Some(132.4),
            highest_score: Some(HighScore::Notched("104*".to_string())),
            wickets: None,
            economy: None,
            best_bowling: None,
        }
    }

    #[test]
    fn test_player_struct() {
        let p = sample_batsman();
        assert_eq!(p.matches, 100);
        assert_eq!(p.runs, Some(3500));
        assert_eq!(p.wickets, None);
    }

    #[test]
    fn test_stat_display() {
        let p = sample_batsman();
        assert_eq!(p.stat_display(StatField::Matches), "100");
        assert_eq!(p.stat_display(StatField::Average), "38.50");
        assert_eq!(p.stat_display(StatField::HighestScore), "104*");
        // a field the role does not carry
        assert_eq!(p.stat_display(StatField::Economy), "-");
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("batsman".parse::<Role>().unwrap(), Role::Batsman);
        assert_eq!("Bowlers".parse::<Role>().unwrap(), Role::Bowler);
        assert_eq!("all-rounder".parse::<Role>().unwrap(), Role::Allrounder);
        assert!("keeper".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_tab_cycle() {
        let mut role = Role::Batsman;
        for _ in 0..3 {
            role = role.next();
        }
        assert_eq!(role, Role::Batsman);
        assert_eq!(Role::Batsman.prev(), Role::Allrounder);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("MS Dhoni"), "ms-dhoni");
        assert_eq!(slugify("Virat  Kohli"), "virat-kohli");
    }
}

#[cfg(test)]
mod query_tests {
    use std::collections::BTreeMap;
    use t20stats_tui::query::{self, FilterKey, Query, SortOrder};
    use t20stats_tui::roster::{Player, Role, StatField};

    fn batsman(name: &str, matches: u32) -> Player {
        Player {
            name: name.to_string(),
            slug: t20stats_tui::roster::slugify(name),
            matches,
            runs: Some(matches * 30),
            average: None,
            strike_rate: None,
            highest_score: None,
            wickets: None,
            economy: None,
            best_bowling: None,
        }
    }

    // Worked example: matchesGt=60 sorted by matches desc keeps [120, 80]
    #[test]
    fn test_filter_and_sort_example() {
        let players = vec![batsman("A", 50), batsman("B", 80), batsman("C", 120)];
        let mut query = Query::default();
        query.filters.insert(FilterKey::MatchesGt, "60".to_string());
        query.sort_by = Some(StatField::Matches);
        query.sort_order = SortOrder::Desc;

        let result = query::run(&players, Role::Batsman, &query);
        assert_eq!(result.total_matches, 2);
        let matches: Vec<u32> = result.page_items.iter().map(|p| p.matches).collect();
        assert_eq!(matches, vec![120, 80]);
    }

    // Worked example: 25 items at page size 12 -> 3 pages, last page has item 25
    #[test]
    fn test_pagination_example() {
        let players: Vec<Player> = (1..=25).map(|i| batsman(&format!("P{i}"), i)).collect();
        assert_eq!(query::total_pages(players.len(), 12), 3);
        let page3 = query::paginate(&players, 3, 12);
        assert_eq!(page3.len(), 1);
        assert_eq!(page3[0].name, "P25");
    }

    // Worked example: "abc" for runsGt keeps the roster unfiltered
    #[test]
    fn test_fail_open_example() {
        let players = vec![batsman("A", 50), batsman("B", 80)];
        let mut filters = BTreeMap::new();
        filters.insert(FilterKey::RunsGt, "abc".to_string());
        let kept = query::filter(&players, Role::Batsman, &filters);
        assert_eq!(kept.len(), players.len());
    }

    #[test]
    fn test_search_then_filter_commutes_with_filter_then_search() {
        let players = vec![
            batsman("Rohit Sharma", 150),
            batsman("Mohit Sharma", 40),
            batsman("Virat Kohli", 125),
        ];
        let mut filters = BTreeMap::new();
        filters.insert(FilterKey::MatchesGt, "100".to_string());

        let sf = query::filter(
            &query::search(&players, "sharma"),
            Role::Batsman,
            &filters,
        );
        let fs = query::search(
            &query::filter(&players, Role::Batsman, &filters),
            "sharma",
        );
        let names = |ps: &[Player]| ps.iter().map(|p| p.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&sf), names(&fs));
        assert_eq!(names(&sf), vec!["Rohit Sharma"]);
    }

    #[test]
    fn test_search_membership() {
        let players = vec![batsman("Alpha Beta", 1), batsman("Gamma", 2)];
        let hits = query::search(&players, "BET");
        assert!(hits.iter().all(|p| p.name.to_lowercase().contains("bet")));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_default_query_page_size() {
        let query = Query::default();
        assert_eq!(query.page_size, query::PAGE_SIZE);
        assert_eq!(query.page_size, 12);
        assert_eq!(query.page, 1);
        assert_eq!(query.sort_order, SortOrder::Desc);
    }
}

#[cfg(test)]
mod cli_tests {
    use clap::Parser;
    use t20stats_tui::cli::{Cli, Command};
    use t20stats_tui::roster::Role;

    #[test]
    fn test_list_args_parse() {
        let cli = Cli::try_parse_from([
            "t20stats-tui",
            "list",
            "--role",
            "bowler",
            "--filter",
            "wicketsGt=50",
            "--sort",
            "economy",
            "--order",
            "asc",
            "--page",
            "2",
        ])
        .unwrap();
        match cli.command {
            Some(Command::List {
                role, filters, page, ..
            }) => {
                assert_eq!(role, Role::Bowler);
                assert_eq!(filters, vec!["wicketsGt=50".to_string()]);
                assert_eq!(page, 2);
            }
            other => panic!("expected list command, got {:?}", other),
        }
    }

    #[test]
    fn test_show_args_parse() {
        let cli = Cli::try_parse_from(["t20stats-tui", "show", "virat-kohli"]).unwrap();
        match cli.command {
            Some(Command::Show { slug }) => assert_eq!(slug, "virat-kohli"),
            other => panic!("expected show command, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_role_rejected() {
        let res = Cli::try_parse_from(["t20stats-tui", "list", "--role", "keeper"]);
        assert!(res.is_err());
    }
}
