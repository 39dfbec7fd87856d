//! Command line interface: argument parsing and the headless subcommands.
//!
//! Without a subcommand the binary runs the TUI; `list` and `show` run the
//! same query engine and print to stdout, for scripting and quick lookups.

use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{Result, simple_error};
use crate::query::{self, FilterKey, Query, SortOrder};
use crate::roster::{Role, Roster, StatField};

#[derive(Parser, Debug)]
#[command(name = "t20stats-tui", version, about = "Browse Indian T20 cricket player statistics")]
pub struct Cli {
    /// Roster JSON file; defaults to the bundled dataset
    #[arg(long, env = "T20STATS_DATA")]
    pub data: Option<PathBuf>,

    /// Theme config file (created with defaults when missing)
    #[arg(long, default_value = "theme.conf")]
    pub theme: String,

    /// Players per page; overrides the persisted default
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Write tracing output to this file (RUST_LOG filters)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one page of players matching a query
    List {
        /// batsman, bowler or allrounder
        #[arg(long, default_value = "batsman")]
        role: Role,

        /// Case-insensitive name substring
        #[arg(long, default_value = "")]
        search: String,

        /// Range filter as key=value, e.g. matchesGt=60 (repeatable)
        #[arg(long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,

        /// Stat field to sort by, e.g. matches or strikeRate
        #[arg(long)]
        sort: Option<StatField>,

        /// asc or desc
        #[arg(long, default_value = "desc")]
        order: SortOrder,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Print one player's profile by slug
    Show { slug: String },
}

/// Run a headless subcommand against a loaded roster.
pub fn run(roster: &Roster, command: Command, page_size: usize) -> Result<()> {
    match command {
        Command::List {
            role,
            search,
            filters,
            sort,
            order,
            page,
        } => {
            let query = Query {
                search_text: search,
                filters: parse_filters(role, &filters)?,
                sort_by: sort,
                sort_order: order,
                page: page.max(1),
                page_size,
            };
            list(roster, role, &query);
            Ok(())
        }
        Command::Show { slug } => show(roster, &slug),
    }
}

/// Parse repeated `key=value` filter arguments. Unknown keys and keys not
/// recognized for the role are rejected here (unlike values, which stay raw
/// and fail open in the engine).
fn parse_filters(role: Role, raw: &[String]) -> Result<BTreeMap<FilterKey, String>> {
    let mut filters = BTreeMap::new();
    for item in raw {
        let (key, value) = item
            .split_once('=')
            .ok_or_else(|| simple_error(format!("invalid filter '{}' (expected key=value)", item)))?;
        let key: FilterKey = key.parse().map_err(simple_error)?;
        if !FilterKey::for_role(role).contains(&key) {
            return Err(simple_error(format!(
                "filter '{}' does not apply to {}s",
                key, role
            )));
        }
        filters.insert(key, value.to_string());
    }
    Ok(filters)
}

fn list(roster: &Roster, role: Role, query: &Query) {
    let result = query::run(roster.by_role(role), role, query);
    let fields = role.stat_fields();

    print!("{:<24}", "Name");
    for field in fields {
        print!("  {:>14}", field.label());
    }
    println!();
    for p in &result.page_items {
        print!("{:<24}", p.name);
        for field in fields {
            print!("  {:>14}", p.stat_display(*field));
        }
        println!();
    }
    println!(
        "page {}/{} ({} player{})",
        query.page,
        result.total_pages,
        result.total_matches,
        if result.total_matches == 1 { "" } else { "s" },
    );
}

fn show(roster: &Roster, slug: &str) -> Result<()> {
    let (role, player) = roster
        .find_by_slug(slug)
        .ok_or_else(|| simple_error(format!("no player with slug '{}'", slug)))?;
    println!("{}", player.name);
    println!("Indian T20 {}", role);
    for field in role.stat_fields() {
        println!("  {:<14} {}", field.label(), player.stat_display(*field));
    }
    Ok(())
}
