//! Roster query engine: search, per-role range filters, sorting, pagination.
//!
//! Every operation is a pure function over a player slice; the UI holds the
//! current query values and re-runs [`run`] wholesale on each change. Filters
//! fail open: an absent, empty, or unparseable value is no constraint, so a
//! malformed input never hides the whole roster.

use crate::roster::{Player, Role, StatField, StatValue};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Players shown per page, by convention of the listing views.
pub const PAGE_SIZE: usize = 12;

/// A recognized range-filter key. Which keys apply depends on the role.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FilterKey {
    MatchesGt,
    MatchesLt,
    RunsGt,
    WicketsGt,
    StrikeRateGt,
    EconomyLt,
}

impl FilterKey {
    /// Keys recognized for a role, in menu display order.
    pub fn for_role(role: Role) -> &'static [FilterKey] {
        match role {
            Role::Batsman => &[
                FilterKey::MatchesGt,
                FilterKey::MatchesLt,
                FilterKey::RunsGt,
                FilterKey::StrikeRateGt,
            ],
            Role::Bowler => &[
                FilterKey::MatchesGt,
                FilterKey::MatchesLt,
                FilterKey::WicketsGt,
                FilterKey::EconomyLt,
            ],
            Role::Allrounder => &[
                FilterKey::MatchesGt,
                FilterKey::RunsGt,
                FilterKey::WicketsGt,
                FilterKey::StrikeRateGt,
                FilterKey::EconomyLt,
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::MatchesGt => "matchesGt",
            FilterKey::MatchesLt => "matchesLt",
            FilterKey::RunsGt => "runsGt",
            FilterKey::WicketsGt => "wicketsGt",
            FilterKey::StrikeRateGt => "strikeRateGt",
            FilterKey::EconomyLt => "economyLt",
        }
    }

    /// Menu label, e.g. "Matches (greater than)".
    pub fn label(&self) -> &'static str {
        match self {
            FilterKey::MatchesGt => "Matches (greater than)",
            FilterKey::MatchesLt => "Matches (less than)",
            FilterKey::RunsGt => "Runs (greater than)",
            FilterKey::WicketsGt => "Wickets (greater than)",
            FilterKey::StrikeRateGt => "Strike Rate (greater than)",
            FilterKey::EconomyLt => "Economy (less than)",
        }
    }

    fn field(&self) -> StatField {
        match self {
            FilterKey::MatchesGt | FilterKey::MatchesLt => StatField::Matches,
            FilterKey::RunsGt => StatField::Runs,
            FilterKey::WicketsGt => StatField::Wickets,
            FilterKey::StrikeRateGt => StatField::StrikeRate,
            FilterKey::EconomyLt => StatField::Economy,
        }
    }

    /// Whether a player passes this filter at the given threshold.
    fn keep(&self, player: &Player, threshold: f64) -> bool {
        let value = match player.stat(self.field()) {
            Some(StatValue::Num(n)) => n,
            // Missing field: the player cannot satisfy a range constraint
            _ => return false,
        };
        match self {
            FilterKey::MatchesGt
            | FilterKey::RunsGt
            | FilterKey::WicketsGt
            | FilterKey::StrikeRateGt => value > threshold,
            FilterKey::MatchesLt | FilterKey::EconomyLt => value < threshold,
        }
    }
}

impl std::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FilterKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "matchesGt" => Ok(FilterKey::MatchesGt),
            "matchesLt" => Ok(FilterKey::MatchesLt),
            "runsGt" => Ok(FilterKey::RunsGt),
            "wicketsGt" => Ok(FilterKey::WicketsGt),
            "strikeRateGt" => Ok(FilterKey::StrikeRateGt),
            "economyLt" => Ok(FilterKey::EconomyLt),
            other => Err(format!("unknown filter '{}'", other)),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}' (asc or desc)", other)),
        }
    }
}

/// Immutable query values for one engine invocation. Filter values are kept
/// raw; parsing happens (fail-open) inside [`filter`].
#[derive(Clone, Debug)]
pub struct Query {
    pub search_text: String,
    pub filters: BTreeMap<FilterKey, String>,
    pub sort_by: Option<StatField>,
    pub sort_order: SortOrder,
    pub page: usize,
    pub page_size: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            filters: BTreeMap::new(),
            sort_by: None,
            sort_order: SortOrder::Desc,
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

/// Result of one engine invocation.
#[derive(Clone, Debug)]
pub struct QueryResult {
    pub total_matches: usize,
    pub total_pages: usize,
    pub page_items: Vec<Player>,
}

/// Case-insensitive substring search on player names. Empty or all-whitespace
/// text is the identity.
pub fn search(players: &[Player], text: &str) -> Vec<Player> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return players.to_vec();
    }
    players
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Apply all active range filters for the role, ANDed together. Keys not
/// recognized for the role are skipped, as are values that do not parse.
pub fn filter(players: &[Player], role: Role, filters: &BTreeMap<FilterKey, String>) -> Vec<Player> {
    let active: Vec<(FilterKey, f64)> = FilterKey::for_role(role)
        .iter()
        .filter_map(|key| {
            let raw = filters.get(key)?;
            // "nan"/"inf" parse as f64 but are not usable thresholds
            let threshold = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
            Some((*key, threshold))
        })
        .collect();
    if active.is_empty() {
        return players.to_vec();
    }
    players
        .iter()
        .filter(|p| active.iter().all(|(key, threshold)| key.keep(p, *threshold)))
        .cloned()
        .collect()
}

/// Order players by a stat field. Stable for equal keys; a player missing the
/// field sorts as numeric 0. Numeric fields compare numerically, text fields
/// lexicographically; a numeric/text mismatch compares equal.
pub fn sort(players: &[Player], field: StatField, order: SortOrder) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| {
        let ord = cmp_stat(a.stat(field), b.stat(field));
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    sorted
}

fn cmp_stat(a: Option<StatValue>, b: Option<StatValue>) -> Ordering {
    let a = a.unwrap_or(StatValue::Num(0.0));
    let b = b.unwrap_or(StatValue::Num(0.0));
    match (a, b) {
        (StatValue::Num(x), StatValue::Num(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (StatValue::Text(x), StatValue::Text(y)) => x.cmp(&y),
        _ => Ordering::Equal,
    }
}

/// Total number of pages for a result set; 0 when it is empty.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// The 1-based `page` of `page_size` items, clipped to the slice bounds.
/// Pages past the end are empty.
pub fn paginate(players: &[Player], page: usize, page_size: usize) -> Vec<Player> {
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= players.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(players.len());
    players[start..end].to_vec()
}

/// Run the full pipeline: search, filter, sort (roster order when no sort key
/// is set), then paginate.
pub fn run(players: &[Player], role: Role, query: &Query) -> QueryResult {
    let matched = search(players, &query.search_text);
    let matched = filter(&matched, role, &query.filters);
    let ordered = match query.sort_by {
        Some(field) => sort(&matched, field, query.sort_order),
        None => matched,
    };
    let total_matches = ordered.len();
    let result = QueryResult {
        total_matches,
        total_pages: total_pages(total_matches, query.page_size),
        page_items: paginate(&ordered, query.page, query.page_size),
    };
    tracing::debug!(
        role = %role,
        total = result.total_matches,
        pages = result.total_pages,
        page = query.page,
        "query evaluated"
    );
    result
}
