//! Roster data layer: player records, roles, and JSON loading.
//!
//! The roster is partitioned by role into three ordered lists. It is loaded
//! once at startup (from the bundled dataset or a `--data` override) and never
//! mutated afterwards. Slugs are unique across the whole roster; loading
//! rejects a dataset that violates this.

use crate::error::{Result, simple_error};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Dataset bundled into the binary; used when no `--data` path is given.
const BUNDLED_DATA: &str = include_str!("../data/players.json");

/// Player role; determines which stat fields and filters apply.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Batsman,
    Bowler,
    Allrounder,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Batsman, Role::Bowler, Role::Allrounder];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Batsman => "batsman",
            Role::Bowler => "bowler",
            Role::Allrounder => "allrounder",
        }
    }

    /// Next tab in display order, wrapping around.
    pub fn next(&self) -> Role {
        match self {
            Role::Batsman => Role::Bowler,
            Role::Bowler => Role::Allrounder,
            Role::Allrounder => Role::Batsman,
        }
    }

    /// Previous tab in display order, wrapping around.
    pub fn prev(&self) -> Role {
        match self {
            Role::Batsman => Role::Allrounder,
            Role::Bowler => Role::Batsman,
            Role::Allrounder => Role::Bowler,
        }
    }

    /// Stat fields shown for this role, in display order.
    pub fn stat_fields(&self) -> &'static [StatField] {
        match self {
            Role::Batsman => &[
                StatField::Matches,
                StatField::Runs,
                StatField::Average,
                StatField::StrikeRate,
                StatField::HighestScore,
            ],
            Role::Bowler => &[
                StatField::Matches,
                StatField::Wickets,
                StatField::Economy,
                StatField::BestBowling,
            ],
            Role::Allrounder => &[
                StatField::Matches,
                StatField::Runs,
                StatField::Wickets,
                StatField::StrikeRate,
                StatField::Economy,
            ],
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "batsman" | "batsmen" => Ok(Role::Batsman),
            "bowler" | "bowlers" => Ok(Role::Bowler),
            "allrounder" | "allrounders" | "all-rounder" => Ok(Role::Allrounder),
            other => Err(format!(
                "unknown role '{}' (expected batsman, bowler or allrounder)",
                other
            )),
        }
    }
}

/// Named stat field of a player record. Drives the generic sort and display
/// logic instead of per-role field matching.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatField {
    Name,
    Matches,
    Runs,
    Average,
    StrikeRate,
    HighestScore,
    Wickets,
    Economy,
    BestBowling,
}

impl StatField {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatField::Name => "name",
            StatField::Matches => "matches",
            StatField::Runs => "runs",
            StatField::Average => "average",
            StatField::StrikeRate => "strikeRate",
            StatField::HighestScore => "highestScore",
            StatField::Wickets => "wickets",
            StatField::Economy => "economy",
            StatField::BestBowling => "bestBowling",
        }
    }

    /// Human-readable label for table headers and profile rows.
    pub fn label(&self) -> &'static str {
        match self {
            StatField::Name => "Name",
            StatField::Matches => "Matches",
            StatField::Runs => "Runs",
            StatField::Average => "Average",
            StatField::StrikeRate => "Strike Rate",
            StatField::HighestScore => "Highest Score",
            StatField::Wickets => "Wickets",
            StatField::Economy => "Economy",
            StatField::BestBowling => "Best Bowling",
        }
    }
}

impl std::fmt::Display for StatField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StatField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "name" => Ok(StatField::Name),
            "matches" => Ok(StatField::Matches),
            "runs" => Ok(StatField::Runs),
            "average" => Ok(StatField::Average),
            "strikeRate" | "strike-rate" => Ok(StatField::StrikeRate),
            "highestScore" | "highest-score" => Ok(StatField::HighestScore),
            "wickets" => Ok(StatField::Wickets),
            "economy" => Ok(StatField::Economy),
            "bestBowling" | "best-bowling" => Ok(StatField::BestBowling),
            other => Err(format!("unknown stat field '{}'", other)),
        }
    }
}

/// A stat value read out of a player record via [`Player::stat`].
#[derive(Clone, Debug, PartialEq)]
pub enum StatValue {
    Num(f64),
    Text(String),
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Integers print without a trailing ".00"
            StatValue::Num(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            StatValue::Num(n) => write!(f, "{:.2}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

/// Highest score entry: the source data permits either a plain integer or a
/// notched string such as `"100*"`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum HighScore {
    Runs(u32),
    Notched(String),
}

impl std::fmt::Display for HighScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HighScore::Runs(n) => write!(f, "{}", n),
            HighScore::Notched(s) => f.write_str(s),
        }
    }
}

/// A single player record. Stats not applicable to the player's role are
/// absent (`None`); sorting treats a missing numeric field as 0.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub slug: String,
    pub matches: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_score: Option<HighScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wickets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_bowling: Option<String>,
}

impl Player {
    /// Generic field accessor. Returns `None` when the field is not present
    /// on this record.
    pub fn stat(&self, field: StatField) -> Option<StatValue> {
        match field {
            StatField::Name => Some(StatValue::Text(self.name.clone())),
            StatField::Matches => Some(StatValue::Num(self.matches as f64)),
            StatField::Runs => self.runs.map(|v| StatValue::Num(v as f64)),
            StatField::Average => self.average.map(StatValue::Num),
            StatField::StrikeRate => self.strike_rate.map(StatValue::Num),
            StatField::HighestScore => self.highest_score.as_ref().map(|hs| match hs {
                HighScore::Runs(n) => StatValue::Num(*n as f64),
                HighScore::Notched(s) => StatValue::Text(s.clone()),
            }),
            StatField::Wickets => self.wickets.map(|v| StatValue::Num(v as f64)),
            StatField::Economy => self.economy.map(StatValue::Num),
            StatField::BestBowling => self.best_bowling.clone().map(StatValue::Text),
        }
    }

    /// Plain-text rendering of a field; absent fields show as a dash.
    pub fn stat_display(&self, field: StatField) -> String {
        self.stat(field)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// The full static collection of players, partitioned by role.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Roster {
    pub batsmen: Vec<Player>,
    pub bowlers: Vec<Player>,
    pub allrounders: Vec<Player>,
}

/// Top-level document shape of the dataset file.
#[derive(Debug, Deserialize, Serialize)]
struct RosterFile {
    players: Roster,
}

impl Roster {
    /// Parse a roster from a JSON document and validate slug uniqueness.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: RosterFile = serde_json::from_str(json)
            .map_err(|e| simple_error(format!("invalid roster JSON: {}", e)))?;
        let roster = file.players;
        roster.validate()?;
        Ok(roster)
    }

    /// Load a roster from a file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| simple_error(format!("read {}: {}", path.display(), e)))?;
        let roster = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            batsmen = roster.batsmen.len(),
            bowlers = roster.bowlers.len(),
            allrounders = roster.allrounders.len(),
            "loaded roster"
        );
        Ok(roster)
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DATA)
    }

    /// Slug uniqueness across all three partitions; profile lookup depends on it.
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (_, p) in self.iter_all() {
            if !seen.insert(p.slug.as_str()) {
                return Err(simple_error(format!("duplicate slug '{}'", p.slug)));
            }
        }
        Ok(())
    }

    pub fn by_role(&self, role: Role) -> &[Player] {
        match role {
            Role::Batsman => &self.batsmen,
            Role::Bowler => &self.bowlers,
            Role::Allrounder => &self.allrounders,
        }
    }

    pub fn len(&self) -> usize {
        self.batsmen.len() + self.bowlers.len() + self.allrounders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter_all(&self) -> impl Iterator<Item = (Role, &Player)> {
        Role::ALL
            .iter()
            .flat_map(|r| self.by_role(*r).iter().map(move |p| (*r, p)))
    }

    /// Look up a player by slug. `None` is the distinct not-found outcome;
    /// the role is derived from the partition containing the slug.
    pub fn find_by_slug(&self, slug: &str) -> Option<(Role, &Player)> {
        self.iter_all().find(|(_, p)| p.slug == slug)
    }
}

/// Convert a display name to a URL-safe slug: lowercase, punctuation stripped,
/// whitespace and underscores collapsed to single hyphens.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_sep = false;
    for ch in text.trim().chars() {
        if ch.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.extend(ch.to_lowercase());
        } else if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_sep = true;
        }
        // other punctuation is dropped entirely
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "players": {
            "batsmen": [
                { "name": "A One", "slug": "a-one", "matches": 10, "runs": 300, "average": 30.0, "strikeRate": 120.0, "highestScore": "55*" },
                { "name": "B Two", "slug": "b-two", "matches": 20, "runs": 700, "average": 35.0, "strikeRate": 140.0, "highestScore": 88 }
            ],
            "bowlers": [
                { "name": "C Three", "slug": "c-three", "matches": 15, "wickets": 22, "economy": 7.1, "bestBowling": "4/20" }
            ],
            "allrounders": [
                { "name": "D Four", "slug": "d-four", "matches": 12, "runs": 150, "wickets": 9, "strikeRate": 110.0, "economy": 8.0 }
            ]
        }
    }"#;

    #[test]
    fn parse_roster_basic() {
        let roster = Roster::from_json(SAMPLE).unwrap();
        assert_eq!(roster.batsmen.len(), 2);
        assert_eq!(roster.bowlers.len(), 1);
        assert_eq!(roster.allrounders.len(), 1);
        assert_eq!(roster.len(), 4);

        let b = &roster.batsmen[0];
        assert_eq!(b.name, "A One");
        assert_eq!(b.matches, 10);
        assert_eq!(b.runs, Some(300));
        assert_eq!(b.highest_score, Some(HighScore::Notched("55*".to_string())));
        assert_eq!(b.wickets, None);

        // highestScore may also be a plain integer
        assert_eq!(roster.batsmen[1].highest_score, Some(HighScore::Runs(88)));
    }

    #[test]
    fn duplicate_slug_rejected() {
        let json = SAMPLE.replace("c-three", "a-one");
        let err = Roster::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate slug"));
    }

    #[test]
    fn find_by_slug_resolves_role() {
        let roster = Roster::from_json(SAMPLE).unwrap();
        let (role, p) = roster.find_by_slug("c-three").unwrap();
        assert_eq!(role, Role::Bowler);
        assert_eq!(p.name, "C Three");
        assert!(roster.find_by_slug("nobody").is_none());
    }

    #[test]
    fn stat_accessor_missing_fields() {
        let roster = Roster::from_json(SAMPLE).unwrap();
        let bowler = &roster.bowlers[0];
        assert_eq!(bowler.stat(StatField::Wickets), Some(StatValue::Num(22.0)));
        assert_eq!(bowler.stat(StatField::Runs), None);
        assert_eq!(
            bowler.stat(StatField::Name),
            Some(StatValue::Text("C Three".to_string()))
        );
    }

    #[test]
    fn bundled_dataset_is_valid() {
        let roster = Roster::bundled().unwrap();
        assert!(roster.batsmen.len() > 12, "need more than one page of batsmen");
        assert!(roster.bowlers.len() > 12, "need more than one page of bowlers");
        assert!(!roster.allrounders.is_empty());
        assert!(roster.find_by_slug("virat-kohli").is_some());
    }

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Virat Kohli"), "virat-kohli");
        assert_eq!(slugify("  KL  Rahul "), "kl-rahul");
        assert_eq!(slugify("R. Ashwin_Jr"), "r-ashwin-jr");
    }
}
