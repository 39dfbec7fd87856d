//! Query defaults configuration: parse/write `query.conf` and apply to AppState.
//!
//! Persists the listing preferences that survive restarts:
//! - Page size (players per page)
//! - Default sort field and order

use super::AppState;
use crate::query::{PAGE_SIZE, SortOrder};
use crate::roster::StatField;

/// Listing defaults that can be loaded from or saved to a configuration file.
#[derive(Clone, Debug)]
pub struct QueryDefaults {
    pub page_size: usize,
    pub sort_by: Option<StatField>,
    pub sort_order: SortOrder,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            sort_by: None,
            sort_order: SortOrder::Desc,
        }
    }
}

impl QueryDefaults {
    /// Extract the current listing preferences from an [`AppState`].
    pub fn from_app(app: &AppState) -> Self {
        Self {
            page_size: app.page_size,
            sort_by: app.sort_by,
            sort_order: app.sort_order,
        }
    }

    /// Save the current listing preferences from an [`AppState`] to a file.
    pub fn save_from_app(app: &AppState, path: &str) -> std::io::Result<()> {
        Self::from_app(app).write_file(path)
    }

    /// Load defaults from a file, or create the file with defaults if missing.
    pub fn load_or_init(path: &str) -> Self {
        let p = std::path::Path::new(path);
        if p.exists() {
            return Self::from_file(path).unwrap_or_default();
        }
        let cfg = Self::default();
        let _ = cfg.write_file(path);
        cfg
    }

    /// Load defaults from a configuration file.
    ///
    /// Format is `<key> = <value>`; comments (lines starting with '#') and
    /// empty lines are ignored, as are unknown keys and unparseable values.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let mut cfg = Self::default();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '=');
            let lhs = parts.next().map(|s| s.trim()).unwrap_or("");
            let rhs = parts.next().map(|s| s.trim()).unwrap_or("");
            if lhs.is_empty() || rhs.is_empty() {
                continue;
            }

            match lhs {
                "page_size" => {
                    if let Ok(n) = rhs.parse::<usize>() {
                        if n > 0 {
                            cfg.page_size = n;
                        }
                    }
                }
                "sort_by" => {
                    cfg.sort_by = match rhs {
                        "none" | "None" | "" => None,
                        other => other.parse::<StatField>().ok().or(cfg.sort_by),
                    };
                }
                "sort_order" => {
                    if let Ok(order) = rhs.parse::<SortOrder>() {
                        cfg.sort_order = order;
                    }
                }
                _ => {}
            }
        }
        Some(cfg)
    }

    /// Write the current defaults to a configuration file.
    pub fn write_file(&self, path: &str) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# t20stats-tui listing defaults\n");
        buf.push_str("# sort_by: none|name|matches|runs|average|strikeRate|highestScore|wickets|economy|bestBowling\n");
        buf.push_str("# sort_order: asc|desc\n\n");

        let _ = writeln!(&mut buf, "page_size = {}", self.page_size);
        let _ = writeln!(
            &mut buf,
            "sort_by = {}",
            self.sort_by.map(|f| f.as_str()).unwrap_or("none")
        );
        let _ = writeln!(&mut buf, "sort_order = {}", self.sort_order.as_str());

        std::fs::write(path, buf)
    }

    /// Apply the defaults to an [`AppState`]. The caller refreshes afterwards.
    pub fn apply_to(&self, app: &mut AppState) {
        app.page_size = self.page_size.max(1);
        app.sort_by = self.sort_by;
        app.sort_order = self.sort_order;
    }
}
