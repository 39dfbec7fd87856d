//! Application state types and entry glue.
//!
//! Defines the TUI state model: the immutable roster, the current query
//! values, and the last query result, plus theming and modal state. The
//! query engine is re-run wholesale on every change (`refresh`).

pub mod queryconf;
pub mod update;

use ratatui::style::Color;
use std::collections::BTreeMap;

use crate::query::{self, FilterKey, Query, QueryResult, SortOrder};
use crate::roster::{Player, Role, Roster, StatField};

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Modal,
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

impl Theme {
    /// Dark default theme.
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            header_bg: Color::Black,
            header_fg: Color::Cyan,
            status_bg: Color::DarkGray,
            status_fg: Color::Black,
            highlight_fg: Color::Yellow,
            highlight_bg: Color::Reset,
        }
    }

    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            muted: Color::Rgb(0x7f, 0x84, 0x9c),
            title: Color::Rgb(0xcb, 0xa6, 0xf7),
            border: Color::Rgb(0x58, 0x5b, 0x70),
            header_bg: Color::Rgb(0x31, 0x32, 0x44),
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf),
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a),
        }
    }

    /// Load theme from a simple key=value file. Unknown or missing keys fall
    /// back to `mocha`.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let mut theme = Self::mocha();

        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '=');
            let key = parts.next().map(|s| s.trim()).unwrap_or("");
            let val = parts.next().map(|s| s.trim()).unwrap_or("");
            if key.is_empty() || val.is_empty() {
                continue;
            }
            if let Some(color) = Self::parse_color(val) {
                match key {
                    "text" => theme.text = color,
                    "muted" => theme.muted = color,
                    "title" => theme.title = color,
                    "border" => theme.border = color,
                    "header_bg" => theme.header_bg = color,
                    "header_fg" => theme.header_fg = color,
                    "status_bg" => theme.status_bg = color,
                    "status_fg" => theme.status_fg = color,
                    "highlight_fg" => theme.highlight_fg = color,
                    "highlight_bg" => theme.highlight_bg = color,
                    _ => {}
                }
            }
        }

        Some(theme)
    }

    /// Parse a color from hex ("#RRGGBB" or "RRGGBB") or the special name "reset".
    fn parse_color(s: &str) -> Option<Color> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "reset" {
            return Some(Color::Reset);
        }
        let hex = lower.strip_prefix('#').unwrap_or(lower.as_str());
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Some(Color::Rgb(r, g, b));
            }
        }
        None
    }

    /// Persist the theme to a config file in key=value format.
    pub fn write_file(&self, path: &str) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# t20stats-tui theme configuration\n");
        buf.push_str("# Colors: hex as #RRGGBB or RRGGBB, or 'reset'\n\n");

        fn color_to_str(c: Color) -> String {
            match c {
                Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
                Color::Reset => "reset".to_string(),
                // Built-in palettes only use Rgb and Reset; anything else
                // round-trips as reset.
                _ => "reset".to_string(),
            }
        }

        let mut kv = |k: &str, v: Color| {
            let _ = writeln!(&mut buf, "{} = {}", k, color_to_str(v));
        };

        kv("text", self.text);
        kv("muted", self.muted);
        kv("title", self.title);
        kv("border", self.border);
        kv("header_bg", self.header_bg);
        kv("header_fg", self.header_fg);
        kv("status_bg", self.status_bg);
        kv("status_fg", self.status_fg);
        kv("highlight_fg", self.highlight_fg);
        kv("highlight_bg", self.highlight_bg);

        std::fs::write(path, buf)
    }

    /// Ensure a config file exists; if missing, write one with the default
    /// theme and return it. If present, load from it; on parse errors, return
    /// `mocha`.
    pub fn load_or_init(path: &str) -> Self {
        let p = std::path::Path::new(path);
        if p.exists() {
            return Self::from_file(path).unwrap_or_else(Self::mocha);
        }
        let t = Self::mocha();
        let _ = t.write_file(path);
        t
    }
}

/// Modal dialog states.
#[derive(Clone, Debug)]
pub enum ModalState {
    /// Per-role filter key list with current values; Enter edits a value.
    FilterMenu { selected: usize },
    /// Text input for one filter value.
    FilterInput { key: FilterKey, value: String },
    /// Sortable field list; Enter selects (re-selecting toggles the order).
    SortMenu { selected: usize },
    /// Player profile looked up by slug; an unknown slug renders not-found.
    Profile { slug: String },
    Info { message: String },
}

pub struct AppState {
    pub roster: Roster,
    pub role: Role,
    pub search_query: String,
    pub filters: BTreeMap<FilterKey, String>,
    pub sort_by: Option<StatField>,
    pub sort_order: SortOrder,
    pub page: usize,
    pub page_size: usize,
    pub result: QueryResult,
    pub selected_index: usize,
    pub input_mode: InputMode,
    pub theme: Theme,
    pub modal: Option<ModalState>,
}

impl AppState {
    /// Create an `AppState` over an already-loaded roster and run the initial
    /// (unfiltered) query.
    pub fn new(roster: Roster, page_size: usize, theme: Theme) -> Self {
        let mut app = Self {
            roster,
            role: Role::Batsman,
            search_query: String::new(),
            filters: BTreeMap::new(),
            sort_by: None,
            sort_order: SortOrder::Desc,
            page: 1,
            page_size: page_size.max(1),
            result: QueryResult {
                total_matches: 0,
                total_pages: 0,
                page_items: Vec::new(),
            },
            selected_index: 0,
            input_mode: InputMode::Normal,
            theme,
            modal: None,
        };
        app.refresh();
        app
    }

    /// Assemble the current query values into an engine request.
    pub fn query(&self) -> Query {
        Query {
            search_text: self.search_query.clone(),
            filters: self.filters.clone(),
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Re-run the query engine against the active role partition and clamp
    /// the selection to the new page.
    pub fn refresh(&mut self) {
        self.result = query::run(self.roster.by_role(self.role), self.role, &self.query());
        self.selected_index = self
            .selected_index
            .min(self.result.page_items.len().saturating_sub(1));
    }

    /// Changing search text or filters resets pagination to the first page.
    pub fn reset_page(&mut self) {
        self.page = 1;
        self.selected_index = 0;
    }

    pub fn selected_player(&self) -> Option<&Player> {
        self.result.page_items.get(self.selected_index)
    }

    pub fn next_page(&mut self) {
        if self.page < self.result.total_pages {
            self.page += 1;
            self.selected_index = 0;
            self.refresh();
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
            self.selected_index = 0;
            self.refresh();
        }
    }

    /// Switch role tab; query state carries over but pagination restarts.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.reset_page();
        self.refresh();
    }

    /// Drop search text and all filters.
    pub fn clear_query(&mut self) {
        self.search_query.clear();
        self.filters.clear();
        self.reset_page();
        self.refresh();
    }

    /// Fields the current role can sort by, name first.
    pub fn sortable_fields(&self) -> Vec<StatField> {
        let mut fields = vec![StatField::Name];
        fields.extend_from_slice(self.role.stat_fields());
        fields
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
