//! Shared UI components (status bar, modal helpers, formatting).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::{AppState, InputMode, ModalState};
use crate::query::FilterKey;
use crate::roster::StatField;

/// Render the bottom status bar with mode, counts, and active query state.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
        InputMode::Modal => "MODAL",
    };
    let chips = app
        .filters
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>();
    let chips_str = if chips.is_empty() {
        String::new()
    } else {
        format!("  filters:[{}]", chips.join(","))
    };
    let sort_str = match app.sort_by {
        Some(field) => format!("  sort:{} {}", field, app.sort_order.as_str()),
        None => String::new(),
    };
    let msg = format!(
        "mode: {mode}  role: {}  matches:{}  page:{}/{}{}{}",
        app.role, app.result.total_matches, app.page, app.result.total_pages, sort_str, chips_str
    );
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}

/// Compute a rectangle centered within `area` with a maximum size.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Group digits with commas, e.g. 4188 -> "4,188".
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a generic informational modal dialog.
pub fn render_info_modal(f: &mut Frame, area: Rect, app: &AppState, state: &ModalState) {
    if let ModalState::Info { message } = state {
        let max_w = area.width.saturating_sub(6).max(30);
        let min_w = 40u16.min(max_w);
        let approx_lines = (message.len() as u16 / (min_w.saturating_sub(4).max(10))).max(1);
        let max_h = area.height.saturating_sub(6).max(5);
        let height = (approx_lines + 4).min(max_h).max(5);
        let rect = centered_rect(min_w, height, area);
        let p = Paragraph::new(message.clone())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title("Info")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            );
        f.render_widget(Clear, rect);
        f.render_widget(p, rect);
    }
}

/// Render the filter menu (per-role keys with current values) or the value
/// input for a single filter.
pub fn render_filter_modal(f: &mut Frame, area: Rect, app: &AppState, state: &ModalState) {
    match state {
        ModalState::FilterMenu { selected } => {
            let keys = FilterKey::for_role(app.role);
            let width = 52u16.min(area.width.saturating_sub(4)).max(40);
            let height = (keys.len() as u16 + 4).min(area.height.saturating_sub(4));
            let rect = centered_rect(width, height, area);
            let mut text = String::new();
            for (idx, key) in keys.iter().enumerate() {
                let marker = if idx == *selected { "▶" } else { " " };
                let value = app
                    .filters
                    .get(key)
                    .map(|v| v.as_str())
                    .unwrap_or("(unset)");
                text.push_str(&format!("{} {:<28} {}\n", marker, key.label(), value));
            }
            text.push_str("\nEnter: edit  d: clear  Esc: close");
            let p = Paragraph::new(text).block(
                Block::default()
                    .title(format!("Filter {}s", app.role))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            );
            f.render_widget(Clear, rect);
            f.render_widget(p, rect);
        }
        ModalState::FilterInput { key, value } => {
            let rect = centered_rect(50, 7, area);
            // A non-numeric value is simply ignored by the engine; say so
            // instead of blocking input.
            let msg = format!(
                "{}:\n{}_\n\nNon-numeric input is ignored (no constraint)",
                key.label(),
                value
            );
            let p = Paragraph::new(msg).block(
                Block::default()
                    .title("Filter value")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            );
            f.render_widget(Clear, rect);
            f.render_widget(p, rect);
        }
        _ => {}
    }
}

/// Render the sort field menu for the active role.
pub fn render_sort_modal(f: &mut Frame, area: Rect, app: &AppState, state: &ModalState) {
    if let ModalState::SortMenu { selected } = state {
        let mut fields = vec![StatField::Name];
        fields.extend_from_slice(app.role.stat_fields());
        let width = 44u16.min(area.width.saturating_sub(4)).max(34);
        let height = (fields.len() as u16 + 4).min(area.height.saturating_sub(4));
        let rect = centered_rect(width, height, area);
        let mut text = String::new();
        for (idx, field) in fields.iter().enumerate() {
            let marker = if idx == *selected { "▶" } else { " " };
            let active = if app.sort_by == Some(*field) {
                format!(" ({})", app.sort_order.as_str())
            } else {
                String::new()
            };
            text.push_str(&format!("{} {}{}\n", marker, field.label(), active));
        }
        text.push_str("\nEnter: sort (again: flip)  d: roster order");
        let p = Paragraph::new(text).block(
            Block::default()
                .title("Sort by")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
        f.render_widget(Clear, rect);
        f.render_widget(p, rect);
    }
}
