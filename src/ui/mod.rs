pub mod components;
pub mod players;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, InputMode, ModalState};
use crate::roster::Role;

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)].as_ref())
        .split(f.area());
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)].as_ref())
        .split(root[1]);

    let tabs = Role::ALL
        .iter()
        .map(|r| {
            if *r == app.role {
                format!("[{}]", r)
            } else {
                r.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    let prompt = match app.input_mode {
        InputMode::Search => format!("  Search: {}_", app.search_query),
        _ if !app.search_query.is_empty() => format!("  Search: {}", app.search_query),
        _ => String::new(),
    };
    let p = Paragraph::new(format!(
        "Indian T20 player stats  {tabs}{prompt}  {} player{}  |  Tab: role  /: search  f: filter  s: sort  Enter: profile  q: quit",
        app.result.total_matches,
        if app.result.total_matches == 1 { "" } else { "s" },
    ))
    .block(
        Block::default()
            .title("t20stats-tui")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .style(Style::default().fg(app.theme.header_fg).bg(app.theme.header_bg));
    f.render_widget(p, root[0]);

    players::render_players_table(f, body[0], app);
    players::render_player_details(f, body[1], app);

    components::render_status_bar(f, root[2], app);

    if app.modal.is_some() {
        render_modal(f, f.area(), app);
    }
}

fn render_modal(f: &mut Frame, area: Rect, app: &mut AppState) {
    if let Some(state) = app.modal.clone() {
        match state {
            ModalState::FilterMenu { .. } | ModalState::FilterInput { .. } => {
                components::render_filter_modal(f, area, app, &state);
            }
            ModalState::SortMenu { .. } => {
                components::render_sort_modal(f, area, app, &state);
            }
            ModalState::Profile { .. } => {
                players::render_profile_modal(f, area, app, &state);
            }
            ModalState::Info { .. } => {
                components::render_info_modal(f, area, app, &state);
            }
        }
    }
}
