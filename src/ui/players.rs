use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};

use crate::app::{AppState, ModalState};
use crate::roster::{StatField, StatValue};
use crate::ui::components::{centered_rect, format_number};

/// Stat cell text for the listing and profile views; absent fields render
/// as a dash.
fn stat_cell(player: &crate::roster::Player, field: StatField) -> String {
    match player.stat(field) {
        // Economy always carries two decimals, even for whole numbers
        Some(StatValue::Num(n)) if field == StatField::Economy => format!("{:.2}", n),
        Some(StatValue::Num(n)) if n.fract() == 0.0 => format_number(n as u64),
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

pub fn render_players_table(f: &mut Frame, area: Rect, app: &mut AppState) {
    let fields = app.role.stat_fields();

    let rows = app.result.page_items.iter().enumerate().map(|(i, p)| {
        let style = if i == app.selected_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let mut cells = vec![Cell::from(p.name.clone())];
        cells.extend(fields.iter().map(|field| Cell::from(stat_cell(p, *field))));
        Row::new(cells).style(style)
    });

    let mut widths = vec![Constraint::Min(20)];
    widths.extend(fields.iter().map(|_| Constraint::Length(14)));

    let mut header_cells = vec!["Name"];
    header_cells.extend(fields.iter().map(|field| field.label()));
    let header = Row::new(header_cells)
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD));

    let title = format!(
        "{}s  page {}/{}",
        app.role,
        app.page.min(app.result.total_pages.max(1)),
        app.result.total_pages,
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

pub fn render_player_details(f: &mut Frame, area: Rect, app: &AppState) {
    let text = match app.selected_player() {
        Some(p) => {
            let mut lines = vec![
                format!("Name: {}", p.name),
                format!("Role: {}", app.role),
                format!("Slug: {}", p.slug),
                String::new(),
            ];
            lines.extend(
                app.role
                    .stat_fields()
                    .iter()
                    .map(|field| format!("{}: {}", field.label(), stat_cell(p, *field))),
            );
            lines.join("\n")
        }
        None => "No players match the current search and filters.".to_string(),
    };
    let p = Paragraph::new(text)
        .style(Style::default().fg(app.theme.text))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Details")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(p, area);
}

/// Full profile card, looked up by slug. An unknown slug renders the
/// not-found view rather than an empty record.
pub fn render_profile_modal(f: &mut Frame, area: Rect, app: &AppState, state: &ModalState) {
    if let ModalState::Profile { slug } = state {
        let width = 52u16.min(area.width.saturating_sub(4)).max(40);
        let height = 14u16.min(area.height.saturating_sub(4)).max(8);
        let rect = centered_rect(width, height, area);

        let body = match app.roster.find_by_slug(slug) {
            Some((role, p)) => {
                let mut lines = vec![
                    format!("{}", p.name),
                    format!("Indian T20 {}", role),
                    String::new(),
                ];
                lines.extend(
                    role.stat_fields()
                        .iter()
                        .map(|field| format!("  {:<14} {}", field.label(), stat_cell(p, *field))),
                );
                lines.push(String::new());
                lines.push("Esc/Enter: close".to_string());
                lines.join("\n")
            }
            None => format!("Player not found: {}\n\nEsc/Enter: close", slug),
        };

        let p = Paragraph::new(body).wrap(Wrap { trim: false }).block(
            Block::default()
                .title("Player profile")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
        f.render_widget(Clear, rect);
        f.render_widget(p, rect);
    }
}
