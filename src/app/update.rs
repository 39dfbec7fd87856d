use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::time::Duration;

use crate::app::{AppState, InputMode, ModalState};
use crate::query::FilterKey;
use crate::roster::StatField;
use crate::ui;

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut app: AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, &mut app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.input_mode {
                        InputMode::Normal => {
                            if handle_normal_key(&mut app, key.code) {
                                break;
                            }
                        }
                        InputMode::Modal => {
                            handle_modal_key(&mut app, key.code);
                        }
                        InputMode::Search => match key.code {
                            KeyCode::Enter => {
                                app.input_mode = InputMode::Normal;
                            }
                            KeyCode::Esc => {
                                app.input_mode = InputMode::Normal;
                                app.search_query.clear();
                                app.reset_page();
                                app.refresh();
                            }
                            KeyCode::Backspace => {
                                app.search_query.pop();
                                app.reset_page();
                                app.refresh();
                            }
                            KeyCode::Char(c) => {
                                app.search_query.push(c);
                                app.reset_page();
                                app.refresh();
                            }
                            _ => {}
                        },
                    }
                }
            }
        }
    }

    Ok(())
}

/// Handle a key press in normal mode; returns true when the app should quit.
fn handle_normal_key(app: &mut AppState, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc => { /* ignore */ }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
        }
        KeyCode::Tab => {
            app.set_role(app.role.next());
        }
        KeyCode::BackTab => {
            app.set_role(app.role.prev());
        }
        KeyCode::Char('f') => {
            app.modal = Some(ModalState::FilterMenu { selected: 0 });
            app.input_mode = InputMode::Modal;
        }
        KeyCode::Char('s') => {
            app.modal = Some(ModalState::SortMenu { selected: 0 });
            app.input_mode = InputMode::Modal;
        }
        KeyCode::Char('o') => {
            app.sort_order = app.sort_order.toggled();
            app.refresh();
        }
        KeyCode::Char('c') => {
            app.clear_query();
        }
        KeyCode::Enter => match app.selected_player() {
            Some(p) => {
                let slug = p.slug.clone();
                app.modal = Some(ModalState::Profile { slug });
                app.input_mode = InputMode::Modal;
            }
            None => {
                app.modal = Some(ModalState::Info {
                    message: "No players match the current search and filters.".to_string(),
                });
                app.input_mode = InputMode::Modal;
            }
        },
        KeyCode::Up | KeyCode::Char('k') => {
            if app.selected_index > 0 {
                app.selected_index -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.selected_index + 1 < app.result.page_items.len() {
                app.selected_index += 1;
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.prev_page();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_page();
        }
        _ => {}
    }
    false
}

fn handle_modal_key(app: &mut AppState, code: KeyCode) {
    match &mut app.modal {
        Some(ModalState::FilterMenu { selected }) => {
            let total = FilterKey::for_role(app.role).len();
            match code {
                KeyCode::Esc => close_modal(app),
                KeyCode::Up | KeyCode::Char('k') => {
                    if *selected > 0 {
                        *selected -= 1;
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if *selected + 1 < total {
                        *selected += 1;
                    }
                }
                KeyCode::Enter => {
                    let idx = *selected;
                    let key = FilterKey::for_role(app.role)[idx];
                    let value = app.filters.get(&key).cloned().unwrap_or_default();
                    app.modal = Some(ModalState::FilterInput { key, value });
                }
                // Drop the selected filter entirely
                KeyCode::Delete | KeyCode::Char('d') => {
                    let idx = *selected;
                    let key = FilterKey::for_role(app.role)[idx];
                    if app.filters.remove(&key).is_some() {
                        app.reset_page();
                        app.refresh();
                    }
                }
                _ => {}
            }
        }
        Some(ModalState::FilterInput { key, value }) => match code {
            KeyCode::Esc => close_modal(app),
            KeyCode::Enter => {
                let (key, value) = (*key, value.clone());
                if value.trim().is_empty() {
                    app.filters.remove(&key);
                } else {
                    app.filters.insert(key, value);
                }
                app.reset_page();
                app.refresh();
                let selected = FilterKey::for_role(app.role)
                    .iter()
                    .position(|k| *k == key)
                    .unwrap_or(0);
                app.modal = Some(ModalState::FilterMenu { selected });
            }
            KeyCode::Backspace => {
                value.pop();
            }
            KeyCode::Char(c) => {
                value.push(c);
            }
            _ => {}
        },
        Some(ModalState::SortMenu { selected }) => {
            let mut fields = vec![StatField::Name];
            fields.extend_from_slice(app.role.stat_fields());
            match code {
                KeyCode::Esc => close_modal(app),
                KeyCode::Up | KeyCode::Char('k') => {
                    if *selected > 0 {
                        *selected -= 1;
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if *selected + 1 < fields.len() {
                        *selected += 1;
                    }
                }
                KeyCode::Enter => {
                    let field = fields[*selected];
                    if app.sort_by == Some(field) {
                        app.sort_order = app.sort_order.toggled();
                    } else {
                        app.sort_by = Some(field);
                    }
                    app.refresh();
                    close_modal(app);
                }
                // Back to roster order
                KeyCode::Delete | KeyCode::Char('d') => {
                    app.sort_by = None;
                    app.refresh();
                    close_modal(app);
                }
                _ => {}
            }
        }
        Some(ModalState::Profile { .. }) | Some(ModalState::Info { .. }) => match code {
            KeyCode::Esc | KeyCode::Enter => close_modal(app),
            _ => {}
        },
        None => {}
    }
}

fn close_modal(app: &mut AppState) {
    app.modal = None;
    app.input_mode = InputMode::Normal;
}
