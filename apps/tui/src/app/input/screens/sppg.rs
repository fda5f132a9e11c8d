use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_sppg_input(app: &mut App, key: KeyCode) {
    if app.search_active {
        handle_search_input(app, key);
        return;
    }

    let total_rows = app.filtered_sppg_indices.len();

    match key {
        KeyCode::Char('/') => {
            app.search_active = true;
        }
        KeyCode::Left => app.cycle_kecamatan_filter(false),
        KeyCode::Right => app.cycle_kecamatan_filter(true),
        KeyCode::Enter => app.open_selected_detail(),
        KeyCode::Esc => {
            if app.sppg_search.is_empty() {
                app.navigate_to(AppScreen::Home);
            } else {
                app.clear_search();
            }
        }
        KeyCode::Up => {
            if app.selected_row_index > 0 {
                app.selected_row_index -= 1;
            }
        }
        KeyCode::Down => {
            if total_rows > 0 && app.selected_row_index + 1 < total_rows {
                app.selected_row_index += 1;
            }
        }
        KeyCode::PageUp => {
            app.selected_row_index = app.selected_row_index.saturating_sub(5);
        }
        KeyCode::PageDown => {
            if total_rows > 0 {
                let new_index = app.selected_row_index + 5;
                app.selected_row_index = if new_index >= total_rows {
                    total_rows - 1
                } else {
                    new_index
                };
            }
        }
        KeyCode::Home => {
            app.selected_row_index = 0;
        }
        KeyCode::End => {
            if total_rows > 0 {
                app.selected_row_index = total_rows - 1;
            }
        }
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => {
            app.search_active = false;
        }
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(ch) => app.push_search_char(ch),
        _ => {}
    }
}
