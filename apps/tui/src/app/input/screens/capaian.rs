use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_capaian_input(app: &mut App, key: KeyCode) {
    let total_rows = app.kecamatan_comparison.len();

    match key {
        KeyCode::Esc => app.navigate_to(AppScreen::Home),
        KeyCode::Up => {
            if app.selected_comparison_index > 0 {
                app.selected_comparison_index -= 1;
            }
        }
        KeyCode::Down => {
            if total_rows > 0 && app.selected_comparison_index + 1 < total_rows {
                app.selected_comparison_index += 1;
            }
        }
        KeyCode::PageUp => {
            app.selected_comparison_index = app.selected_comparison_index.saturating_sub(5);
        }
        KeyCode::PageDown => {
            if total_rows > 0 {
                let new_index = app.selected_comparison_index + 5;
                app.selected_comparison_index = if new_index >= total_rows {
                    total_rows - 1
                } else {
                    new_index
                };
            }
        }
        KeyCode::Home => {
            app.selected_comparison_index = 0;
        }
        KeyCode::End => {
            if total_rows > 0 {
                app.selected_comparison_index = total_rows - 1;
            }
        }
        _ => {}
    }
}
