use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_sppg_detail_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Esc | KeyCode::Backspace) {
        app.detail_unit_index = None;
        app.navigate_to(AppScreen::Sppg);
    }
}
