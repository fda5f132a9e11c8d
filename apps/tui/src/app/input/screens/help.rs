use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::Char('?') {
        app.show_help = true;
        return true;
    }
    false
}

pub fn handle_help_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
        app.show_help = false;
    }
}
