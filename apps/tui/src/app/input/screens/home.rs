use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_home_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('r') => app.request_home_refresh(),
        KeyCode::Enter => app.navigate_to(AppScreen::Capaian),
        KeyCode::Up => {
            app.potensi_scroll = app.potensi_scroll.saturating_sub(1);
        }
        KeyCode::Down => {
            if app.potensi_scroll + 1 < app.potensi_rows.len() {
                app.potensi_scroll += 1;
            }
        }
        _ => {}
    }
}
