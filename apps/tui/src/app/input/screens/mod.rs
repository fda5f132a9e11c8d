use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod capaian;
mod chat;
mod help;
mod home;
mod sppg;
mod sppg_detail;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if app.show_help {
        help::handle_help_input(app, key);
        return;
    }

    // Text entry owns the keyboard; global shortcuts only apply outside it.
    let typing = app.screen == AppScreen::Chat
        || (app.screen == AppScreen::Sppg && app.search_active);
    if !typing {
        if help::handle_help_toggle(app, key) {
            return;
        }
        if handle_global_nav(app, key) {
            return;
        }
    }

    match app.screen {
        AppScreen::Home => home::handle_home_input(app, key),
        AppScreen::Capaian => capaian::handle_capaian_input(app, key),
        AppScreen::Sppg => sppg::handle_sppg_input(app, key),
        AppScreen::SppgDetail => sppg_detail::handle_sppg_detail_input(app, key),
        AppScreen::Chat => chat::handle_chat_input(app, key),
    }
}

fn handle_global_nav(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('1') => app.navigate_to(AppScreen::Home),
        KeyCode::Char('2') => app.navigate_to(AppScreen::Capaian),
        KeyCode::Char('3') => app.navigate_to(AppScreen::Sppg),
        KeyCode::Char('a') => app.navigate_to(AppScreen::Chat),
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => return false,
    }
    true
}
