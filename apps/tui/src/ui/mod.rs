// UI module for mbg-dash
// Handles all UI rendering functions

pub mod format;
pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Home => screens::home::render_home(app, f),
        AppScreen::Capaian => screens::capaian::render_capaian(app, f),
        AppScreen::Sppg => screens::sppg::render_sppg_directory(app, f),
        AppScreen::SppgDetail => screens::sppg_detail::render_sppg_detail(app, f),
        AppScreen::Chat => screens::chat::render_chat(app, f),
    }

    if app.show_help {
        widgets::popup::render_help_popup(f);
    }
}
