use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use ratatui::Frame;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
            ratatui::layout::Constraint::Percentage(percent_y),
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
            ratatui::layout::Constraint::Percentage(percent_x),
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    horizontal_layout[1]
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}

pub fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(ClearWidget, area);

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        TextLine::from(Span::styled("Navigasi", key_style)),
        TextLine::from("  1        Beranda"),
        TextLine::from("  2        Capaian per kecamatan"),
        TextLine::from("  3        Direktori SPPG"),
        TextLine::from("  a        Asisten MBG"),
        TextLine::from(""),
        TextLine::from(Span::styled("Daftar", key_style)),
        TextLine::from("  ↑/↓      Pindah baris"),
        TextLine::from("  PgUp/PgDn  Lompat 5 baris"),
        TextLine::from("  Home/End   Baris pertama/terakhir"),
        TextLine::from("  Enter    Buka detail (direktori)"),
        TextLine::from("  /        Cari unit"),
        TextLine::from("  ←/→      Ganti filter kecamatan"),
        TextLine::from(""),
        TextLine::from(Span::styled("Lainnya", key_style)),
        TextLine::from("  r        Sinkronisasi ulang (beranda)"),
        TextLine::from("  ?        Tutup bantuan"),
        TextLine::from("  q        Keluar"),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Bantuan ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(paragraph, area);
}
