use crate::api::models::count_or_zero;
use crate::app::state::LoadPhase;
use crate::app::App;
use crate::ui::format::thousands;
use crate::ui::widgets::charts::render_breakdown_chart;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

pub fn render_home(app: &mut App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title area
            Constraint::Length(5), // Stat tiles
            Constraint::Min(8),    // Breakdown + per-wilayah table
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    render_title(f, chunks[0]);
    render_stat_tiles(app, f, chunks[1]);
    render_content(app, f, chunks[2]);
    render_status(app, f, chunks[3]);
    render_shortcuts(f, chunks[4]);
}

fn render_title(f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let title = Paragraph::new(Text::from(vec![
        TextLine::from(vec![
            Span::styled(
                "MBG ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Kabupaten Bandung",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(Span::styled(
            "Portal informasi Makan Bergizi Gratis",
            Style::default().fg(Color::Gray),
        )),
    ]))
    .block(title_block)
    .alignment(Alignment::Left);

    f.render_widget(title, area);
}

fn render_stat_tiles(app: &App, f: &mut Frame<'_>, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let kecamatan_count = app.kecamatan_options.len().saturating_sub(1);

    render_tile(
        f,
        tiles[0],
        "Unit SPPG",
        &thousands(app.home_stats.total_sppg),
        Color::Green,
    );
    render_tile(
        f,
        tiles[1],
        "Potensi Penerima",
        &thousands(app.home_stats.potensi_total),
        Color::Cyan,
    );
    render_tile(
        f,
        tiles[2],
        "Kecamatan",
        &kecamatan_count.to_string(),
        Color::Yellow,
    );
}

fn render_tile(f: &mut Frame<'_>, area: Rect, label: &str, value: &str, color: Color) {
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn render_content(app: &App, f: &mut Frame<'_>, area: Rect) {
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_breakdown_chart(&app.home_stats.breakdown, f, split[0]);

    let right_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(6)])
        .split(split[1]);

    render_potensi_table(app, f, right_split[0]);
    render_info_panel(f, right_split[1]);
}

fn render_potensi_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" Potensi per Wilayah ({}) ", app.potensi_rows.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.potensi_rows.is_empty() {
        let paragraph = Paragraph::new("Belum ada data potensi.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![Cell::from("Wilayah"), Cell::from("Potensi")]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let rows = app
        .potensi_rows
        .iter()
        .skip(app.potensi_scroll)
        .take(max_visible_rows)
        .map(|record| {
            Row::new(vec![
                Cell::from(record.wilayah.clone()),
                Cell::from(thousands(count_or_zero(record.total.as_ref()))),
            ])
        });

    let widths = [Constraint::Min(16), Constraint::Length(12)];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_info_panel(f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Tentang Program ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let lines = vec![
        TextLine::from(vec![
            Span::styled("MBG ", Style::default().fg(Color::Green)),
            Span::raw("menyediakan makan siang bergizi gratis bagi siswa sekolah, santri, balita, serta ibu hamil dan menyusui."),
        ]),
        TextLine::from(vec![
            Span::styled("SPPG ", Style::default().fg(Color::Green)),
            Span::raw("adalah unit dapur dan distribusi lokal yang mengantar makanan ke lokasi sasaran."),
        ]),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_status(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = area.inner(Margin::new(1, 1));
    f.render_widget(block, area);

    if let Some(error) = &app.data_error {
        let paragraph = Paragraph::new(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
        f.render_widget(paragraph, inner);
        return;
    }

    if app.home_phase == LoadPhase::Loading {
        let throbber = Throbber::default()
            .label("Sinkronisasi data beranda...")
            .style(Style::default().fg(Color::Cyan));
        f.render_stateful_widget(throbber, inner, &mut app.throbber);
        return;
    }

    let mut text = app
        .last_synced
        .map_or_else(String::new, |at| format!("Data tersinkron {}", at.format("%H:%M")));
    if !app.status_message.is_empty() {
        if !text.is_empty() {
            text.push_str("  |  ");
        }
        text.push_str(&app.status_message);
    }

    let paragraph = Paragraph::new(Span::styled(text, Style::default().fg(Color::Gray)));
    f.render_widget(paragraph, inner);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let help_text = vec![
        Span::styled("2", key_style),
        Span::raw(": Capaian   "),
        Span::styled("3", key_style),
        Span::raw(": Direktori SPPG   "),
        Span::styled("a", key_style),
        Span::raw(": Asisten   "),
        Span::styled("r", key_style),
        Span::raw(": Sync ulang   "),
        Span::styled("?", key_style),
        Span::raw(": Bantuan   "),
        Span::styled("q", key_style),
        Span::raw(": Keluar"),
    ];

    let paragraph = Paragraph::new(TextLine::from(help_text)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
