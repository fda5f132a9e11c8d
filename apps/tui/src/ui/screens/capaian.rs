use crate::app::state::LoadPhase;
use crate::app::App;
use crate::ui::format::{percentage, thousands};
use crate::ui::widgets::charts::render_achievement_gauge;
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

pub fn render_capaian(app: &mut App, f: &mut Frame<'_>) {
    let area = f.area().inner(Margin::new(2, 1));

    if app.analytical_phase == LoadPhase::Loading {
        render_loading(app, f, area);
        return;
    }

    if app.kecamatan_comparison.is_empty() {
        let block = Block::default()
            .title(" Capaian Harian ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("Data capaian belum tersedia.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Stat tiles
            Constraint::Length(3), // Overall gauge
            Constraint::Min(5),    // Comparison table
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area);

    render_stat_tiles(app, f, chunks[0]);

    let stats = app.analytical_stats;
    render_achievement_gauge(
        stats.overall_percentage(),
        format!(
            "{} / {} ({})",
            thousands(stats.total_realization),
            thousands(stats.total_target),
            percentage(stats.overall_percentage())
        ),
        "Capaian Keseluruhan",
        f,
        chunks[1],
    );

    render_comparison_table(app, f, chunks[2]);
    render_shortcuts(f, chunks[3]);
}

fn render_loading(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Capaian Harian ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = area.inner(Margin::new(1, 1));
    f.render_widget(block, area);

    let throbber = Throbber::default()
        .label("Memuat data capaian...")
        .style(Style::default().fg(Color::Cyan));
    f.render_stateful_widget(throbber, inner, &mut app.throbber);
}

fn render_stat_tiles(app: &App, f: &mut Frame<'_>, area: Rect) {
    let stats = app.analytical_stats;
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let values = [
        ("Target", stats.total_target, Color::Yellow),
        ("Realisasi", stats.total_realization, Color::Green),
        ("Laki-laki", stats.total_laki, Color::Blue),
        ("Perempuan", stats.total_perempuan, Color::Magenta),
    ];

    for (i, (label, value, color)) in values.into_iter().enumerate() {
        let block = Block::default()
            .title(format!(" {label} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let paragraph = Paragraph::new(Span::styled(
            thousands(value),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(paragraph, tiles[i]);
    }
}

fn render_comparison_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Kecamatan"),
        Cell::from("Target"),
        Cell::from("Realisasi"),
        Cell::from("Capaian"),
        Cell::from("SPPG"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = app.kecamatan_comparison.len();
    let max_visible_rows = area.height.saturating_sub(4) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_comparison_index);

    let rows = app
        .kecamatan_comparison
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(i, row)| {
            let style = if i == app.selected_comparison_index {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if row.percentage >= 100.0 {
                Style::default().fg(Color::Green)
            } else if row.percentage >= 50.0 {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(row.name.clone()),
                Cell::from(thousands(row.target)),
                Cell::from(thousands(row.realization)),
                Cell::from(percentage(row.percentage)),
                Cell::from(row.sppg_count.to_string()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Min(18),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(9),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    " Capaian per Kecamatan ({} of {}) ",
                    app.selected_comparison_index + 1,
                    total_rows
                ))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let help_text = vec![
        Span::styled("↑/↓", key_style),
        Span::raw(": Navigasi   "),
        Span::styled("PgUp/PgDn", key_style),
        Span::raw(": Lompat 5   "),
        Span::styled("Esc", key_style),
        Span::raw(": Beranda   "),
        Span::styled("q", key_style),
        Span::raw(": Keluar"),
    ];

    let paragraph = Paragraph::new(TextLine::from(help_text)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
