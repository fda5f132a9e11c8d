use crate::app::App;
use crate::ui::format::{percentage, thousands};
use crate::ui::widgets::charts::render_achievement_gauge;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_sppg_detail(app: &mut App, f: &mut Frame<'_>) {
    let area = f.area().inner(Margin::new(2, 1));

    let Some(unit) = app.detail_unit() else {
        let block = Block::default()
            .title(" Detail SPPG ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("Tidak ada unit terpilih.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };
    let unit = unit.clone();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Identity + counters
            Constraint::Length(3), // Contribution gauge
            Constraint::Min(6),    // Kecamatan cross-reference
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area);

    render_identity(&unit, f, chunks[0]);

    render_achievement_gauge(
        app.unit_contribution(&unit),
        format!(
            "{} dari {} porsi",
            thousands(unit.total_realization),
            thousands(app.analytical_stats.total_realization)
        ),
        "Kontribusi terhadap Realisasi Kabupaten",
        f,
        chunks[1],
    );

    render_kecamatan_panel(app, &unit.kecamatan, f, chunks[2]);
    render_shortcuts(f, chunks[3]);
}

fn render_identity(unit: &crate::domain::SppgUnit, f: &mut Frame<'_>, area: Rect) {
    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default().fg(Color::White);

    let lokasi = if unit.lokasi.is_empty() {
        "-"
    } else {
        unit.lokasi.as_str()
    };

    let lines = vec![
        TextLine::from(vec![
            Span::styled("Kecamatan : ", label_style),
            Span::styled(unit.kecamatan.clone(), value_style),
        ]),
        TextLine::from(vec![
            Span::styled("Desa      : ", label_style),
            Span::styled(unit.desa.clone(), value_style),
        ]),
        TextLine::from(vec![
            Span::styled("Lokasi    : ", label_style),
            Span::styled(lokasi.to_string(), value_style),
        ]),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("Laki-laki : ", label_style),
            Span::styled(thousands(unit.total_laki), Style::default().fg(Color::Blue)),
            Span::styled("   Perempuan : ", label_style),
            Span::styled(
                thousands(unit.total_perempuan),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled("   Total : ", label_style),
            Span::styled(
                thousands(unit.total_realization),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(format!(" {} ", unit.nama))
                .title_style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_kecamatan_panel(app: &App, kecamatan: &str, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" Capaian Kecamatan {kecamatan} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(comparison) = app.comparison_for_kecamatan(kecamatan) else {
        let paragraph = Paragraph::new("Data capaian kecamatan belum dimuat.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    let label_style = Style::default().fg(Color::Gray);
    let lines = vec![
        TextLine::from(vec![
            Span::styled("Target     : ", label_style),
            Span::styled(
                thousands(comparison.target),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        TextLine::from(vec![
            Span::styled("Realisasi  : ", label_style),
            Span::styled(
                thousands(comparison.realization),
                Style::default().fg(Color::Green),
            ),
        ]),
        TextLine::from(vec![
            Span::styled("Capaian    : ", label_style),
            Span::styled(
                percentage(comparison.percentage),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(vec![
            Span::styled("Unit aktif : ", label_style),
            Span::raw(format!("{} SPPG melapor di kecamatan ini", comparison.sppg_count)),
        ]),
    ];

    let paragraph = Paragraph::new(Text::from(lines)).block(block);
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let help_text = vec![
        Span::styled("Esc", key_style),
        Span::raw(": Kembali ke direktori   "),
        Span::styled("q", key_style),
        Span::raw(": Keluar"),
    ];

    let paragraph = Paragraph::new(TextLine::from(help_text)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
