use crate::app::state::LoadPhase;
use crate::app::App;
use crate::ui::format::thousands;
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_sppg_directory(app: &mut App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search + filter bar
            Constraint::Min(5),    // Directory table
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    render_filter_bar(app, f, chunks[0]);
    render_directory_table(app, f, chunks[1]);
    render_shortcuts(app, f, chunks[2]);
}

fn render_filter_bar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let search_style = if app.search_active {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };
    let search_text = if app.search_active {
        format!("{}▌", app.sppg_search)
    } else if app.sppg_search.is_empty() {
        "tekan / untuk mencari".to_string()
    } else {
        app.sppg_search.clone()
    };
    let search = Paragraph::new(search_text).block(
        Block::default()
            .title(" Cari ")
            .borders(Borders::ALL)
            .border_style(search_style),
    );
    f.render_widget(search, split[0]);

    let filter = Paragraph::new(TextLine::from(vec![
        Span::styled(
            app.selected_kecamatan().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ←/→", Style::default().fg(Color::Gray)),
    ]))
    .block(
        Block::default()
            .title(" Kecamatan ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(filter, split[1]);
}

fn render_directory_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let total_rows = app.filtered_sppg_indices.len();

    let block = Block::default()
        .title(format!(
            " Direktori SPPG ({} of {}) ",
            if total_rows == 0 {
                0
            } else {
                app.selected_row_index + 1
            },
            total_rows
        ))
        .borders(Borders::ALL);

    if total_rows == 0 {
        let paragraph = Paragraph::new("Tidak ada unit yang cocok dengan filter.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Nama Unit"),
        Cell::from("Kecamatan"),
        Cell::from("Desa"),
        Cell::from("Realisasi"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let max_visible_rows = area.height.saturating_sub(4) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_row_index);

    let rows = app
        .filtered_sppg_indices
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .filter_map(|(i, &unit_index)| {
            let unit = app.sppg_list.get(unit_index)?;
            let style = if i == app.selected_row_index {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if unit.total_realization > 0 {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };

            Some(
                Row::new(vec![
                    Cell::from(unit.nama.clone()),
                    Cell::from(unit.kecamatan.clone()),
                    Cell::from(unit.desa.clone()),
                    Cell::from(thousands(unit.total_realization)),
                ])
                .style(style),
            )
        });

    let widths = [
        Constraint::Min(24),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut help_text = vec![
        Span::styled("/", key_style),
        Span::raw(": Cari   "),
        Span::styled("←/→", key_style),
        Span::raw(": Filter kecamatan   "),
        Span::styled("Enter", key_style),
        Span::raw(": Detail   "),
        Span::styled("Esc", key_style),
        Span::raw(": Kembali   "),
        Span::styled("q", key_style),
        Span::raw(": Keluar"),
    ];

    if app.analytical_phase == LoadPhase::Loading {
        help_text.push(Span::styled(
            "   memuat data realisasi...",
            Style::default().fg(Color::Cyan),
        ));
    }

    let paragraph = Paragraph::new(TextLine::from(help_text)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
