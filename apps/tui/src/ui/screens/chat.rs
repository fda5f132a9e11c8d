use crate::app::state::ChatRole;
use crate::app::App;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

pub fn render_chat(app: &mut App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Transcript
            Constraint::Length(3), // Input line
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    render_transcript(app, f, chunks[0]);
    render_input(app, f, chunks[1]);
    render_shortcuts(f, chunks[2]);
}

fn render_transcript(app: &mut App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let block = Block::default()
        .title(" Asisten MBG ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = area.inner(Margin::new(1, 1));
    f.render_widget(block, area);

    let mut lines: Vec<TextLine<'_>> = Vec::new();

    if app.chat_messages.is_empty() {
        lines.push(TextLine::from(Span::styled(
            "Halo! Saya asisten virtual program MBG Kabupaten Bandung.",
            Style::default().fg(Color::Gray),
        )));
        lines.push(TextLine::from(Span::styled(
            "Tanyakan apa saja tentang program, gizi, atau unit pelayanan.",
            Style::default().fg(Color::Gray),
        )));
    }

    for message in &app.chat_messages {
        let (prefix, style) = match message.role {
            ChatRole::User => (
                "Anda",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            ChatRole::Assistant => (
                "Asisten",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(TextLine::from(Span::styled(format!("{prefix}:"), style)));
        lines.push(TextLine::from(message.text.clone()));
        lines.push(TextLine::from(""));
    }

    // keep the tail of the conversation in view
    let visible = inner.height as usize;
    let scroll = lines.len().saturating_sub(visible);

    #[allow(clippy::cast_possible_truncation)]
    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));
    f.render_widget(paragraph, inner);

    if app.chat_waiting {
        let throbber_area = ratatui::layout::Rect {
            x: inner.x,
            y: inner.y + inner.height.saturating_sub(1),
            width: inner.width,
            height: 1,
        };
        let throbber = Throbber::default()
            .label("Asisten sedang menulis...")
            .style(Style::default().fg(Color::Green));
        f.render_stateful_widget(throbber, throbber_area, &mut app.throbber);
    }
}

fn render_input(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let border = if app.chat_waiting {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let paragraph = Paragraph::new(format!("{}▌", app.chat_input)).block(
        Block::default()
            .title(" Pertanyaan Anda ")
            .borders(Borders::ALL)
            .border_style(border),
    );

    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let help_text = vec![
        Span::styled("Enter", key_style),
        Span::raw(": Kirim   "),
        Span::styled("Esc", key_style),
        Span::raw(": Kembali ke beranda"),
    ];

    let paragraph = Paragraph::new(TextLine::from(help_text)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
