use crate::domain::PotentialBreakdown;
use crate::ui::format::thousands;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge};
use ratatui::Frame;

const CATEGORY_COLORS: [Color; 8] = [
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
    Color::Yellow,
    Color::LightRed,
    Color::LightMagenta,
    Color::Gray,
];

/// Horizontal-ish bar chart of the eight potential categories.
pub fn render_breakdown_chart(breakdown: &PotentialBreakdown, f: &mut Frame<'_>, area: Rect) {
    let bars: Vec<Bar<'_>> = breakdown
        .entries()
        .iter()
        .zip(CATEGORY_COLORS)
        .map(|(&(label, value), color)| {
            #[allow(clippy::cast_sign_loss)]
            let magnitude = value.max(0) as u64;
            Bar::default()
                .value(magnitude)
                .text_value(thousands(value))
                .label(label)
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Potensi per Kategori ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .bar_width(9)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

/// Achievement gauge; ratios above 100% stay pinned at a full bar while the
/// label keeps the real number.
pub fn render_achievement_gauge(
    percentage: f64,
    label: String,
    title: &str,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .gauge_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .ratio((percentage / 100.0).clamp(0.0, 1.0))
        .label(label);

    f.render_widget(gauge, area);
}
