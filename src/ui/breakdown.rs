use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::summary::breakdown_view;
use crate::App;

/// Bar per distinct word in the ledger, in first-appearance order. Bar
/// heights use the rounded percentage; the exact two-decimal figure is
/// printed on the bar itself.
pub fn render_breakdown(app: &App, f: &mut Frame) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Word Breakdown")
        .block(Block::default().borders(Borders::ALL).title("jumblr"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let slices = breakdown_view(app.session.ledger());

    if slices.is_empty() {
        let no_data = Paragraph::new(
            "Nothing to chart yet.\nSolve a few scrambles to see which words keep coming up!",
        )
        .block(Block::default().borders(Borders::ALL).title("No Data"))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
        f.render_widget(no_data, chunks[1]);
    } else {
        let bars: Vec<Bar> = slices
            .iter()
            .map(|slice| {
                Bar::default()
                    .value(slice.percentage.round() as u64)
                    .label(Line::from(slice.word.as_str().to_string()))
                    .text_value(percentage_label(slice.percentage))
            })
            .collect();

        let bar_width = slices
            .iter()
            .map(|slice| slice.word.as_str().width())
            .max()
            .unwrap_or(0)
            .max(8) as u16;

        let chart = BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("share of recent wins"),
            )
            .bar_width(bar_width)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Magenta))
            .value_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            );

        f.render_widget(chart, chunks[1]);
    }

    let instructions = Paragraph::new("(b)ack / (esc)")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center);
    f.render_widget(instructions, chunks[2]);
}

/// Fixed two-decimal percentage text for the bar labels.
pub fn percentage_label(value: f64) -> String {
    format!("{value:.2}%")
}
