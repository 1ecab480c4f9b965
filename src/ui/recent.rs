use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::summary::{average_seconds, table_view};
use crate::App;

/// Table of the most recent wins, newest first, with an average-time
/// figure in the table title.
pub fn render_recent_results(app: &App, f: &mut Frame) {
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

    let title = Paragraph::new("Recent Results")
        .block(Block::default().borders(Borders::ALL).title("jumblr"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let rows = table_view(app.session.ledger());

    if rows.is_empty() {
        let no_data = Paragraph::new(
            "No wins recorded yet.\nSolve a few scrambles and they will show up here!",
        )
        .block(Block::default().borders(Borders::ALL).title("No Data"))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
        f.render_widget(no_data, chunks[1]);
    } else {
        let header = Row::new(vec!["#", "word", "seconds"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let table_rows: Vec<Row> = rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.rank.to_string()),
                    Cell::from(row.word.as_str().to_string()),
                    Cell::from(format!("{:.2}", row.seconds)),
                ])
            })
            .collect();

        let block_title = match average_seconds(app.session.ledger()) {
            Some(avg) => format!("Last {} wins (avg {:.2}s)", rows.len(), avg),
            None => String::from("Last wins"),
        };

        let table = Table::new(
            table_rows,
            &[
                Constraint::Length(4),
                Constraint::Length(18),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(block_title));

        f.render_widget(table, chunks[1]);
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
