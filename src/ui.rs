pub mod breakdown;
pub mod recent;
pub mod screen;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{App, AppState};

const HORIZONTAL_MARGIN: u16 = 5;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            AppState::Playing => render_puzzle(self, area, buf),
            AppState::RoundOver => render_outcome(self, area, buf),
            // the stats screens have dedicated frame renderers; the
            // widget itself only ever sees the menu otherwise
            _ => render_menu(self, area, buf),
        }
    }
}

fn render_menu(app: &App, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let mut lines = vec![
        Line::from(Span::styled("jumblr", bold_style)),
        Line::from(Span::styled(
            format!(
                "{} words loaded from '{}'",
                app.session.vocabulary().len(),
                app.session.vocabulary().name()
            ),
            dim_style,
        )),
    ];

    if let Some(seed) = app.cli.as_ref().and_then(|cli| cli.seed) {
        lines.push(Line::from(Span::styled(
            format!("seeded run ({seed})"),
            dim_style,
        )));
    }

    lines.push(Line::default());

    if let Some(outcome) = app.session.last_outcome() {
        let summary = if outcome.is_win() {
            Span::styled(
                format!(
                    "last round: solved '{}' in {:.2}s",
                    outcome.word,
                    outcome.elapsed.as_secs_f64()
                ),
                Style::default().patch(bold_style).fg(Color::Green),
            )
        } else {
            Span::styled(
                format!("last round: missed '{}'", outcome.word),
                Style::default().patch(bold_style).fg(Color::Red),
            )
        };
        lines.push(Line::from(summary));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "(p)lay a round / (r)ecent results / (b)reakdown / (q)uit",
        italic_style,
    )));

    let occupied = lines.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(((area.height as f64 - occupied as f64) / 2.0) as u16),
            Constraint::Length(occupied),
            Constraint::Min(0),
        ])
        .split(area);

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    menu.render(chunks[1], buf);
}

fn render_puzzle(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(puzzle) = app.session.puzzle() else {
        return;
    };

    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_bold_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::DIM);
    let underlined_dim_bold_style = Style::default()
        .patch(dim_bold_style)
        .add_modifier(Modifier::UNDERLINED);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let spaced: String = puzzle
        .display()
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .join(" ");

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2);
    let mut prompt_occupied_lines =
        ((spaced.width() as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16;
    if spaced.width() <= max_chars_per_line as usize {
        prompt_occupied_lines = 1;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(
                ((area.height as f64 - prompt_occupied_lines as f64) / 2.0 - 3.0).max(0.0) as u16,
            ),
            Constraint::Length(prompt_occupied_lines),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let prompt = Paragraph::new(Line::from(Span::styled(spaced, bold_style)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    prompt.render(chunks[1], buf);

    let guess_line = Line::from(vec![
        Span::styled(app.guess.clone(), bold_style),
        Span::styled(" ", underlined_dim_bold_style),
    ]);
    let guess = Paragraph::new(guess_line).alignment(Alignment::Center);
    guess.render(chunks[3], buf);

    let timer = Paragraph::new(Span::styled(
        format!("{:.1}", app.elapsed_in_round().as_secs_f64()),
        dim_bold_style,
    ))
    .alignment(Alignment::Center);
    timer.render(chunks[4], buf);

    let legend = Paragraph::new(Span::styled(
        "type your guess / (enter) submit / (backspace) edit",
        italic_style,
    ))
    .alignment(Alignment::Center);
    legend.render(chunks[5], buf);
}

fn render_outcome(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(outcome) = app.session.last_outcome() else {
        return;
    };

    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);
    let seconds = outcome.elapsed.as_secs_f64();

    let lines = if outcome.is_win() {
        vec![
            Line::from(Span::styled(
                "correct!",
                Style::default().patch(bold_style).fg(Color::Green),
            )),
            Line::default(),
            Line::from(Span::raw(format!(
                "you unscrambled '{}' in {seconds:.2}s",
                outcome.word
            ))),
            Line::default(),
            Line::from(Span::styled("(enter) back to the menu", italic_style)),
        ]
    } else {
        vec![
            Line::from(Span::styled(
                "not quite",
                Style::default().patch(bold_style).fg(Color::Red),
            )),
            Line::default(),
            Line::from(Span::raw(format!(
                "the word was '{}' ({seconds:.2}s)",
                outcome.word
            ))),
            Line::default(),
            Line::from(Span::styled("(enter) back to the menu", italic_style)),
        ]
    };

    let occupied = lines.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(((area.height as f64 - occupied as f64) / 2.0) as u16),
            Constraint::Length(occupied),
            Constraint::Min(0),
        ])
        .split(area);

    let report = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    report.render(chunks[1], buf);
}
