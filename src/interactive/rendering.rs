//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::Mark;
use crate::game::SessionState;
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Rows needed for `max_attempts` tile rows with a spacer after each, plus borders
fn board_height(max_attempts: usize) -> u16 {
    u16::try_from(max_attempts)
        .unwrap_or(u16::MAX)
        .saturating_mul(2)
        .saturating_add(3)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board_rows = board_height(app.session.config().max_attempts());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Min(board_rows),          // Board
            Constraint::Length(5),                // Keyboard
            Constraint::Length(7),                // Messages
            Constraint::Length(1),                // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn tile_style(mark: Option<Mark>) -> Style {
    match mark {
        Some(Mark::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Mark::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Mark::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, mark: Option<Mark>) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {letter} "), tile_style(mark)),
        Span::raw(" "),
    ]
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORD GAME")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let config = session.config();
    let mut lines = Vec::new();

    for round in session.history() {
        let spans: Vec<Span> = round
            .guess
            .letters()
            .iter()
            .zip(round.feedback.marks())
            .flat_map(|(&letter, &mark)| tile(char::from(letter), Some(mark)))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let mut rows_left = session.remaining_attempts();
    if !session.is_over() && rows_left > 0 {
        let attempt = session.attempt();
        let spans: Vec<Span> = (0..config.word_length())
            .flat_map(|i| {
                let letter = attempt.get(i).map_or('_', |&b| char::from(b));
                tile(letter, None)
            })
            .collect();
        lines.push(Line::from(spans).style(Style::default().add_modifier(Modifier::BOLD)));
        lines.push(Line::default());
        rows_left -= 1;
    }

    for _ in 0..rows_left {
        let spans: Vec<Span> = (0..config.word_length())
            .flat_map(|_| tile('·', None))
            .collect();
        lines.push(Line::from(spans).style(Style::default().fg(Color::DarkGray)));
        lines.push(Line::default());
    }

    let title = match session.state() {
        SessionState::InProgress => format!(
            " Round {}/{} ",
            session.round() + 1,
            config.max_attempts()
        ),
        SessionState::Won => " Solved! ".to_string(),
        SessionState::Lost => format!(" The word was {} ", session.secret()),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session.letter_hints();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|ch| {
                    let mark = hints.hint(ch);
                    let style = if mark.is_none() {
                        Style::default().fg(Color::White).bg(Color::Black)
                    } else {
                        tile_style(mark)
                    };
                    [Span::styled(format!(" {ch} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = if app.session.is_over() {
        "Enter/n: New Game | q/Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {} | {help}",
        app.stats.games_played,
        app.stats.win_rate(),
        app.stats.current_streak
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
