//! TUI rendering with ratatui
//!
//! Game board for the evil hangman interface.

use super::app::{App, InputMode, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("😈 EVIL HANGMAN")
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
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Pattern
            Constraint::Length(3), // Lives
            Constraint::Min(5),    // Keyboard
        ])
        .split(area);

    render_pattern(f, app, chunks[0]);
    render_lives(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
}

fn render_pattern(f: &mut Frame, app: &App, area: Rect) {
    let cells: Vec<String> = app.game.pattern().map_or_else(
        |_| Vec::new(),
        |pattern| {
            pattern
                .cells()
                .iter()
                .map(|cell| cell.display_char().to_ascii_uppercase().to_string())
                .collect()
        },
    );

    let color = match app.input_mode {
        InputMode::Guessing => Color::Yellow,
        InputMode::GameOver if app.game.pattern().is_ok_and(|p| p.is_complete()) => Color::Green,
        InputMode::GameOver => Color::Red,
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            cells.join("   "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Word ({} letters) ", app.game.word_length()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_lives(f: &mut Frame, app: &App, area: Rect) {
    let lives = app.game.guesses_left();
    let max = app.game.max_wrong_guesses();
    let percent = if max == 0 {
        0
    } else {
        (u64::from(lives) * 100 / u64::from(max)) as u16
    };

    let color = match lives {
        0 => Color::DarkGray,
        1 | 2 => Color::Red,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{lives}/{max} wrong guesses left"));

    f.render_widget(gauge, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let mut spans = vec![Span::raw(" ".repeat(indent * 2))];
            for letter in row.chars() {
                let style = if !app.game.guesses().contains(&letter) {
                    Style::default().fg(Color::White)
                } else if app.is_hit(letter) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray).bg(Color::Red)
                };
                spans.push(Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    style,
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guessed Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    render_candidates(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(format!("{} words still possible", app.game.words().len())),
        Line::from(format!(
            "{} wrong guesses so far",
            app.game.wrong_guesses()
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
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
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Playing",
        InputMode::GameOver => "Mode: Game Over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate() * 100.0
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "a-z: Guess | Esc: Quit",
        InputMode::GameOver => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
