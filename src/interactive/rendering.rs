//! Full-screen layout: suggestion, remaining answers, history, clue entry

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Status, WORD_LENGTH};
use crate::output::formatters::entropy_bar;
use crate::solver::GuessMetrics;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Draw one frame
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let config = app.session.config();
    let title = format!(
        "🎯 {} SOLVER{}",
        config.mode.name().to_uppercase(),
        if config.hard_mode { " - Hard Mode" } else { "" }
    );
    let header = Paragraph::new(title)
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Current guess info
            Constraint::Percentage(30), // Answers
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_answers(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

const fn tile_color(status: Status) -> Color {
    match status {
        Status::Correct => Color::Green,
        Status::Present => Color::Yellow,
        Status::Absent => Color::DarkGray,
    }
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(guess) = app.current_guess else {
        let paragraph = Paragraph::new("No suggestion available").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let bar = entropy_bar(guess.metrics.entropy, 18);

    let content = vec![
        Line::from(vec![
            Span::raw(if guess.suggested { "Suggested: " } else { "Your word: " }),
            Span::styled(
                guess.word.text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Entropy:   [{bar}] {:.3} bits",
            guess.metrics.entropy
        )),
        Line::from(format!(
            "Expected:  {:.1} answers remain",
            guess.metrics.expected_remaining
        )),
        Line::from(format!("Worst:     {} answers", guess.metrics.max_partition)),
        Line::from(format!(
            "Score:     {:.3} ({})",
            guess.score,
            app.session.config().mode
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_answers(f: &mut Frame, app: &App, area: Rect) {
    let answers = app.session.answers();

    let content = if answers.is_empty() {
        vec![Line::from("No answers remain")]
    } else if answers.len() <= 12 {
        let mut lines = vec![Line::from("Remaining:")];
        for answer in answers {
            let metrics = GuessMetrics::calculate(answer, answers);
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<5}", answer.text().to_uppercase()),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!(" {:.2}b", metrics.entropy),
                    Style::default().fg(Color::Cyan),
                ),
            ]));
        }
        lines
    } else {
        vec![
            Line::from(format!("{} answers remaining", answers.len())),
            Line::from(format!("{} playable guesses", app.session.guesses().len())),
            Line::from(format!(
                "Still unknown: {:.2} bits",
                (answers.len() as f64).log2()
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Answers ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let history_items: Vec<ListItem> = history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, turn)| {
            ListItem::new(format!(
                "{}: {} {} {} → {}",
                history.len() - i,
                turn.guess.text().to_uppercase(),
                turn.clue.to_emoji(),
                turn.answers_before,
                turn.answers_after
            ))
        })
        .collect();

    let list =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_narrowing(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_narrowing(f: &mut Frame, app: &App, area: Rect) {
    let total = app.initial_answers_count().max(1) as f64;
    let remaining = app.answers_count();
    let total_bits = total.log2();
    let bits_gained = if remaining == 0 {
        total_bits
    } else {
        (total / remaining as f64).log2()
    };
    let progress_pct = if total_bits > 0.0 {
        ((bits_gained / total_bits * 100.0).clamp(0.0, 100.0)) as u16
    } else {
        100
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Narrowed ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{bits_gained:.1}/{total_bits:.1} bits | {remaining} answers remain"
        ));

    f.render_widget(gauge, area);
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

/// The guess as five tiles coloured by the drafted clue, cursor underlined
fn clue_tiles(app: &App) -> Line<'static> {
    let letters = app
        .current_guess
        .map_or([b' '; WORD_LENGTH], |info| *info.word.letters());

    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for (position, &letter) in letters.iter().enumerate() {
        let mut style = Style::default()
            .fg(Color::Black)
            .bg(tile_color(app.draft.status_at(position)))
            .add_modifier(Modifier::BOLD);
        if position == app.cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
        }
        spans.push(Span::styled(
            format!(" {} ", char::from(letter.to_ascii_uppercase())),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " Game over | 'n' new game, 'u' undo, 'q' quit ",
            Line::from(""),
            Color::Green,
        ),
        InputMode::Clue => (
            " Enter Clue (g/y/- set, ←/→ move, ↑/↓ cycle, Enter submit) | TAB for own word ",
            clue_tiles(app),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Own guess (Enter to play, Esc to cancel) ",
            Line::from(app.manual_word.to_uppercase()),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(22),
            Constraint::Length(14),
            Constraint::Min(20),
        ])
        .split(area);

    let turn_text = format!("Turn: {}", app.session.turns_played() + 1);
    f.render_widget(
        Paragraph::new(turn_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let answers_text = format!("Answers: {}", app.answers_count());
    f.render_widget(
        Paragraph::new(answers_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if app.input_mode == InputMode::Finished {
        "q quit · n new game · u undo"
    } else {
        "g/y/- mark · Enter submit · Tab own word · u undo · q quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Mode, Session, SessionConfig};
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let session = Session::new(
            SessionConfig::new(Mode::Absurdle, true),
            words_from_slice(&["pearl", "algae", "abbey", "raise"]),
            &words_from_slice(&["roate"]),
        )
        .unwrap();
        App::new(session)
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_suggestion_and_mode() {
        let text = screen(&app());
        assert!(text.contains("ABSURDLE"));
        assert!(text.contains("RAISE"));
        assert!(text.contains("Hard Mode"));
    }

    #[test]
    fn clue_tiles_follow_the_draft() {
        let mut app = app();
        app.draft.set(0, Status::Correct);
        let line = clue_tiles(&app);
        assert_eq!(line.spans[0].content, " R ");
        assert_eq!(line.spans[0].style.bg, Some(Color::Green));
        assert_eq!(line.spans[2].style.bg, Some(Color::DarkGray));
    }
}
