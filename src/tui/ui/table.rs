use crate::cards::{Card, Suit};
use crate::game::{ActionType, GameState, TerminalReason, Winner, NUM_PLAYERS};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let game = &app.game;
    let chunks = Layout::vertical([
        Constraint::Length(4), // header
        Constraint::Length(5), // board
        Constraint::Min(8),    // seats
        Constraint::Length(5), // status bar
    ])
    .split(f.area());

    let config = game.config();
    let header_lines = vec![
        Line::from(format!(
            "Blinds {}/{}  Bets {}/{}  Hand #{} (seed {})",
            config.small_blind,
            config.big_blind,
            config.small_bet,
            config.big_bet,
            app.hands_played + 1,
            app.seed,
        )),
        Line::from(format!(
            "Pot: {}   Bet: {}   Raises: {}/{}",
            game.pot(),
            game.current_bet(),
            game.raises_in_round(),
            config.max_raises_per_round,
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("limit-holdem").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Board (5 slots, unrevealed ones face down)
    let board_area = chunks[1];
    let board_block =
        Block::default().title(format!("Board: {}", game.street().label())).borders(Borders::ALL);
    f.render_widget(board_block, board_area);
    let revealed = game.board_cards();
    for (i, slot) in columns(inner(board_area), 5).into_iter().enumerate() {
        render_card_widget(f, slot, revealed.get(i).copied(), None);
    }

    let seat_areas = columns(chunks[2], NUM_PLAYERS as u16);
    for (seat, area) in seat_areas.into_iter().enumerate() {
        render_seat(f, area, game, seat);
    }

    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner(status_area));

    let mut left_info = match (game.current_player(), game.winner()) {
        (Some(p), _) => vec![Line::from(format!(
            "Acting: P{}   To call: {}",
            p + 1,
            game.to_call(p).unwrap_or(0)
        ))],
        (None, Some(winner)) => {
            vec![Line::from(outcome_line(game, winner)), Line::from("Press Space for a new hand.")]
        }
        (None, None) => Vec::new(),
    };

    if !game.is_terminal() {
        let legal = game.legal_actions();
        let action_style = |action: ActionType| {
            if legal.contains(&action) {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            }
        };
        let mut spans = vec![Span::raw("Actions: ")];
        for (i, (key, action)) in [
            ("F", ActionType::Fold),
            ("K", ActionType::Check),
            ("C", ActionType::Call),
            ("B", ActionType::Bet),
            ("R", ActionType::Raise),
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" • "));
            }
            spans.push(Span::styled(format!("{key} {}", action.label()), action_style(action)));
        }
        left_info.push(Line::from(spans));
    }

    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let right_keys = vec![Line::from(""), Line::from("? help • H history • Q quit")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    }
}

fn outcome_line(game: &GameState, winner: Winner) -> String {
    let [p0, p1] = game.payoffs();
    let reason = match game.terminal_reason() {
        TerminalReason::Fold => "fold",
        TerminalReason::Showdown => "showdown",
        TerminalReason::None => "in play",
    };
    let who = match winner {
        Winner::Player(p) => format!("P{} wins", p + 1),
        Winner::Tie => "Split pot".to_string(),
    };
    format!("{who} by {reason}   Payoffs: P1 {p0:+}  P2 {p1:+}")
}

fn render_seat(f: &mut Frame, area: Rect, game: &GameState, seat: usize) {
    let mut title = format!("P{}", seat + 1);
    title.push_str(if seat == 0 { " [SB]" } else { " [BB]" });
    if game.current_player() == Some(seat) {
        title.push_str(" [Act]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    match game.winner() {
        Some(Winner::Player(w)) if w == seat => {
            block = block.border_style(Style::default().fg(Color::Green));
        }
        Some(Winner::Tie) => {
            block = block.border_style(Style::default().fg(Color::Cyan));
        }
        _ if game.current_player() == Some(seat) => {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }
        _ => {}
    }

    let dim = Style::default().add_modifier(Modifier::DIM);
    let mut lines = vec![
        Line::from(format!("In pot: {}", game.total_contribution(seat).unwrap_or(0))),
        Line::from(format!("This round: {}", game.round_contribution(seat).unwrap_or(0))),
    ];
    match game.showdown_categories() {
        Some(categories) => lines.push(Line::from(format!("Hand: {}", categories[seat]))),
        None => lines.push(Line::from(vec![Span::raw("Hand: "), Span::styled("--", dim)])),
    }
    if game.is_terminal() {
        lines.push(Line::from(format!("Payoff: {:+}", game.payoffs()[seat])));
    }

    f.render_widget(block, area);
    let seat_inner = inner(area);
    let split = Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(seat_inner);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), split[0]);

    if let Ok(hole) = game.hole_cards(seat) {
        let card_chunks = columns(split[1], 2);
        for (card, slot) in hole.into_iter().zip(card_chunks) {
            render_card_widget(f, slot, Some(card), Some(Color::Cyan));
        }
    }
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.history_page();
    if entries.is_empty() {
        lines.push(Line::from("No actions yet."));
    } else {
        for entry in entries {
            let street = crate::game::Street::from_round(entry.round)
                .map(|s| s.label())
                .unwrap_or("?");
            lines.push(Line::from(format!(
                "P{} {} [{}]",
                entry.player + 1,
                entry.action.label(),
                street
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- F: fold"),
        Line::from("- K: check"),
        Line::from("- C: call"),
        Line::from("- B: bet"),
        Line::from("- R: raise"),
        Line::from("- Space: new hand (after the hand ends)"),
        Line::from("- H: history"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    f.render_widget(block, area);
    let content = match card {
        Some(c) => {
            let (glyph, style) = suit_glyph_and_style(c.suit());
            Line::from(Span::styled(format!("{}{glyph}", c.rank()), style))
        }
        None => Line::from("[  ]"),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner(area));
}
