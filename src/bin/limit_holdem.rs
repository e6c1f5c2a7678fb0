use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use limit_holdem::cards::format_cards;
use limit_holdem::config::GameConfig;
use limit_holdem::engine::{play_script, GameEngine};
use limit_holdem::game::{ActionType, GameState, TerminalReason, Winner};
use limit_holdem::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::error::Error;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "limit-holdem", version)]
#[command(about = "Heads-up fixed-limit Texas Hold'em: hot-seat TUI or scripted hands")]
struct Cli {
    /// Seed for the first shuffled deck
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    small_blind: u64,
    #[arg(long, default_value_t = 2)]
    big_blind: u64,
    /// Bet size on preflop and flop
    #[arg(long, default_value_t = 2)]
    small_bet: u64,
    /// Bet size on turn and river
    #[arg(long, default_value_t = 4)]
    big_bet: u64,
    #[arg(long, default_value_t = 3)]
    max_raises: u32,
    /// Play these actions without the TUI, e.g. "call,check,check"
    #[arg(long, value_delimiter = ',')]
    actions: Option<Vec<ActionType>>,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            small_bet: self.small_bet,
            big_bet: self.big_bet,
            max_raises_per_round: self.max_raises,
        }
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_headless(cli: &Cli) -> Result<(), Box<dyn Error>> {
    env_logger::try_init().ok();

    let mut game = GameState::new(cli.config())?;
    game.new_hand(cli.seed);
    let actions = cli.actions.clone().unwrap_or_default();

    for seat in 0..2 {
        let hole = game.hole_cards(seat)?;
        println!("P{} hole: {}", seat + 1, format_cards(&hole));
    }

    if let Err((index, err)) = play_script(&mut game, &actions) {
        eprintln!("action {} ({}) rejected: {err}", index + 1, actions[index]);
    }
    for entry in game.action_history() {
        println!("round {} P{} {}", entry.round, entry.player + 1, entry.action);
    }

    println!("board: {}", format_cards(game.board_cards()));
    println!("pot: {}", game.pot());
    match game.outcome() {
        Some((reason, winner, payoffs)) => {
            let reason = match reason {
                TerminalReason::Fold => "fold",
                TerminalReason::Showdown => "showdown",
                TerminalReason::None => "none",
            };
            let winner = match winner {
                Winner::Player(p) => format!("P{}", p + 1),
                Winner::Tie => "tie".to_string(),
            };
            println!("terminal: {reason}, winner {winner}, payoffs {payoffs:?}");
        }
        None => {
            let legal: Vec<String> = game.legal_actions().iter().map(|a| a.to_string()).collect();
            println!(
                "to act: P{}, legal: {}",
                game.current().map_or(0, |p| p + 1),
                legal.join(", ")
            );
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    if cli.actions.is_some() || !io::stdout().is_terminal() {
        return run_headless(&cli);
    }

    let mut app = AppState::new(cli.config(), cli.seed)?;
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res?;
    Ok(())
}
