mod config;
mod ui;

use clap::Parser;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use config::{Config, Symbol};
use tictactoe_engine::{
    Difficulty, GameConfig, GameMode, GameSession, GameStatus, log, logger,
};

const HELP: &str = "\
Cells are numbered 1-9, left to right, top to bottom.
Commands:
  1-9                            place a mark
  new                            start a new game
  mode <two-player|bot>          switch game mode
  symbol <x|o>                   pick your mark for games against the computer
  difficulty <easy|medium|hard>  set the computer's strength
  help                           show this message
  quit                           exit";

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_parser = parse_mode)]
    mode: Option<GameMode>,
    #[arg(long, value_parser = parse_symbol)]
    symbol: Option<Symbol>,
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
}

fn parse_mode(value: &str) -> Result<GameMode, String> {
    match value.to_ascii_lowercase().as_str() {
        "two-player" => Ok(GameMode::TwoPlayer),
        "bot" => Ok(GameMode::VsComputer),
        _ => Err(format!("unknown mode '{}', expected two-player or bot", value)),
    }
}

fn parse_symbol(value: &str) -> Result<Symbol, String> {
    match value.to_ascii_lowercase().as_str() {
        "x" => Ok(Symbol::X),
        "o" => Ok(Symbol::O),
        _ => Err(format!("unknown symbol '{}', expected x or o", value)),
    }
}

fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    match value.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        _ => Err(format!(
            "unknown difficulty '{}', expected easy, medium or hard",
            value
        )),
    }
}

fn game_config_from(cfg: &Config) -> GameConfig {
    GameConfig {
        mode: cfg.mode,
        human_mark: cfg.symbol.to_mark(),
        difficulty: cfg.difficulty,
    }
}

enum Action {
    Continue,
    Redraw,
    Quit,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let mut cfg = config::load(&config_path)?;
    if let Some(mode) = args.mode {
        cfg.mode = mode;
    }
    if let Some(symbol) = args.symbol {
        cfg.symbol = symbol;
    }
    if let Some(difficulty) = args.difficulty {
        cfg.difficulty = difficulty;
    }

    let mut session = match args.seed {
        Some(seed) => GameSession::with_seed(game_config_from(&cfg), seed)?,
        None => GameSession::new_game(game_config_from(&cfg))?,
    };
    log!(
        "Session started (mode {:?}, difficulty {:?}, seed {})",
        cfg.mode,
        cfg.difficulty,
        session.seed()
    );

    println!("{}", HELP);
    println!();
    draw(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
        match handle_input(line.trim(), &mut session, &mut cfg, &config_path) {
            Ok(Action::Continue) => {}
            Ok(Action::Redraw) => draw(&session),
            Ok(Action::Quit) => break,
            Err(message) => println!("{}", message),
        }
    }

    log!("Session ended");
    Ok(())
}

fn handle_input(
    input: &str,
    session: &mut GameSession,
    cfg: &mut Config,
    config_path: &Path,
) -> Result<Action, String> {
    if input.is_empty() {
        return Ok(Action::Continue);
    }

    if let Ok(cell) = input.parse::<usize>() {
        if !(1..=9).contains(&cell) {
            return Err("Enter a cell from 1 to 9".to_string());
        }
        let status = session
            .submit_move(cell - 1)
            .map_err(|e| format!("Invalid move: {}", e))?;
        if status != GameStatus::InProgress {
            log!("Game over: {}", ui::status_line(session));
        }
        return Ok(Action::Redraw);
    }

    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let value = parts.next();

    match command {
        "help" => {
            println!("{}", HELP);
            Ok(Action::Continue)
        }
        "quit" | "exit" => Ok(Action::Quit),
        "new" => {
            session.reset();
            Ok(Action::Redraw)
        }
        "mode" => {
            let value = value.ok_or("Usage: mode <two-player|bot>")?;
            cfg.mode = parse_mode(value)?;
            apply_config_change(session, cfg, config_path)
        }
        "symbol" => {
            let value = value.ok_or("Usage: symbol <x|o>")?;
            cfg.symbol = parse_symbol(value)?;
            apply_config_change(session, cfg, config_path)
        }
        "difficulty" => {
            let value = value.ok_or("Usage: difficulty <easy|medium|hard>")?;
            cfg.difficulty = parse_difficulty(value)?;
            apply_config_change(session, cfg, config_path)
        }
        _ => Err(format!("Unknown command: {} (try 'help')", command)),
    }
}

fn apply_config_change(
    session: &mut GameSession,
    cfg: &Config,
    config_path: &Path,
) -> Result<Action, String> {
    session.reconfigure(game_config_from(cfg))?;
    if let Err(e) = config::save(config_path, cfg) {
        log!("Failed to save config: {}", e);
    }
    log!(
        "Reconfigured (mode {:?}, symbol {:?}, difficulty {:?}), starting a new game",
        cfg.mode,
        cfg.symbol,
        cfg.difficulty
    );
    Ok(Action::Redraw)
}

fn draw(session: &GameSession) {
    let winning_line = session.winning_line();
    println!("{}", ui::render_board(session.board(), winning_line.as_ref()));
    println!("{}", ui::status_line(session));
}
