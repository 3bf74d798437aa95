use std::io::{self, BufRead, Write};

use crosses_engine::game::{Difficulty, GameMode, Mark, Outcome, Phase, Session};
use crosses_engine::log;

/// One parsed input line. Anything unparseable maps onto `Invalid`,
/// which the session treats the same way as an illegal click.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Mode(GameMode),
    Difficulty(Difficulty),
    Move(usize, usize),
    Reset,
    Board,
    Help,
    Quit,
    Invalid,
}

pub fn parse_command(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("mode") => match parts.next() {
            Some("1") => Command::Mode(GameMode::TwoPlayer),
            Some("2") => Command::Mode(GameMode::VsComputer),
            _ => Command::Invalid,
        },
        Some("difficulty") => match parts.next() {
            Some("1") => Command::Difficulty(Difficulty::Random),
            Some("2") => Command::Difficulty(Difficulty::Optimal),
            _ => Command::Invalid,
        },
        Some("move") => {
            let row = parts.next().and_then(|s| s.parse().ok());
            let col = parts.next().and_then(|s| s.parse().ok());
            match (row, col) {
                (Some(row), Some(col)) => Command::Move(row, col),
                _ => Command::Invalid,
            }
        }
        Some("reset") => Command::Reset,
        Some("board") => Command::Board,
        Some("help") => Command::Help,
        Some("quit") | Some("exit") => Command::Quit,
        _ => Command::Invalid,
    }
}

pub fn run(session: &mut Session, show_board_every_tick: bool) -> Result<(), String> {
    let stdin = io::stdin();
    print_prompt(session);

    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
        let command = parse_command(&line);

        match command {
            Command::Quit => break,
            Command::Help => {
                print_help();
                continue;
            }
            Command::Board => {
                print_board(session);
                continue;
            }
            _ => {}
        }

        let applied = apply_command(session, command);
        if !applied {
            println!("ignored");
        }

        // The computer moves once control returns to the loop.
        if let Some(pos) = session.tick() {
            log!(
                "computer ({:?}) played ({}, {})",
                session.difficulty(),
                pos.row,
                pos.col
            );
        }

        if show_board_every_tick && session.mode() != GameMode::Unselected {
            print_board(session);
        }
        print_status(session);
        print_prompt(session);
    }

    Ok(())
}

fn apply_command(session: &mut Session, command: Command) -> bool {
    match command {
        Command::Mode(mode) => {
            let applied = session.select_mode(mode);
            if applied {
                log!("mode selected: {:?}", mode);
            }
            applied
        }
        Command::Difficulty(difficulty) => {
            let applied = session.select_difficulty(difficulty);
            if applied {
                log!("difficulty selected: {:?}", difficulty);
            }
            applied
        }
        Command::Move(row, col) => {
            let mover = session.turn();
            let applied = session.attempt_move(row, col);
            if applied {
                log!("{} played ({}, {})", mark_char(mover), row, col);
            }
            applied
        }
        Command::Reset => {
            let applied = session.reset();
            if applied {
                log!("game reset");
            }
            applied
        }
        Command::Board | Command::Help | Command::Quit | Command::Invalid => false,
    }
}

fn print_prompt(session: &Session) {
    match session.phase() {
        Phase::SelectingMode => {
            println!("Select the game mode: 1 - two players, 2 - against computer");
        }
        Phase::SelectingDifficulty => {
            println!("Select the computer strength: 1 - random, 2 - optimal");
        }
        Phase::Playing => {
            println!("Player {} to move", mark_char(session.turn()));
        }
        Phase::Over => match session.outcome() {
            Outcome::Won(mark) => println!("Player {} won! Type reset to restart.", mark_char(mark)),
            _ => println!("Draw! Type reset to restart."),
        },
    }
    let _ = io::stdout().flush();
}

fn print_status(session: &Session) {
    let outcome = match session.outcome() {
        Outcome::InProgress => "in_progress".to_string(),
        Outcome::Draw => "draw".to_string(),
        Outcome::Won(mark) => format!("won_{}", mark_char(mark)),
    };
    println!("outcome={} turn={}", outcome, mark_char(session.turn()));
}

fn print_board(session: &Session) {
    let board = session.board();
    for row in 0..board.size() {
        let mut line = String::new();
        for col in 0..board.size() {
            let mark = board.get(row, col).unwrap_or(Mark::Empty);
            line.push(mark_char(mark));
            if col + 1 < board.size() {
                line.push(' ');
            }
        }
        println!("{}", line);
    }
}

fn print_help() {
    println!("commands:");
    println!("  mode <1|2>        1 - two players, 2 - against computer");
    println!("  difficulty <1|2>  1 - random, 2 - optimal");
    println!("  move <row> <col>  zero-based coordinates");
    println!("  reset             restart after a finished game");
    println!("  board             print the board");
    println!("  quit              exit");
}

fn mark_char(mark: Mark) -> char {
    match mark {
        Mark::X => 'X',
        Mark::O => 'O',
        Mark::Empty => '.',
    }
}
