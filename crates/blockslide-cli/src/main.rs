//! Terminal front-end for blockslide levels.
//!
//! Replays a script of moves on a level and prints the board after each step.
//!
//! ```sh
//! blockslide L:4 B:3 undo E~-90
//! ```

use std::{num::NonZero, process::ExitCode};

use blockslide_core::{Label, MoveError, snap::SlotTable};
use blockslide_game::{
    DEFAULT_GOAL, Game, GameError, GameOptions, HistoryPolicy, Level, MoveOutcome,
};
use clap::Parser;

use crate::command::Command;

mod command;

const SAMPLE_LAYOUT: &str = "oIooLMoIBBLMAAJKooCCJKooxEEEoxGGHHoo";

#[derive(Debug, Parser)]
#[command(name = "blockslide", version, about = "Replay moves on a sliding-block level")]
struct Cli {
    /// The 36-character layout of the level.
    #[arg(long, default_value = SAMPLE_LAYOUT)]
    layout: String,
    /// Cell the last cell of the main vehicle must reach.
    #[arg(long, default_value_t = DEFAULT_GOAL)]
    goal: u8,
    /// Fewest moves known to solve the level, used for scoring.
    #[arg(long, default_value_t = 1)]
    minimum_moves: u32,
    /// Board width in pixels used to resolve drag commands.
    #[arg(long, default_value_t = 540.0)]
    grid_size: f32,
    /// Maximum number of moves kept for undo.
    #[arg(long, default_value = "5000")]
    history_capacity: NonZero<usize>,
    /// Moves to play: `<label>:<slot>`, `<label>~<pixels>`, `undo` or `reset`.
    moves: Vec<Command>,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), GameError> {
    let level = Level::new(0, cli.layout.clone(), cli.minimum_moves).with_goal(cli.goal);
    let options = GameOptions {
        history_capacity: cli.history_capacity,
        ..GameOptions::default()
    };
    let mut game = Game::new(level, &options)?;
    let table = SlotTable::new(cli.grid_size);

    println!("{}", game.board().to_grid_string());
    for &command in &cli.moves {
        let result = match command {
            Command::Slide { label, lead_slot } => game.slide(label, lead_slot).map(Some),
            Command::Drag { label, translation } => drag(&mut game, &table, label, translation),
            Command::Undo => game.undo(),
            Command::Reset => {
                game.reset();
                Ok(None)
            }
        };

        match result {
            Ok(outcome) => println!("{}", describe(command, outcome)),
            Err(e) => {
                log::warn!("rejected {command:?}: {e}");
                println!("{}: rejected ({e})", name(command));
            }
        }
        println!("{}", game.board().to_grid_string());
    }

    println!("moves: {}", game.move_count());
    match game.score() {
        Some(score) => println!("won, score {:.2}", score.ratio()),
        None => println!("not solved"),
    }
    Ok(())
}

fn drag(
    game: &mut Game,
    table: &SlotTable,
    label: Label,
    translation: f32,
) -> Result<Option<MoveOutcome>, GameError> {
    let vehicle = game
        .board()
        .vehicle(label)
        .ok_or(MoveError::UnknownVehicle { label })?;
    match table.drag_destination(vehicle, translation) {
        Some(positions) => game
            .apply_move(label, &positions, HistoryPolicy::Record)
            .map(Some),
        None => Ok(Some(MoveOutcome::Unchanged)),
    }
}

fn name(command: Command) -> String {
    match command {
        Command::Slide { label, lead_slot } => format!("{label}:{lead_slot}"),
        Command::Drag { label, translation } => format!("{label}~{translation}"),
        Command::Undo => "undo".to_owned(),
        Command::Reset => "reset".to_owned(),
    }
}

fn describe(command: Command, outcome: Option<MoveOutcome>) -> String {
    let name = name(command);
    match outcome {
        None if command == Command::Reset => format!("{name}: board restored"),
        None => format!("{name}: nothing to do"),
        Some(MoveOutcome::Unchanged) => format!("{name}: unchanged"),
        Some(MoveOutcome::Moved { move_count }) => format!("{name}: moved (move {move_count})"),
        Some(MoveOutcome::Won { move_count }) => format!("{name}: solved in {move_count} moves"),
    }
}
