//! 3x3x3 Twisty Puzzle
//!
//! Turns the faces of a Rubik's cube one quarter turn at a time. Moves can be
//! applied from the command line, which prints the resulting cube as an
//! unfolded net, or interactively in a 3D viewer that animates every turn.

mod visualization;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cubist::animation::{CubeController, DEFAULT_STEP};
use cubist::net::format_net;

/// Turns the faces of a 3x3x3 cube and shows the result.
#[derive(Parser)]
#[command(name = "cubist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Rotation added per frame, in radians (PI/200000 <= STEP <= PI/2).
    #[arg(long, global = true, default_value_t = DEFAULT_STEP)]
    step: f32,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply moves to a solved cube and print the resulting net.
    Apply {
        /// Moves to apply in order, each one of R, L, U, D, F, B.
        moves: Vec<String>,
    },
    /// Turn the cube interactively in a 3D viewer.
    Display,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut controller = match CubeController::with_step(cli.step) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Some(Command::Apply { moves }) => run_apply(&mut controller, &moves),
        Some(Command::Display) | None => {
            println!("Controls: R/L/U/D/F/B turn a face, drag to orbit");
            visualization::display(controller);
            ExitCode::SUCCESS
        }
    }
}

/// Applies each move to completion. Returns the total number of frames.
///
/// Stops at the first unknown move, leaving the moves before it applied.
fn apply_moves(controller: &mut CubeController, moves: &[String]) -> cubist::Result<usize> {
    let mut frames = 0;
    for key in moves {
        controller.rotate(key)?;
        frames += controller.finish();
    }
    Ok(frames)
}

/// Applies moves and prints the resulting net.
fn run_apply(controller: &mut CubeController, moves: &[String]) -> ExitCode {
    match apply_moves(controller, moves) {
        Ok(frames) => {
            log::info!("applied {} moves over {frames} frames", moves.len());
            print!("{}", format_net(controller.current_state()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use cubist::cube::CubeState;
    use cubist::CubeError;

    use super::*;

    fn keys(sequence: &str) -> Vec<String> {
        sequence.split_whitespace().map(str::to_owned).collect()
    }

    #[test]
    fn test_move_nets_snapshot() {
        let sequences = ["R", "L", "U", "D", "F", "B", "R U", "F B L D", "R R R R"];

        let mut output = String::new();
        for sequence in sequences {
            let mut controller = CubeController::new();
            apply_moves(&mut controller, &keys(sequence)).unwrap();
            output.push_str(&format!("Moves: {sequence}\n"));
            output.push_str(&format_net(controller.current_state()));
            output.push('\n');
        }

        insta::assert_snapshot!(output);
    }

    #[test]
    fn test_frame_count() {
        let mut controller = CubeController::new();
        assert_eq!(apply_moves(&mut controller, &keys("R U")), Ok(32));

        let mut controller = CubeController::with_step(0.5).unwrap();
        assert_eq!(apply_moves(&mut controller, &keys("R U")), Ok(8));
    }

    #[test]
    fn test_unknown_move_stops_sequence() {
        let mut controller = CubeController::new();
        assert_eq!(
            apply_moves(&mut controller, &keys("R X U")),
            Err(CubeError::InvalidMoveKind("X".to_owned()))
        );

        let mut expected = CubeController::new();
        apply_moves(&mut expected, &keys("R")).unwrap();
        assert_eq!(controller.current_state(), expected.current_state());
        assert_ne!(controller.current_state(), &CubeState::create_initial());
    }
}
