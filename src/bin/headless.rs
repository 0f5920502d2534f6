//! Headless runner: steps the simulation with no terminal and prints the final
//! board snapshot as JSON.
//!
//! Useful for replays (fixed seed) and for eyeballing the rules from a shell:
//!
//! ```text
//! headless --seed 7 --ticks 2000 --drop-every 30 --print-board
//! ```

use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};

use tetromnom::core::{Board, BoardConfig};
use tetromnom::logging;
use tetromnom::types::{Input, BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_DIM, MAX_DROP_COUNT};

#[derive(Debug, Parser)]
#[command(version, about = "Run the board simulation without a terminal", long_about = None)]
struct Cli {
    /// seed for the shape source
    #[arg(short, long, default_value_t = 1)]
    seed: u32,

    /// number of ticks to simulate; stops early on game over
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// board width in cells
    #[arg(long, default_value_t = BOARD_WIDTH, value_parser = board_dim)]
    width: i32,

    /// board height in cells
    #[arg(long, default_value_t = BOARD_HEIGHT, value_parser = board_dim)]
    height: i32,

    /// ticks between forced descents
    #[arg(short, long, default_value_t = MAX_DROP_COUNT)]
    gravity: u32,

    /// hard drop on every Nth tick (0 disables)
    #[arg(short, long, default_value_t = 0)]
    drop_every: u64,

    /// print the settled-cell map to stderr before the JSON
    #[arg(long, default_value_t = false)]
    print_board: bool,

    /// stderr log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

/// Board dimension within `1..=MAX_BOARD_DIM`
fn board_dim(s: &str) -> Result<i32, String> {
    let n: i32 = s.parse().map_err(|e| format!("`{}` is not a number: {}", s, e))?;
    if (1..=MAX_BOARD_DIM).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between 1 and {}", MAX_BOARD_DIM))
    }
}

impl Cli {
    fn board_config(&self) -> BoardConfig {
        BoardConfig::default()
            .with_size(self.width, self.height)
            .with_gravity_interval(self.gravity)
            .with_seed(self.seed)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_stderr(cli.log_level)?;

    let mut board = Board::new(cli.board_config());
    let mut ran = 0;
    for tick in 1..=cli.ticks {
        let input = if cli.drop_every > 0 && tick % cli.drop_every == 0 {
            Input::hard_drop()
        } else {
            Input::none()
        };
        board.update(input);
        ran = tick;
        if board.is_game_over() {
            break;
        }
    }
    info!(
        "ran {} ticks, state {:?}, {} settled pieces",
        ran,
        board.state(),
        board.settled_pieces().count()
    );

    if cli.print_board {
        eprint!("{}", board.placed_map());
    }
    println!("{}", serde_json::to_string_pretty(&board.snapshot())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_dims_are_range_checked() {
        assert!(Cli::try_parse_from(["headless", "--width", "100000"]).is_err());
        assert!(Cli::try_parse_from(["headless", "--height", "0"]).is_err());

        let cli = Cli::try_parse_from(["headless", "--width", "1024", "--height", "8"]).unwrap();
        assert_eq!((cli.width, cli.height), (MAX_BOARD_DIM, 8));
    }
}
