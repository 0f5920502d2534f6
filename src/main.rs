//! Terminal runner (default binary).
//!
//! Fixed 60 Hz loop: keys are latched between ticks, every tick feeds one
//! `Input` to the board, then the board snapshot is painted through the
//! framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, LevelFilter};

use tetromnom::core::{Board, BoardSnapshot};
use tetromnom::input::{map_key, InputLatch, KeyCommand};
use tetromnom::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetromnom::types::TICK_MS;
use tetromnom::{logging, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    if let Some(path) = &config.log_path {
        logging::init_file(path, LevelFilter::Debug)?;
    }
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut board = Board::new(config.board_config());
    let view = GameView::default();
    let mut latch = InputLatch::new();
    let mut snap = BoardSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match map_key(key) {
                    Some(KeyCommand::Adjust(dir)) => latch.push_dir(dir),
                    Some(KeyCommand::Drop) => latch.push_drop(),
                    Some(KeyCommand::Restart) => {
                        board.reset();
                        latch.take();
                    }
                    Some(KeyCommand::Quit) => return Ok(()),
                    None => {}
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() < tick {
            continue;
        }
        last_tick = Instant::now();

        board.update(latch.take());

        board.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&mut fb)?;
    }
}
