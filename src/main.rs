//! Terminal memory game runner (default binary).
//!
//! crossterm supplies input and a framebuffer renderer draws the board.
//! Game timers run on the core's virtual clock, which this loop keeps level
//! with wall-clock time.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_memory::core::{ClockScheduler, GameConfig, GameState, Scheduler};
use tui_memory::input::{handle_key_event, should_quit, Cursor};
use tui_memory::logging;
use tui_memory::term::{BoardModel, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_memory::types::{GameAction, FRAME_MS, GRID_COLUMNS};

type Game = GameState<ClockScheduler, BoardModel>;

fn main() -> Result<()> {
    logging::init_from_env()?;

    let config = GameConfig::from_env();
    let board = BoardModel::new(config.card_count(), config.time_limit_secs);
    let mut game = GameState::new(config, ClockScheduler::new(), board)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut cursor = Cursor::new(GRID_COLUMNS, game.card_count());
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS);
    let started = Instant::now();

    loop {
        // Catch the virtual clock up to real time. Measuring from `started`
        // rather than per frame keeps rounding from accumulating.
        let now_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let behind = now_ms.saturating_sub(game.scheduler().now_ms());
        if behind > 0 {
            game.advance(behind);
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game.observer(), Some(cursor.position()), Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        if !event::poll(frame)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    apply_action(game, &mut cursor, action)?;
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn apply_action(game: &mut Game, cursor: &mut Cursor, action: GameAction) -> Result<()> {
    match action {
        GameAction::Move(direction) => cursor.move_to(direction),
        GameAction::Flip => {
            let outcome = game.flip_card(cursor.position())?;
            debug!(position = cursor.position(), ?outcome, "flip");
        }
        GameAction::NewGame => {
            game.new_game();
            cursor.resize(game.card_count());
        }
        GameAction::Reset => game.reset(),
    }
    Ok(())
}
