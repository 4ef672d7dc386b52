//! Terminal runner (default binary).
//!
//! Owns the clock: the engine never schedules itself, so this loop measures
//! wall time between frames and feeds it to `Session::tick`.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Session;
use blockfall::input::{map_key, should_quit, InputEvent};
use blockfall::term::{GameView, TerminalRenderer, Viewport};

const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
        ^ std::process::id();
    let mut session = Session::new(seed);

    let view = GameView::default();
    let frame_duration = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match map_key(key) {
                        Some(InputEvent::Game(cmd)) => {
                            session.handle(cmd);
                        }
                        Some(InputEvent::Start) => session.start(),
                        Some(InputEvent::PauseToggle) => session.toggle_pause(),
                        Some(InputEvent::Reset) => session.reset(),
                        None => {}
                    }
                }
            }
        }

        // Feed real elapsed time. While paused or idle the session ignores
        // it, so paused wall time never reaches the drop accumulator.
        let elapsed = last_frame.elapsed();
        last_frame = Instant::now();
        session.tick(elapsed.as_millis() as u32);
    }
}
