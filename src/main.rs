//! Terminal scoreboard (default binary).
//!
//! crossterm for input, the framebuffer renderer from `killer-darts-term`
//! for output. Configuration comes from `KILLER_*` environment variables.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use killer_darts::core::{Session, SessionSnapshot};
use killer_darts::term::{FrameBuffer, RenderThrottle, ScoreboardView, TerminalRenderer, Viewport};
use killer_darts::{logging, App, AppConfig};

fn main() -> Result<()> {
    let cfg = AppConfig::from_env();
    if let Some(path) = cfg.log_path.as_deref() {
        logging::init_file(&cfg.log_filter, path)?;
    }
    info!("starting scoreboard, threshold {}", cfg.threshold);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cfg);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("scoreboard closed");
    result
}

fn run(term: &mut TerminalRenderer, cfg: &AppConfig) -> Result<()> {
    let mut app = App::new(Session::with_threshold(cfg.threshold));
    let view = ScoreboardView::default();
    let mut throttle = RenderThrottle::new(cfg.render_interval_ms);
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let tick = Duration::from_millis(cfg.tick_ms);

    loop {
        app.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, app.frame_fingerprint(&snap)) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, &app.view_state(), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }

        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_key(key);
                if app.should_quit() {
                    return Ok(());
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                throttle.invalidate();
            }
            _ => {}
        }
    }
}
