//! Terminal Snake runner (default binary).
//!
//! Hosts the simulation core in a terminal: crossterm for input, the
//! framebuffer renderer for output, and a tick loop that follows the session's
//! current step period.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_snake::core::{GameConfig, GameSnapshot, GameState, SimpleRng};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TermHost, TerminalRenderer, Viewport};
use tui_snake::types::{GameAction, GRID_HEIGHT, GRID_WIDTH};

/// Idle poll interval while paused or after game over.
const IDLE_POLL_MS: u64 = 500;

#[derive(Parser, Debug)]
#[command(name = "tui-snake", about = "Classic Snake in the terminal")]
struct Args {
    /// Grid width in cells (default: fit the terminal, at most 40)
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells (default: fit the terminal, at most 40)
    #[arg(long)]
    height: Option<u16>,

    /// Seed for apple placement (default: from the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the final session as JSON after exiting
    #[arg(long)]
    print_summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let view = GameView::default();
    let config = build_config(&args, &view)?;
    let seed = args.seed.unwrap_or_else(clock_seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &view, config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    let summary = result?;

    if args.print_summary {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn build_config(args: &Args, view: &GameView) -> Result<GameConfig> {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let (fit_w, fit_h) = view.fit_grid(Viewport::new(cols, rows));

    let config = GameConfig::with_grid(
        args.width.unwrap_or(fit_w.min(GRID_WIDTH)),
        args.height.unwrap_or(fit_h.min(GRID_HEIGHT)),
    );
    config
        .validate()
        .with_context(|| format!("unusable grid for a {}x{} terminal", cols, rows))?;
    Ok(config)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn period(game: &GameState) -> Duration {
    Duration::from_millis(game.step_period_ms() as u64)
}

fn run(
    term: &mut TerminalRenderer,
    view: &GameView,
    config: GameConfig,
    seed: u32,
) -> Result<GameSnapshot> {
    let mut game = GameState::with_config(config, SimpleRng::new(seed))?;
    let mut host = TermHost::new(&config);
    game.init(&mut host);
    info!(seed, width = config.width, height = config.height, "game started");

    let started = Instant::now();
    let mut next_tick = Instant::now() + period(&game);
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        host.hud.length = game.snake().length();
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&host.canvas, &host.hud, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input until the next tick is due. The core does not latch game over;
        // this host stops ticking once it has been reported.
        let ticking = !host.hud.paused && !host.hud.game_over;
        let timeout = if ticking {
            next_tick.saturating_duration_since(Instant::now())
        } else {
            Duration::from_millis(IDLE_POLL_MS)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Turn(arrow)) => {
                            game.on_key_down(arrow);
                        }
                        Some(GameAction::Pause) if !host.hud.game_over => {
                            host.hud.paused = !host.hud.paused;
                            next_tick = Instant::now() + period(&game);
                        }
                        Some(GameAction::Restart) => {
                            host.reset(&config);
                            game.init(&mut host);
                            next_tick = Instant::now() + period(&game);
                            info!("game restarted");
                        }
                        _ => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let ticking = !host.hud.paused && !host.hud.game_over;
        if ticking && Instant::now() >= next_tick {
            let timestamp = started.elapsed().as_millis() as u32;
            let outcome = game.step(timestamp, &mut host);
            // The period may have just changed; schedule with the new one.
            next_tick = Instant::now() + period(&game);
            if outcome.game_over {
                info!(
                    score = game.score(),
                    length = game.snake().length(),
                    "game over"
                );
            }
        }
    }

    Ok(game.snapshot())
}
