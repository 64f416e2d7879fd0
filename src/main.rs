//! Terminal falling-blocks runner (default binary).
//!
//! Single player by default; `--versus` starts a two-player match on one
//! keyboard. Input is polled with crossterm and frames go through the
//! framebuffer renderer.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use falling_blocks::core::{
    GameConfig, GravityClock, LineTally, Outcome, PieceSource, Session, Snapshot, Versus,
};
use falling_blocks::input::{solo_command, versus_command};
use falling_blocks::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use falling_blocks::types::{PlayerSlot, POLL_MS, VERSUS_FALL_MS};

/// How long the final board stays up unless a key is pressed
const GAME_OVER_HOLD: Duration = Duration::from_secs(3);

#[derive(Debug, Parser)]
#[command(version, about = "Falling blocks in the terminal")]
struct Cli {
    #[arg(long, help = "Two players on one keyboard (a/d/s/w/q/e vs j/l/k/i/u/o)")]
    versus: bool,

    #[arg(long, help = "Seed for pieces and garbage gaps (default: clock)")]
    seed: Option<u32>,

    #[arg(long, help = "Gravity interval in milliseconds (default: 500 solo, 250 versus)")]
    fall_ms: Option<u64>,

    #[arg(long, help = "Board width in cells")]
    width: Option<u8>,

    #[arg(long, help = "Board height in cells")]
    height: Option<u8>,

    #[arg(long, help = "Write a tracing log to this file")]
    log: Option<PathBuf>,

    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v = DEBUG, -vv = TRACE)"
    )]
    verbose: u8,
}

/// What the player(s) leave the game with
enum Summary {
    Solo(LineTally),
    Versus {
        tallies: [LineTally; 2],
        winner: Option<PlayerSlot>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    init_logging(config.log_path.as_ref(), cli.verbose)?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    info!(
        seed,
        versus = cli.versus,
        width = config.board_width,
        height = config.board_height,
        fall_ms = config.fall_interval.as_millis() as u64,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = if cli.versus {
        run_versus(&mut term, &config, seed)
    } else {
        run_solo(&mut term, &config, seed)
    };

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        Summary::Solo(tally) => println!("Score: {} ({} lines)", tally, tally.total_lines()),
        Summary::Versus { tallies, winner } => {
            for (i, tally) in tallies.iter().enumerate() {
                println!("Player {} score: {} ({} lines)", i + 1, tally, tally.total_lines());
            }
            match winner {
                Some(PlayerSlot::One) => println!("Player 1 wins"),
                Some(PlayerSlot::Two) => println!("Player 2 wins"),
                None => {}
            }
        }
    }
    println!("Seed: {}", seed);
    Ok(())
}

/// Defaults, then `FALLING_BLOCKS_*`, then flags.
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::from_env().context("reading FALLING_BLOCKS_* settings")?;

    if let Some(width) = cli.width {
        config.board_width = width;
    }
    if let Some(height) = cli.height {
        config.board_height = height;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(path) = &cli.log {
        config.log_path = Some(path.clone());
    }
    match cli.fall_ms {
        Some(ms) => config.fall_interval = Duration::from_millis(ms),
        // Versus plays faster unless an interval was set explicitly.
        None if cli.versus && config.fall_interval == GameConfig::default().fall_interval => {
            config.fall_interval = Duration::from_millis(VERSUS_FALL_MS as u64);
        }
        None => {}
    }

    config.validate()?;
    Ok(config)
}

/// The terminal belongs to the game, so logs only go to a file.
fn init_logging(path: Option<&PathBuf>, verbose: u8) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;

    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
    info!("Logging initialized at level: {}", level);
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

/// Wait for gravity or input, whichever comes first.
fn poll_timeout(clock: &GravityClock) -> Duration {
    clock.until_due().min(Duration::from_millis(POLL_MS as u64))
}

fn run_solo(term: &mut TerminalRenderer, config: &GameConfig, seed: u32) -> Result<Summary> {
    let mut session = Session::new(config, PieceSource::new(seed));
    let mut clock = GravityClock::new(config.fall_interval);

    let view = BoardView::default();
    let mut snap = Snapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut redraw = true;
    let mut last = Instant::now();

    loop {
        if redraw {
            session.snapshot_into(&mut snap);
            view.render_solo(&snap, viewport(), &mut fb);
            term.draw_swap(&mut fb)?;
            redraw = false;
        }
        if session.is_game_over() {
            hold_final_frame()?;
            return Ok(Summary::Solo(*session.tally()));
        }

        if event::poll(poll_timeout(&clock))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(command) = solo_command(key) {
                        match session.apply(command) {
                            Outcome::Quit => return Ok(Summary::Solo(*session.tally())),
                            outcome => redraw |= outcome.changed(),
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    redraw = true;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        if clock.advance(now - last) {
            redraw |= session.gravity_tick().changed();
        }
        last = now;
    }
}

fn run_versus(term: &mut TerminalRenderer, config: &GameConfig, seed: u32) -> Result<Summary> {
    let mut game = Versus::new(config, seed);
    let mut clock = GravityClock::new(config.fall_interval);

    let view = BoardView::default();
    let mut snaps = [Snapshot::default(), Snapshot::default()];
    let mut fb = FrameBuffer::new(0, 0);
    let mut redraw = true;
    let mut last = Instant::now();

    let summary = |game: &Versus| Summary::Versus {
        tallies: [
            *game.player(PlayerSlot::One).tally(),
            *game.player(PlayerSlot::Two).tally(),
        ],
        winner: game.winner(),
    };

    loop {
        if redraw {
            for (session, snap) in game.players().iter().zip(snaps.iter_mut()) {
                session.snapshot_into(snap);
            }
            view.render_versus([&snaps[0], &snaps[1]], viewport(), &mut fb);
            term.draw_swap(&mut fb)?;
            redraw = false;
        }
        if game.is_over() {
            hold_final_frame()?;
            return Ok(summary(&game));
        }

        if event::poll(poll_timeout(&clock))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some((slot, command)) = versus_command(key) {
                        match game.apply(slot, command) {
                            Outcome::Quit => return Ok(summary(&game)),
                            outcome => redraw |= outcome.changed(),
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    redraw = true;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        if clock.advance(now - last) {
            redraw |= game.gravity_tick().iter().any(Outcome::changed);
        }
        last = now;
    }
}

/// Leave the "Game over!" frame up for a moment; any key skips the wait.
fn hold_final_frame() -> Result<()> {
    if event::poll(GAME_OVER_HOLD)? {
        let _ = event::read()?;
    }
    Ok(())
}
