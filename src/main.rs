use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::INPUT_POLL_INTERVAL_MS;
use grid_snake::game::{GameMode, GameStatus};
use grid_snake::input::{Command, poll_command};
use grid_snake::pacing::Pacing;
use grid_snake::prefs::{self, Preferences};
use grid_snake::renderer;
use grid_snake::session::Session;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use grid_snake::ui::hud::HudInfo;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, info, warn};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// `single` for one snake, `multi` for two players on one keyboard.
    #[arg(long, default_value_t = GameMode::Single)]
    mode: GameMode,

    /// `fixed` keeps one speed; `accelerating` speeds up with every point.
    #[arg(long, default_value_t = Pacing::Fixed)]
    pacing: Pacing,

    /// Seed food placement for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file. Logging is off without it.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    #[arg(long = "log-level", default_value_t = Level::INFO)]
    log_level: Level,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.log_level)?;
    }

    let prefs_path = prefs::prefs_path();
    let prefs = match prefs::load_from(&prefs_path) {
        Ok(prefs) => prefs,
        Err(error) => {
            warn!(%error, "falling back to default preferences");
            eprintln!("Warning: {error}");
            Preferences::default()
        }
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(mode = %cli.mode, pacing = %cli.pacing, seed = ?cli.seed, "starting");

    install_panic_hook();
    run(Session::new(cli.mode, cli.pacing, rng), prefs, &prefs_path)
}

fn run(mut session: Session, mut prefs: Preferences, prefs_path: &Path) -> io::Result<()> {
    let mut terminal = TerminalSession::enter()?;
    let mut last_status = session.state().status();
    let mut previous_best = prefs.best_score;

    loop {
        let info = HudInfo {
            best_score: prefs.best_score,
            previous_best,
            theme: prefs.theme,
            tick_period: session.tick_period(),
        };
        terminal
            .terminal_mut()
            .draw(|frame| renderer::render(frame, session.state(), &info))?;

        let poll_timeout = Duration::from_millis(INPUT_POLL_INTERVAL_MS);
        if let Some(command) = poll_command(session.state().mode(), poll_timeout)? {
            match command {
                Command::Quit => break,
                Command::ToggleTheme => {
                    prefs.theme = prefs.theme.toggled();
                    save_prefs(prefs_path, &prefs);
                }
                other => {
                    session.handle(other, Instant::now());
                }
            }
        }

        session.poll(Instant::now());

        let status = session.state().status();
        if status != last_status {
            match status {
                GameStatus::Over => {
                    if prefs.record_score(session.state().best_agent_score()) {
                        info!(best_score = prefs.best_score, "new best score");
                        save_prefs(prefs_path, &prefs);
                    }
                }
                GameStatus::Ready => previous_best = prefs.best_score,
                GameStatus::Playing | GameStatus::Paused => {}
            }
            last_status = status;
        }
    }

    info!("quitting");
    Ok(())
}

fn save_prefs(path: &Path, prefs: &Preferences) {
    if let Err(error) = prefs::save_to(path, prefs) {
        warn!(%error, "failed to save preferences");
    }
}

fn init_logging(path: &Path, level: Level) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}
