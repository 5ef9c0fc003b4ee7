//! Fortune Catch headless demo
//!
//! Runs one round with the autopilot at the controls and logs every event
//! the engine emits. Rendering and audio front-ends consume the same event
//! stream.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use fortune_catch::sim::autopilot;
use fortune_catch::{Engine, GameConfig, GameEvent, GamePhase};

#[derive(Parser, Debug)]
#[command(name = "fortune-catch", about = "Play one autopiloted round of Fortune Catch")]
struct Cli {
    /// JSON config file (defaults to the classic 30-second round)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Override the round length in seconds
    #[arg(long)]
    duration: Option<u32>,

    /// Pace the round in wall-clock time instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Frame length in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
}

/// Game instance holding the engine and frame bookkeeping
struct Game {
    engine: Engine,
    frame: Duration,
    frames: u64,
    caught: u32,
    missed: u32,
}

impl Game {
    fn new(engine: Engine, frame: Duration) -> Self {
        Self {
            engine,
            frame,
            frames: 0,
            caught: 0,
            missed: 0,
        }
    }

    /// One frame: input, simulation, event fan-out
    fn update(&mut self) {
        let field = self.engine.config().field;
        if let Some(dir) = autopilot::steer(self.engine.state(), &field) {
            self.engine.move_player(dir);
        }
        self.engine.advance(self.frame);
        self.frames += 1;

        for event in self.engine.drain_events() {
            self.handle(event);
        }
    }

    fn handle(&mut self, event: GameEvent) {
        use fortune_catch::sim::RemovalReason;
        match event {
            GameEvent::ItemRemoved { id, reason } => {
                match reason {
                    RemovalReason::Caught => self.caught += 1,
                    RemovalReason::Missed => self.missed += 1,
                }
                log::trace!("item {} removed ({:?})", id, reason);
            }
            GameEvent::ItemSpawned(item) => {
                log::trace!("item {} spawned: {:?} at x={:.1}", item.id, item.kind.kind, item.pos.x);
            }
            GameEvent::PlayerMoved(pos) => log::trace!("paddle at {:.0}%", pos),
            GameEvent::ScoreChanged(score) => log::debug!("score {}", score),
            GameEvent::TimeChanged(secs) => log::info!("{}s left", secs),
            GameEvent::SoundRequested(sound) => log::debug!("play {}", sound.clip_name()),
            GameEvent::Music(cue) => log::debug!("music {:?}", cue),
            GameEvent::PhaseChanged(phase) => log::info!("phase -> {:?}", phase),
            GameEvent::GameEnded(score) => log::info!("final score {}", score),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(duration) = cli.duration {
        config.game_duration_seconds = duration;
    }

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let engine = Engine::new(config, seed).context("invalid game configuration")?;
    let frame = Duration::from_millis(cli.frame_ms.max(1));
    let mut game = Game::new(engine, frame);

    game.engine.start();
    while game.engine.phase() == GamePhase::Playing {
        game.update();
        if cli.realtime {
            std::thread::sleep(frame);
        }
    }

    let state = game.engine.state();
    println!(
        "Round over after {:.1}s: score {} ({} caught, {} missed, {} frames, seed {})",
        game.engine.now().as_secs_f32(),
        state.score,
        game.caught,
        game.missed,
        game.frames,
        game.engine.seed()
    );
    Ok(())
}
