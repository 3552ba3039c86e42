//! Slingshot headless entry point
//!
//! Runs the simulation without a window: a scripted pointer grabs the pouch,
//! pulls back away from the lowest falling man and lets go, over and over.
//! Useful for eyeballing balance changes from the log.
//!
//! Usage: `slingshot [--seed N] [--seconds N] [--tuning FILE]`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;

use slingshot::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use slingshot::platform::{FrameClock, InputTracker, RawInput};
use slingshot::sim::{GameEvent, SimState, step};
use slingshot::{RenderState, Tuning};

const FRAME_RATE: f64 = 60.0;
/// How far the demo pulls the ball back from the slingshot origin
const DEMO_PULL: f32 = 70.0;

#[derive(Debug, Parser)]
#[command(name = "slingshot")]
#[command(about = "Run the slingshot simulation headless with a scripted player")]
struct Args {
    /// RNG seed for the run
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 60.0)]
    seconds: f64,

    /// JSON tuning table overriding the defaults
    #[arg(long)]
    tuning: Option<PathBuf>,
}

/// Scripted pointer: grab, pull, release, rest
#[derive(Debug, Clone, Copy, PartialEq)]
enum DemoPhase {
    Reach,
    Pull { frames: u32 },
    Release,
    Rest { frames: u32 },
}

struct DemoPlayer {
    phase: DemoPhase,
    window: Vec2,
}

impl DemoPlayer {
    fn new(window: Vec2) -> Self {
        Self {
            phase: DemoPhase::Reach,
            window,
        }
    }

    /// Play-area point to window pixels
    fn to_window(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x, self.window.y - p.y)
    }

    /// Pointer that puts the ball on the far side of the origin from `target`
    fn pull_point(tuning: &Tuning, target: Option<Vec2>) -> Vec2 {
        let origin = tuning.slingshot_origin;
        let dir = target
            .map(|t| (t - origin).normalize_or_zero())
            .filter(|d| *d != Vec2::ZERO)
            .unwrap_or(Vec2::Y);
        origin - dir * DEMO_PULL + Vec2::splat(tuning.ball_half_size)
    }

    fn next(&mut self, state: &SimState) -> RawInput {
        let tuning = &state.tuning;
        let lowest = state
            .men
            .iter()
            .filter(|m| m.pos.y < self.window.y)
            .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|m| m.pos);

        let (pointer, button_down) = match self.phase {
            DemoPhase::Reach => {
                self.phase = DemoPhase::Pull { frames: 0 };
                (tuning.pouch_origin(), true)
            }
            DemoPhase::Pull { frames } => {
                self.phase = if frames >= 10 {
                    DemoPhase::Release
                } else {
                    DemoPhase::Pull { frames: frames + 1 }
                };
                (Self::pull_point(tuning, lowest), true)
            }
            DemoPhase::Release => {
                self.phase = DemoPhase::Rest { frames: 0 };
                (Self::pull_point(tuning, lowest), false)
            }
            DemoPhase::Rest { frames } => {
                self.phase = if frames >= 20 {
                    DemoPhase::Reach
                } else {
                    DemoPhase::Rest { frames: frames + 1 }
                };
                (tuning.pouch_origin(), false)
            }
        };

        RawInput {
            pointer: self.to_window(pointer),
            button_down,
            window: self.window,
        }
    }
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed reading tuning {}", path.display()))?;
    let tuning = Tuning::from_json(&json)
        .with_context(|| format!("invalid tuning {}", path.display()))?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(tuning)
}

fn run(args: Args) -> Result<()> {
    let tuning = load_tuning(args.tuning.as_ref())?;

    let mut state = SimState::with_tuning(args.seed, tuning);
    log::info!("Game initialized with seed: {}", args.seed);

    let window = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut player = DemoPlayer::new(window);
    let mut tracker = InputTracker::new();
    let mut clock = FrameClock::default();

    let frames = (args.seconds * FRAME_RATE).ceil() as u64;
    let mut last: Option<RenderState> = None;
    for frame in 0..=frames {
        let now = frame as f64 / FRAME_RATE;
        let dt = clock.tick(now);
        let input = tracker.sample(&player.next(&state));
        let render = step(&mut state, &input, dt);

        for event in &render.events {
            match event {
                GameEvent::RoundReset { score, highest } => {
                    log::info!("[{:6.2}s] miss: wave worth {}, best {}", now, score, highest)
                }
                GameEvent::ManHit { pos } => log::debug!("[{:6.2}s] hit at {:?}", now, pos),
                _ => {}
            }
        }
        last = Some(render);
    }

    log::info!(
        "Ran {} frames ({:.1}s): {} shots fired, {} men spawned",
        state.frames(),
        state.elapsed(),
        state.shots_fired(),
        state.men_spawned()
    );
    if let Some(render) = last {
        println!("{}", serde_json::to_string_pretty(&render)?);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Slingshot (headless) starting...");

    let args = Args::parse();
    if let Err(err) = run(args) {
        log::error!("{err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
