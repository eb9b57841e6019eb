//! Brick Sweep headless runner
//!
//! Drives the simulation with a paddle autopilot and logs game events.
//! Run with `RUST_LOG=info` (or `debug` for every collision).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use brick_sweep::GameConfig;
use brick_sweep::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

#[derive(Debug, Parser)]
#[command(name = "brick-sweep", about = "Run a headless Brick Sweep round")]
struct Args {
    /// JSON config file (defaults are used for missing fields)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Give up after this many ticks
    #[arg(long, default_value_t = 50_000)]
    ticks: u64,

    /// Paddle dead zone around the ball, in pixels
    #[arg(long, default_value_t = 10.0)]
    dead_zone: f32,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,
}

/// End-of-run summary
#[derive(Debug, Serialize)]
struct RunSummary {
    ticks: u64,
    phase: GamePhase,
    score: u64,
    lives: u8,
    bricks_left: usize,
}

/// Follow the ball with the paddle center
fn autopilot(state: &GameState, dead_zone: f32) -> TickInput {
    let paddle_x = state.paddle.rect.center().x;
    let ball_x = state.ball.pos.x;
    TickInput {
        move_left: ball_x < paddle_x - dead_zone,
        move_right: ball_x > paddle_x + dead_zone,
        ..Default::default()
    }
}

fn run(config: GameConfig, max_ticks: u64, dead_zone: f32) -> RunSummary {
    let mut state = GameState::at_menu(config);
    let start = TickInput {
        restart: true,
        ..Default::default()
    };
    tick(&mut state, &start);

    let mut ticks = 0;
    while ticks < max_ticks && state.phase == GamePhase::Playing {
        let input = autopilot(&state, dead_zone);
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::BrickDestroyed { index, score } => {
                    log::debug!("tick {ticks}: brick {index} destroyed, score {score}");
                }
                other => log::info!("tick {ticks}: {other:?}"),
            }
        }
        ticks += 1;
    }

    if state.phase == GamePhase::Playing {
        log::warn!("Stopped after {max_ticks} ticks with the round still in play");
    }

    RunSummary {
        ticks,
        phase: state.phase,
        score: state.score,
        lives: state.lives,
        bricks_left: state.bricks.active_count(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    log::info!(
        "Brick Sweep starting: {}x{} canvas, {}x{} bricks",
        config.canvas_width,
        config.canvas_height,
        config.brick_rows,
        config.brick_cols
    );

    let summary = run(config, args.ticks, args.dead_zone);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{:?} after {} ticks: score {}, lives {}, bricks left {}",
            summary.phase, summary.ticks, summary.score, summary.lives, summary.bricks_left
        );
    }
    Ok(())
}
