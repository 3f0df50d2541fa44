//! Door Quest headless runner
//!
//! Plays a seeded session with a simple autopilot and prints the final
//! snapshot as JSON. Usage:
//!
//! ```text
//! door-quest [--seed N] [--frames N] [--tuning PATH]
//! ```

use std::error::Error;

use door_quest::consts::SIM_DT;
use door_quest::sim::{Direction, GameEvent, World};
use door_quest::snapshot::TaskView;
use door_quest::{Game, Snapshot, Tuning};

/// Command line options
struct Args {
    seed: u64,
    frames: u32,
    tuning: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            seed: 1,
            frames: 60 * 120,
            tuning: None,
        }
    }
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = || iter.next().ok_or_else(|| format!("{flag} needs a value"));
        match flag.as_str() {
            "--seed" => args.seed = value()?.parse()?,
            "--frames" => args.frames = value()?.parse()?,
            "--tuning" => args.tuning = Some(value()?),
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }
    Ok(args)
}

/// Drives the player toward the nearest closed door and answers whatever it asks
#[derive(Default)]
struct Autopilot {
    /// Language option index to try next for the open door
    language_pick: usize,
}

impl Autopilot {
    fn steer(&self, snap: &Snapshot, world: &World) -> Option<Direction> {
        let target = snap
            .doors
            .iter()
            .filter(|d| !d.open)
            .min_by(|a, b| {
                a.pos
                    .distance_squared(snap.player)
                    .total_cmp(&b.pos.distance_squared(snap.player))
            })?
            .pos;

        let delta = target - snap.player;
        let horizontal = if delta.x < 0.0 {
            Direction::Left
        } else {
            Direction::Right
        };
        let vertical = if delta.y < 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };
        let (first, second) = if delta.x.abs() > delta.y.abs() {
            (horizontal, vertical)
        } else {
            (vertical, horizontal)
        };

        // Look a few frames ahead and sidestep lakes
        let safe = |dir: Direction| {
            let ahead = snap.player + dir.unit() * snap.player_radius * 1.5;
            !world.hits_hazard(ahead, snap.player_radius)
        };
        [first, second].into_iter().find(|&d| safe(d)).or(Some(first))
    }

    fn answer(&mut self, game: &mut Game, task: &TaskView) {
        match task {
            TaskView::Math { a, b, op, .. } => {
                let (a, b) = (i64::from(*a), i64::from(*b));
                let value = if *op == '+' { a + b } else { a - b };
                game.submit(&value.to_string());
            }
            TaskView::Language { options, .. } => {
                let word = options[self.language_pick % 2].clone();
                self.language_pick += 1;
                game.choose(&word);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = parse_args()?;

    let tuning = match &args.tuning {
        Some(path) => Tuning::from_json(&std::fs::read_to_string(path)?)?,
        None => Tuning::default(),
    };
    log::info!("Door Quest starting with seed: {}", args.seed);

    let mut game = Game::with_tuning(args.seed, tuning);
    let mut pilot = Autopilot::default();

    for frame in 0..args.frames {
        let snap = game.snapshot();
        if snap.outcome.is_terminal() {
            break;
        }

        if let Some(task) = &snap.task {
            pilot.answer(&mut game, task);
        } else {
            pilot.language_pick = 0;
            match pilot.steer(&snap, &game.state().world) {
                Some(dir) => game.set_direction(dir),
                None => game.clear_direction(),
            }
        }

        for event in game.frame(SIM_DT) {
            match event {
                GameEvent::PredatorModeChanged { .. } => log::debug!("[{frame}] {:?}", event),
                _ => log::info!("[{frame}] {:?}", event),
            }
        }
        for cue in game.feedback_mut().drain_cues() {
            log::debug!("Cue {:?} at {:.2}", cue.effect, cue.volume);
        }
    }

    let snap = game.snapshot();
    log::info!(
        "Finished: {:?}, score {}, {}/{} doors open",
        snap.outcome,
        snap.score,
        snap.doors_open(),
        snap.doors.len()
    );
    println!("{}", snap.to_json()?);
    Ok(())
}
