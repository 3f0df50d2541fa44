//! Session state and core simulation types
//!
//! A `GameState` is one session: entities, door ledger, score and outcome.
//! Reset replaces all of it except the static world, tuning and RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::gate::TaskGate;
use super::world::{DoorKind, World};
use crate::tuning::Tuning;

/// Predator AI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PredatorMode {
    #[default]
    Wander,
    Chase,
}

/// Why a run ended badly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefeatReason {
    /// Walked into a lake
    Hazard,
    /// Caught by the wolf
    Predator,
}

/// Session outcome; both terminal variants stick until reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Victory,
    Defeat(DefeatReason),
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// The player avatar (velocity is derived from the held direction each frame)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
}

/// The wolf
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Predator {
    pub pos: Vec2,
    /// Velocity of the last applied step (units/s)
    pub vel: Vec2,
    pub radius: f32,
    pub mode: PredatorMode,
    pub wander_target: Vec2,
    /// Set after a fully blocked move; the next wander frame picks a new target
    pub needs_new_target: bool,
}

/// A door and its ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub id: u32,
    pub kind: DoorKind,
    pub pos: Vec2,
    pub open: bool,
}

/// Things that happened during a frame or a gate call, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    TaskStarted { door_id: u32, kind: DoorKind },
    AnswerCorrect { door_id: u32, reward: i64 },
    AnswerWrong { door_id: u32, penalty: i64 },
    TaskCancelled { door_id: u32 },
    DoorOpened { door_id: u32 },
    PredatorModeChanged { mode: PredatorMode },
    Victory { score: i64 },
    Defeat { reason: DefeatReason },
    Reset,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Wander sampling RNG
    pub rng: Pcg32,
    pub world: World,
    pub tuning: Tuning,
    /// Signed, unbounded
    pub score: i64,
    /// Door ledger in world iteration order
    pub doors: Vec<Door>,
    pub player: Player,
    pub predator: Predator,
    pub outcome: Outcome,
    pub gate: TaskGate,
    /// Unfrozen frames simulated since the last reset
    pub time_ticks: u64,
    /// Pending events for feedback/presentation
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session on the standard map with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_world(World::standard(), Tuning::default(), seed)
    }

    pub fn with_world(world: World, tuning: Tuning, seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player {
                pos: world.player_start,
                radius: world.player_radius,
            },
            predator: Predator {
                pos: world.predator_start,
                vel: Vec2::ZERO,
                radius: world.predator_radius,
                mode: PredatorMode::Wander,
                wander_target: world.wander_home,
                needs_new_target: false,
            },
            doors: Vec::new(),
            world,
            tuning,
            score: 0,
            outcome: Outcome::InProgress,
            gate: TaskGate::default(),
            time_ticks: 0,
            events: Vec::new(),
        };
        state.doors = state.fresh_doors();
        log::info!(
            "New session (seed {}, {} doors, {} hazards)",
            seed,
            state.doors.len(),
            state.world.hazards.len()
        );
        state
    }

    fn fresh_doors(&self) -> Vec<Door> {
        self.world
            .doors
            .iter()
            .map(|d| Door {
                id: d.id,
                kind: d.kind,
                pos: d.pos,
                open: false,
            })
            .collect()
    }

    /// Back to the starting line: entities home, doors shut, score zero
    pub fn reset(&mut self) {
        self.player = Player {
            pos: self.world.player_start,
            radius: self.world.player_radius,
        };
        self.predator = Predator {
            pos: self.world.predator_start,
            vel: Vec2::ZERO,
            radius: self.world.predator_radius,
            mode: PredatorMode::Wander,
            wander_target: self.world.wander_home,
            needs_new_target: false,
        };
        self.doors = self.fresh_doors();
        self.score = 0;
        self.outcome = Outcome::InProgress;
        self.gate = TaskGate::default();
        self.time_ticks = 0;
        self.events.clear();
        self.events.push(GameEvent::Reset);
        log::info!("Session reset");
    }

    /// Movement and AI are skipped while a task is open or the run is over
    pub fn is_frozen(&self) -> bool {
        self.outcome.is_terminal() || self.gate.is_active()
    }

    pub fn door(&self, id: u32) -> Option<&Door> {
        self.doors.iter().find(|d| d.id == id)
    }

    pub fn door_mut(&mut self, id: u32) -> Option<&mut Door> {
        self.doors.iter_mut().find(|d| d.id == id)
    }

    pub fn closed_doors(&self) -> usize {
        self.doors.iter().filter(|d| !d.open).count()
    }

    /// Enter a terminal outcome (ignored if the run already ended)
    pub fn finish(&mut self, outcome: Outcome) {
        if self.outcome.is_terminal() || !outcome.is_terminal() {
            return;
        }
        self.outcome = outcome;
        match outcome {
            Outcome::Victory => {
                log::info!("Victory with score {}", self.score);
                self.events.push(GameEvent::Victory { score: self.score });
            }
            Outcome::Defeat(reason) => {
                log::info!("Defeat: {:?} (score {})", reason, self.score);
                self.events.push(GameEvent::Defeat { reason });
            }
            Outcome::InProgress => {}
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
