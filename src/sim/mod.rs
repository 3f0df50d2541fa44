//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering,
//! audio and platform code:
//! - Caller-supplied dt, clamped per frame
//! - Seeded RNG only
//! - Stable iteration order (doors in world order)

pub mod collision;
pub mod gate;
pub mod geometry;
pub mod movement;
pub mod predator;
pub mod state;
pub mod tasks;
pub mod tick;
pub mod world;

pub use collision::{Contact, detect};
pub use gate::{ActiveTask, AnswerResult, TaskGate};
pub use geometry::{Rect, circle_rect_overlap, clamp, distance};
pub use movement::Direction;
pub use state::{
    DefeatReason, Door, GameEvent, GameState, Outcome, Player, Predator, PredatorMode,
};
pub use tasks::{
    LanguageTask, MathOp, MathTask, RandomTaskGenerator, Task, TaskError, TaskGenerator,
};
pub use tick::{TickInput, tick};
pub use world::{Decoration, DecorationKind, DoorKind, DoorPlacement, World};
