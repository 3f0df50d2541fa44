//! Read-only view of a session for presentation
//!
//! Built once per frame. Math tasks expose the question but never the answer.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Door, GameState, Outcome, PredatorMode, Task};

/// The outstanding task as shown to the player
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskView {
    Math {
        door_id: u32,
        a: u32,
        b: u32,
        op: char,
    },
    Language {
        door_id: u32,
        /// Left/right presentation order
        options: [String; 2],
    },
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: Vec2,
    pub player_radius: f32,
    pub predator: Vec2,
    pub predator_radius: f32,
    pub predator_mode: PredatorMode,
    pub doors: Vec<Door>,
    pub score: i64,
    pub task: Option<TaskView>,
    pub outcome: Outcome,
    pub time_ticks: u64,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let task = state.gate.active().map(|active| match &active.task {
            Task::Math(t) => TaskView::Math {
                door_id: active.door_id,
                a: t.a,
                b: t.b,
                op: t.op.symbol(),
            },
            Task::Language(t) => {
                let [left, right] = t.options();
                TaskView::Language {
                    door_id: active.door_id,
                    options: [left.to_string(), right.to_string()],
                }
            }
        });

        Self {
            player: state.player.pos,
            player_radius: state.player.radius,
            predator: state.predator.pos,
            predator_radius: state.predator.radius,
            predator_mode: state.predator.mode,
            doors: state.doors.clone(),
            score: state.score,
            task,
            outcome: state.outcome,
            time_ticks: state.time_ticks,
        }
    }

    pub fn doors_open(&self) -> usize {
        self.doors.iter().filter(|d| d.open).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
