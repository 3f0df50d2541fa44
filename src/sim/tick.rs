//! Frame step
//!
//! One call simulates one frame: player movement, predator AI, then contact
//! detection. Nothing moves while a task is open or the run is over.

use super::collision::{Contact, detect};
use super::gate;
use super::movement::{Direction, move_player};
use super::predator::update_predator;
use super::state::{GameState, Outcome};
use super::tasks::TaskGenerator;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Currently held direction (keyboard or touch pad)
    pub direction: Option<Direction>,
}

/// Advance the session by one frame of `dt` seconds
///
/// `dt` is clamped to `[0, tuning.max_frame_dt]` so a stalled frame cannot
/// tunnel entities through hazards.
pub fn tick<G: TaskGenerator + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    tasks: &mut G,
) {
    if state.is_frozen() {
        return;
    }
    let dt = state.tuning.clamp_dt(dt);
    state.time_ticks += 1;

    let player_start = state.player.pos;
    move_player(state, input.direction, dt);
    update_predator(state, player_start, dt);

    match detect(state) {
        Some(Contact::Door(door_id)) => {
            if let Err(err) = gate::activate(state, door_id, tasks) {
                log::warn!("Door {} stays shut: {}", door_id, err);
            }
        }
        Some(contact) => {
            if let Some(reason) = contact.defeat_reason() {
                state.finish(Outcome::Defeat(reason));
            }
        }
        None => {}
    }
}
