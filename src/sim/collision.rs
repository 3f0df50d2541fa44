//! Collision and trigger detection
//!
//! Checks run in a fixed priority order and the first hit wins the frame:
//! lake, then wolf, then doors. Detection only reads state; applying the
//! result is up to the caller.

use glam::Vec2;

use super::geometry::distance;
use super::state::{DefeatReason, GameState};

/// What the player touched this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Hazard,
    Predator,
    /// Closed door within reach (first in iteration order)
    Door(u32),
}

impl Contact {
    pub fn defeat_reason(&self) -> Option<DefeatReason> {
        match self {
            Contact::Hazard => Some(DefeatReason::Hazard),
            Contact::Predator => Some(DefeatReason::Predator),
            Contact::Door(_) => None,
        }
    }
}

/// Predator contact: centers closer than the radii sum minus the margin
#[inline]
pub fn predator_contact(
    player: Vec2,
    player_radius: f32,
    predator: Vec2,
    predator_radius: f32,
    margin: f32,
) -> bool {
    distance(player, predator) < player_radius + predator_radius - margin
}

/// Door trigger: player center inside the door's rectangular reach
#[inline]
pub fn door_in_reach(player: Vec2, door: Vec2, reach_x: f32, reach_y: f32) -> bool {
    let d = (player - door).abs();
    d.x < reach_x && d.y < reach_y
}

/// Run the detector for the current frame
pub fn detect(state: &GameState) -> Option<Contact> {
    let player = &state.player;

    if state.world.hits_hazard(player.pos, player.radius) {
        return Some(Contact::Hazard);
    }

    let predator = &state.predator;
    if predator_contact(
        player.pos,
        player.radius,
        predator.pos,
        predator.radius,
        state.tuning.contact_margin,
    ) {
        return Some(Contact::Predator);
    }

    if state.gate.is_active() {
        return None;
    }
    state
        .doors
        .iter()
        .find(|d| {
            !d.open
                && door_in_reach(
                    player.pos,
                    d.pos,
                    state.tuning.door_reach_x,
                    state.tuning.door_reach_y,
                )
        })
        .map(|d| Contact::Door(d.id))
}
