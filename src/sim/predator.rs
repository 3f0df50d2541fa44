//! Predator AI: wander/chase steering with hazard sliding
//!
//! Mode is a pure function of the frame-start distance to the player; both
//! modes move at the same speed and differ only in where they steer.

use glam::Vec2;
use rand::Rng;

use super::geometry::{clamp_to_board, distance};
use super::state::{GameEvent, GameState, PredatorMode};
use super::world::World;

/// Chase iff the player is strictly inside the chase radius
#[inline]
pub fn mode_for(player: Vec2, predator: Vec2, chase_radius: f32) -> PredatorMode {
    if distance(player, predator) < chase_radius {
        PredatorMode::Chase
    } else {
        PredatorMode::Wander
    }
}

/// Pick a hazard-free wander target inside the map interior
///
/// Tries up to `samples` uniform candidates; falls back to the world's home
/// point when every candidate lands in (or touches) a hazard.
pub fn sample_wander_target<R: Rng>(
    world: &World,
    radius: f32,
    samples: u32,
    rng: &mut R,
) -> Vec2 {
    let (lo, hi) = world.interior();
    for _ in 0..samples {
        let candidate = Vec2::new(rng.random_range(lo.x..=hi.x), rng.random_range(lo.y..=hi.y));
        if !world.hits_hazard(candidate, radius) {
            return candidate;
        }
    }
    log::debug!("No free wander target in {} samples, heading home", samples);
    world.wander_home
}

/// Resolve a proposed displacement against the hazards
///
/// Tries the full step, then the X-only and Y-only components. Returns the
/// first position that stays clear, or `None` when the predator is boxed in.
/// A zero-length axis component never counts as progress.
pub fn slide_step(world: &World, pos: Vec2, radius: f32, delta: Vec2) -> Option<Vec2> {
    let propose = |d: Vec2| clamp_to_board(pos + d, radius, world.width, world.height);

    let full = propose(delta);
    if !world.hits_hazard(full, radius) {
        return Some(full);
    }

    let axes = [Vec2::new(delta.x, 0.0), Vec2::new(0.0, delta.y)];
    axes.into_iter()
        .filter(|d| *d != Vec2::ZERO)
        .map(propose)
        .find(|p| *p != pos && !world.hits_hazard(*p, radius))
}

/// Advance the predator one frame
///
/// `player_pos` is the player's position at the start of the frame. Returns the
/// mode used for this frame.
pub fn update_predator(state: &mut GameState, player_pos: Vec2, dt: f32) -> PredatorMode {
    if state.is_frozen() {
        return state.predator.mode;
    }

    let GameState {
        predator,
        world,
        rng,
        tuning,
        events,
        ..
    } = state;

    let mode = mode_for(player_pos, predator.pos, tuning.chase_radius);
    if mode != predator.mode {
        log::debug!("Predator {:?} -> {:?}", predator.mode, mode);
        events.push(GameEvent::PredatorModeChanged { mode });
        predator.mode = mode;
    }

    let target = match mode {
        PredatorMode::Chase => player_pos,
        PredatorMode::Wander => {
            if predator.needs_new_target
                || distance(predator.pos, predator.wander_target) < tuning.arrival_radius
            {
                predator.wander_target =
                    sample_wander_target(world, predator.radius, tuning.wander_samples, rng);
                predator.needs_new_target = false;
                log::trace!("Predator wanders toward {:?}", predator.wander_target);
            }
            predator.wander_target
        }
    };

    let dt = dt.max(0.0);
    let delta = (target - predator.pos).normalize_or_zero() * tuning.predator_speed * dt;

    match slide_step(world, predator.pos, predator.radius, delta) {
        Some(next) => {
            predator.vel = if dt > 0.0 {
                (next - predator.pos) / dt
            } else {
                Vec2::ZERO
            };
            predator.pos = next;
        }
        None => {
            log::trace!("Predator blocked at {:?}", predator.pos);
            predator.vel = Vec2::ZERO;
            if mode == PredatorMode::Wander {
                predator.needs_new_target = true;
            }
        }
    }

    mode
}
