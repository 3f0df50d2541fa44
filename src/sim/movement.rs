//! Player movement
//!
//! One cardinal direction at a time, fixed speed, clamped to the board.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::clamp_to_board;
use super::state::GameState;

/// Held movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in board space (y grows downward)
    pub fn unit(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }

    /// Map a keyboard key name (arrows or WASD) to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "up" | "w" | "arrowup" => Some(Direction::Up),
            "down" | "s" | "arrowdown" => Some(Direction::Down),
            "left" | "a" | "arrowleft" => Some(Direction::Left),
            "right" | "d" | "arrowright" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Compute the next player position for a held direction
pub fn step_position(
    pos: Vec2,
    radius: f32,
    dir: Direction,
    speed: f32,
    dt: f32,
    width: f32,
    height: f32,
) -> Vec2 {
    let next = pos + dir.unit() * speed * dt.max(0.0);
    clamp_to_board(next, radius, width, height)
}

/// Move the player for one frame; returns whether the position was updated
pub fn move_player(state: &mut GameState, held: Option<Direction>, dt: f32) -> bool {
    if state.is_frozen() {
        return false;
    }
    let Some(dir) = held else {
        return false;
    };
    let player = &mut state.player;
    player.pos = step_position(
        player.pos,
        player.radius,
        dir,
        state.tuning.player_speed,
        dt,
        state.world.width,
        state.world.height,
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{DefeatReason, Outcome};
    use crate::sim::tasks::RandomTaskGenerator;
    use proptest::prelude::*;

    #[test]
    fn test_moves_along_single_axis() {
        let mut state = GameState::new(1);
        let start = state.player.pos;
        assert!(move_player(&mut state, Some(Direction::Right), 0.1));
        assert!((state.player.pos.x - (start.x + 16.0)).abs() < 1e-4);
        assert_eq!(state.player.pos.y, start.y);

        assert!(move_player(&mut state, Some(Direction::Up), 0.1));
        assert!((state.player.pos.y - (start.y - 16.0)).abs() < 1e-4);
    }

    #[test]
    fn test_no_direction_is_noop() {
        let mut state = GameState::new(1);
        let start = state.player.pos;
        assert!(!move_player(&mut state, None, 0.1));
        assert_eq!(state.player.pos, start);
    }

    #[test]
    fn test_frozen_is_noop() {
        let mut state = GameState::new(1);
        let start = state.player.pos;
        let door = state.doors[0].id;
        crate::sim::gate::activate(&mut state, door, &mut RandomTaskGenerator::new(3)).unwrap();
        assert!(!move_player(&mut state, Some(Direction::Down), 0.1));
        assert_eq!(state.player.pos, start);

        crate::sim::gate::cancel(&mut state);
        state.finish(Outcome::Defeat(DefeatReason::Predator));
        assert!(!move_player(&mut state, Some(Direction::Down), 0.1));
        assert_eq!(state.player.pos, start);
    }

    #[test]
    fn test_clamps_at_edge() {
        let mut state = GameState::new(1);
        for _ in 0..100 {
            move_player(&mut state, Some(Direction::Left), 0.05);
        }
        assert_eq!(state.player.pos.x, state.player.radius);
    }

    #[test]
    fn test_direction_from_key() {
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("d"), Some(Direction::Right));
        assert_eq!(Direction::from_key("jump"), None);
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn prop_player_stays_on_board(
            x in 0.0f32..800.0,
            y in 0.0f32..480.0,
            dir in any_direction(),
            dt in 0.0f32..100.0,
        ) {
            let r = 14.0;
            let p = step_position(Vec2::new(x, y), r, dir, 160.0, dt, 800.0, 480.0);
            prop_assert!(p.x >= r && p.x <= 800.0 - r);
            prop_assert!(p.y >= r && p.y <= 480.0 - r);
        }
    }
}
