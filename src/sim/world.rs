//! Static map description
//!
//! Everything here is fixed for the lifetime of a session: board bounds,
//! hazards, decorations, door placements and the entity spawn points.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, circle_hits_any};
use crate::consts::*;

/// Quiz kind gated by a door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorKind {
    Math,
    Language,
}

/// Where a door sits and what it asks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorPlacement {
    pub id: u32,
    pub kind: DoorKind,
    /// Door center
    pub pos: Vec2,
}

/// Purely visual map features (never collide)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecorationKind {
    Tree,
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub rect: Rect,
}

/// The static world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    /// Lakes: touching one ends the run
    pub hazards: Vec<Rect>,
    pub decorations: Vec<Decoration>,
    /// Doors in iteration order (first match wins on overlap)
    pub doors: Vec<DoorPlacement>,
    pub player_start: Vec2,
    pub player_radius: f32,
    pub predator_start: Vec2,
    pub predator_radius: f32,
    /// Initial wander target, also used when resampling finds no free spot
    pub wander_home: Vec2,
}

/// Center of tile (tx, ty)
fn tile_center(tx: u32, ty: u32) -> Vec2 {
    Vec2::new(tx as f32 * TILE + TILE / 2.0, ty as f32 * TILE + TILE / 2.0)
}

fn tile_rect(tx: u32, ty: u32, tw: u32, th: u32) -> Rect {
    Rect::new(
        tx as f32 * TILE,
        ty as f32 * TILE,
        tw as f32 * TILE,
        th as f32 * TILE,
    )
}

impl World {
    /// The standard 20x12 meadow: two lakes, ten doors alternating math/language
    pub fn standard() -> Self {
        let hazards = vec![tile_rect(5, 3, 3, 2), tile_rect(10, 7, 3, 2)];

        let mut decorations: Vec<Decoration> = [(1, 1), (4, 1), (18, 1), (17, 3), (2, 7), (6, 10), (14, 10)]
            .iter()
            .map(|&(tx, ty)| Decoration {
                kind: DecorationKind::Tree,
                rect: tile_rect(tx, ty, 1, 1),
            })
            .collect();
        decorations.push(Decoration {
            kind: DecorationKind::Path,
            rect: Rect::new(0.0, 5.0 * TILE + 14.0, BOARD_W, 12.0),
        });
        decorations.push(Decoration {
            kind: DecorationKind::Path,
            rect: Rect::new(8.0 * TILE + 14.0, 0.0, 12.0, BOARD_H),
        });

        let tiles = [
            (6, 2),
            (12, 2),
            (16, 4),
            (3, 5),
            (9, 6),
            (14, 7),
            (2, 9),
            (7, 9),
            (12, 9),
            (17, 9),
        ];
        let doors = tiles
            .iter()
            .enumerate()
            .map(|(i, &(tx, ty))| DoorPlacement {
                id: i as u32 + 1,
                kind: if i % 2 == 0 {
                    DoorKind::Math
                } else {
                    DoorKind::Language
                },
                pos: tile_center(tx, ty),
            })
            .collect();

        Self {
            width: BOARD_W,
            height: BOARD_H,
            hazards,
            decorations,
            doors,
            player_start: tile_center(2, 2),
            player_radius: PLAYER_RADIUS,
            predator_start: tile_center(15, 6),
            predator_radius: PREDATOR_RADIUS,
            wander_home: Vec2::new(10.0 * TILE, 6.0 * TILE),
        }
    }

    /// Open board of the given size, no hazards or doors (handy for tests)
    pub fn empty(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            hazards: Vec::new(),
            decorations: Vec::new(),
            doors: Vec::new(),
            player_start: Vec2::new(width * 0.25, height * 0.5),
            player_radius: PLAYER_RADIUS,
            predator_start: Vec2::new(width * 0.75, height * 0.5),
            predator_radius: PREDATOR_RADIUS,
            wander_home: Vec2::new(width * 0.5, height * 0.5),
        }
    }

    /// Check whether a circle touches any hazard
    #[inline]
    pub fn hits_hazard(&self, center: Vec2, radius: f32) -> bool {
        circle_hits_any(center, radius, &self.hazards)
    }

    /// Interior region used for wander sampling: one tile in from every edge
    pub fn interior(&self) -> (Vec2, Vec2) {
        let margin = TILE.min(self.width / 2.0).min(self.height / 2.0);
        (
            Vec2::new(margin, margin),
            Vec2::new(self.width - margin, self.height - margin),
        )
    }
}

impl Default for World {
    fn default() -> Self {
        Self::standard()
    }
}
