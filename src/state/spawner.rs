// Spawner decision logic. Pure: callers own the RNG and the grid.
use rand::Rng;

use super::grid::{CELL_COUNT, SpawnKind};
use crate::config::GameConfig;

/// Where and what to place on a spawner tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub cell: usize,
    pub kind: SpawnKind,
}

/// Regular tick: skips `1 - spawn_chance` of the time.
pub fn roll_tick<R: Rng>(rng: &mut R, cfg: &GameConfig) -> Option<Placement> {
    if rng.random_bool(cfg.spawn_chance) {
        Some(roll_placement(rng, cfg))
    } else {
        None
    }
}

/// Unconditional placement (used for the opening spawn of a round).
pub fn roll_placement<R: Rng>(rng: &mut R, cfg: &GameConfig) -> Placement {
    let cell = rng.random_range(0..CELL_COUNT);
    let kind = if rng.random_bool(cfg.hazard_chance) {
        SpawnKind::Hazard
    } else {
        SpawnKind::Collectible
    };
    Placement { cell, kind }
}
