// Play field: nine fixed cells holding at most one live spawn.
use serde::{Deserialize, Serialize};

pub const CELL_COUNT: usize = 9;
pub const GRID_COLUMNS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnKind {
    /// Water can, worth +1.
    Collectible,
    /// Bomb, worth -1.
    Hazard,
}

impl SpawnKind {
    pub fn aria_label(self) -> &'static str {
        match self {
            SpawnKind::Collectible => "collect water can",
            SpawnKind::Hazard => "bomb - dangerous",
        }
    }
}

/// Identity of one spawn instance. Doubles as its interaction token: the grid
/// hands a spawn out once per id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub id: SpawnId,
    pub kind: SpawnKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [Option<Spawn>; CELL_COUNT],
}

impl Grid {
    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    /// Clears every cell, then puts `spawn` into `cell`. Out-of-range cells leave the grid empty.
    pub fn place(&mut self, cell: usize, spawn: Spawn) {
        self.clear();
        if let Some(slot) = self.cells.get_mut(cell) {
            *slot = Some(spawn);
        }
    }

    /// Removes and returns the spawn with `id`. A second call with the same id yields `None`.
    pub fn take(&mut self, id: SpawnId) -> Option<Spawn> {
        self.cells
            .iter_mut()
            .find(|c| matches!(c, Some(s) if s.id == id))
            .and_then(Option::take)
    }

    pub fn cells(&self) -> &[Option<Spawn>; CELL_COUNT] {
        &self.cells
    }

    /// The live spawn and its cell, if any.
    pub fn live(&self) -> Option<(usize, Spawn)> {
        self.cells
            .iter()
            .enumerate()
            .find_map(|(i, c)| c.map(|s| (i, s)))
    }

    pub fn is_empty(&self) -> bool {
        self.live().is_none()
    }
}
