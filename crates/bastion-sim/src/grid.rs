//! Map grid: a fixed arrangement of Road and Land tiles.
//!
//! A Land tile owns at most one tower. Towers are set once and never
//! replaced; the grid also keeps an id index so upgrades find their tower
//! without scanning the map.

use std::collections::HashMap;

use bastion_core::config::SimConfig;
use bastion_core::enums::{RejectReason, TileKind};
use bastion_core::types::{TileCoord, TowerId};

use crate::tower::Tower;

#[derive(Debug, Clone)]
pub enum Tile {
    Road,
    Land { tower: Option<Tower> },
}

/// Successful outcome of a placement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A new tower was built.
    Placed(TowerId),
    /// The tile already had this tower; nothing changed.
    Occupied(TowerId),
}

#[derive(Debug, Clone)]
pub struct GridModel {
    cols: u32,
    rows: u32,
    /// Row-major.
    tiles: Vec<Tile>,
    tower_tiles: HashMap<TowerId, usize>,
    next_tower_id: u32,
}

impl Tile {
    pub fn kind(&self) -> TileKind {
        match self {
            Tile::Road => TileKind::Road,
            Tile::Land { .. } => TileKind::Land,
        }
    }

    pub fn tower(&self) -> Option<&Tower> {
        match self {
            Tile::Land { tower } => tower.as_ref(),
            Tile::Road => None,
        }
    }
}

impl GridModel {
    /// Build a grid from layout rows (`.` Land, `#` Road).
    pub fn from_layout<S: AsRef<str>>(layout: &[S]) -> Result<Self, String> {
        let cols = layout
            .first()
            .map(|row| row.as_ref().chars().count())
            .unwrap_or(0);
        if cols == 0 {
            return Err("layout must have at least one non-empty row".into());
        }

        let mut tiles = Vec::with_capacity(cols * layout.len());
        for (row_idx, row) in layout.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != cols {
                return Err(format!("layout row {row_idx} has a different width"));
            }
            for glyph in row.chars() {
                let tile = match TileKind::from_glyph(glyph) {
                    Some(TileKind::Road) => Tile::Road,
                    Some(TileKind::Land) => Tile::Land { tower: None },
                    None => return Err(format!("layout row {row_idx} has unknown tile '{glyph}'")),
                };
                tiles.push(tile);
            }
        }

        Ok(Self {
            cols: cols as u32,
            rows: layout.len() as u32,
            tiles,
            tower_tiles: HashMap::new(),
            next_tower_id: 0,
        })
    }

    pub fn from_config(config: &SimConfig) -> Result<Self, String> {
        Self::from_layout(&config.layout)
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn tile(&self, coord: TileCoord) -> Option<&Tile> {
        self.index_of(coord).map(|idx| &self.tiles[idx])
    }

    /// All tiles with their coordinates, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (TileCoord, &Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(idx, tile)| (self.coord_of(idx), tile))
    }

    /// Build a tower on the given tile.
    ///
    /// Placing on a tile that already has a tower is a successful no-op.
    pub fn place_tower(
        &mut self,
        coord: TileCoord,
        config: &SimConfig,
    ) -> Result<Placement, RejectReason> {
        let idx = self.index_of(coord).ok_or(RejectReason::OutOfBounds)?;
        let next_id = TowerId(self.next_tower_id);

        match &mut self.tiles[idx] {
            Tile::Road => Err(RejectReason::NotLand),
            Tile::Land { tower: Some(existing) } => Ok(Placement::Occupied(existing.id)),
            Tile::Land { tower } => {
                *tower = Some(Tower::new(next_id, coord, config));
                self.tower_tiles.insert(next_id, idx);
                self.next_tower_id += 1;
                Ok(Placement::Placed(next_id))
            }
        }
    }

    pub fn tower(&self, id: TowerId) -> Option<&Tower> {
        let idx = *self.tower_tiles.get(&id)?;
        self.tiles[idx].tower()
    }

    pub fn tower_mut(&mut self, id: TowerId) -> Option<&mut Tower> {
        let idx = *self.tower_tiles.get(&id)?;
        match &mut self.tiles[idx] {
            Tile::Land { tower } => tower.as_mut(),
            Tile::Road => None,
        }
    }

    pub fn tower_at(&self, coord: TileCoord) -> Option<&Tower> {
        self.tile(coord).and_then(Tile::tower)
    }

    pub fn tower_count(&self) -> usize {
        self.tower_tiles.len()
    }

    /// Every placed tower in row-major tile order.
    pub fn towers(&self) -> impl Iterator<Item = &Tower> + '_ {
        self.tiles.iter().filter_map(Tile::tower)
    }

    /// Mutable access to every placed tower in row-major tile order.
    pub fn towers_mut(&mut self) -> impl Iterator<Item = &mut Tower> + '_ {
        self.tiles.iter_mut().filter_map(|tile| match tile {
            Tile::Land { tower } => tower.as_mut(),
            Tile::Road => None,
        })
    }

    fn index_of(&self, coord: TileCoord) -> Option<usize> {
        (coord.col < self.cols && coord.row < self.rows)
            .then(|| (coord.row * self.cols + coord.col) as usize)
    }

    fn coord_of(&self, idx: usize) -> TileCoord {
        let idx = idx as u32;
        TileCoord::new(idx % self.cols, idx / self.cols)
    }
}
