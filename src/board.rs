//! A side's board: its cells, its placed ships and shot resolution.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

use log::debug;

use crate::common::ShotOutcome;
use crate::config::{Fleet, BOARD_SIZE};
use crate::grid::{Cell, Coord, Grid};
use crate::placement::Footprint;
use crate::ship::{Ship, ShipId, ShipType};

const GRID: usize = BOARD_SIZE as usize;

/// Main board state: ship placements, shots and surviving ship count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    ships: Vec<Ship>,
    capacity: usize,
    ships_remaining: usize,
    hidden: bool,
}

impl Board {
    /// Empty board for `fleet`. A `hidden` board never shows its intact ships
    /// to the presentation layer.
    pub fn new(fleet: &Fleet, hidden: bool) -> Self {
        Board {
            grid: Grid::new(),
            ships: Vec::with_capacity(fleet.size()),
            capacity: fleet.size(),
            ships_remaining: fleet.size(),
            hidden,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_at(&self, coord: Coord) -> Cell {
        self.grid.cell_at(coord)
    }

    /// Placed ships, indexed by [`ShipId`].
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.index())
    }

    pub fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.cell_at(coord).ship.and_then(|id| self.ship(id))
    }

    /// Ships of the fleet not yet sunk. Starts at the fleet size, before any
    /// ship is placed.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    pub fn all_sunk(&self) -> bool {
        self.ships_remaining == 0
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// `true` once every ship of the fleet has been placed.
    pub fn is_fully_deployed(&self) -> bool {
        self.ships.len() >= self.capacity
    }

    pub(crate) fn commit(&mut self, ship_type: ShipType, footprint: Footprint) -> ShipId {
        let id = ShipId(self.ships.len() as u8);
        for &cell in footprint.cells() {
            self.grid.occupy(cell, id);
        }
        self.ships.push(Ship::new(ship_type, footprint));
        id
    }

    /// Fire at `coord`.
    ///
    /// Firing at a cell a second time changes nothing and reports `Hit` or
    /// `Miss` as before, so a ship is never damaged or counted as sunk twice.
    pub fn fire(&mut self, coord: Coord) -> ShotOutcome {
        let cell = self.grid.cell_at(coord);
        if !self.grid.mark_shot(coord) {
            return match cell.ship {
                Some(_) => ShotOutcome::Hit,
                None => ShotOutcome::Miss,
            };
        }
        let Some(id) = cell.ship else {
            debug!("shot at {coord}: miss");
            return ShotOutcome::Miss;
        };
        let ship = &mut self.ships[id.index()];
        if ship.register_hit() {
            self.ships_remaining = self.ships_remaining.saturating_sub(1);
            let name = ship.ship_type().name();
            debug!("shot at {coord}: {name} sunk, {} left", self.ships_remaining);
            ShotOutcome::Sunk(name)
        } else {
            debug!("shot at {coord}: hit");
            ShotOutcome::Hit
        }
    }

    /// Fire at `coord`, reporting only hit (`true`) or miss.
    pub fn shoot(&mut self, coord: Coord) -> bool {
        self.fire(coord).is_hit()
    }

    /// What a presentation layer may show of this board. Intact ships are
    /// visible only when `reveal` is set or the board is not hidden.
    pub fn view(&self, reveal: bool) -> BoardView {
        let show_ships = reveal || !self.hidden;
        let mut cells = [[CellView::Unknown; GRID]; GRID];
        for coord in Coord::all() {
            let cell = self.grid.cell_at(coord);
            cells[coord.y()][coord.x()] = match (cell.was_shot, cell.ship.is_some()) {
                (true, true) => CellView::Hit,
                (true, false) => CellView::Miss,
                (false, true) if show_ships => CellView::Ship,
                (false, false) if show_ships => CellView::Water,
                _ => CellView::Unknown,
            };
        }
        BoardView {
            cells,
            ships_remaining: self.ships_remaining,
        }
    }
}

/// Presentation-facing state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CellView {
    /// Not fired upon, contents hidden.
    Unknown,
    /// Not fired upon, known empty.
    Water,
    /// Not fired upon, holds a ship.
    Ship,
    Hit,
    Miss,
}

impl CellView {
    fn symbol(self) -> char {
        match self {
            CellView::Unknown | CellView::Water => '.',
            CellView::Ship => 'S',
            CellView::Hit => 'X',
            CellView::Miss => 'o',
        }
    }
}

/// Read-only snapshot of a board for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BoardView {
    cells: [[CellView; GRID]; GRID],
    ships_remaining: usize,
}

impl BoardView {
    pub fn cell(&self, coord: Coord) -> CellView {
        self.cells[coord.y()][coord.x()]
    }

    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..GRID {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{:2} ", r + 1)?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "ships remaining: {}", self.ships_remaining)
    }
}
