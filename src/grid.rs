//! The 10×10 cell model: coordinates, cell state and neighbor lookups.

use core::fmt;
use core::str::FromStr;

use crate::bitboard::BitBoard;
use crate::common::CoordParseError;
use crate::config::BOARD_SIZE;
use crate::ship::ShipId;

const GRID: usize = BOARD_SIZE as usize;

/// Cell mask sized for the board.
pub type CellMask = BitBoard<u128, GRID>;

/// A position on the grid; `x` is the column and `y` the row, both in
/// `0..BOARD_SIZE`. Holding a `Coord` proves the position is on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// `None` when either axis falls outside the grid.
    pub fn new(x: usize, y: usize) -> Option<Self> {
        if x < GRID && y < GRID {
            Some(Coord {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    pub fn x(self) -> usize {
        self.x as usize
    }

    pub fn y(self) -> usize {
        self.y as usize
    }

    /// The coordinate `(dx, dy)` away, if it is still on the grid.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let x = self.x as isize + dx;
        let y = self.y as isize + dy;
        if x < 0 || y < 0 {
            return None;
        }
        Coord::new(x as usize, y as usize)
    }

    /// The on-grid subset of left, right, up and down.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Coord> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Every coordinate on the grid, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..GRID).flat_map(|y| (0..GRID).map(move |x| Coord { x: x as u8, y: y as u8 }))
    }
}

/// Column letter followed by the 1-based row, e.g. `C7` for `(2, 6)`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.x) as char, self.y + 1)
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_ch = chars.next().ok_or(CoordParseError::Empty)?.to_ascii_uppercase();
        if !col_ch.is_ascii_uppercase() {
            return Err(CoordParseError::InvalidColumn(col_ch));
        }
        let x = (col_ch as u8 - b'A') as usize;
        if x >= GRID {
            return Err(CoordParseError::InvalidColumn(col_ch));
        }
        let row: usize = chars
            .as_str()
            .parse()
            .map_err(|_| CoordParseError::InvalidRow)?;
        if row == 0 {
            return Err(CoordParseError::InvalidRow);
        }
        Coord::new(x, row - 1).ok_or(CoordParseError::InvalidRow)
    }
}

/// Snapshot of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    /// Ship occupying the cell, by index into its board's ship list.
    pub ship: Option<ShipId>,
    /// Set once the cell has been fired upon; never cleared.
    pub was_shot: bool,
}

/// Cell state for a whole board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    occupant: [[Option<ShipId>; GRID]; GRID],
    ship_map: CellMask,
    shots: CellMask,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            occupant: [[None; GRID]; GRID],
            ship_map: CellMask::new(),
            shots: CellMask::new(),
        }
    }

    pub fn cell_at(&self, coord: Coord) -> Cell {
        Cell {
            coord,
            ship: self.occupant[coord.y()][coord.x()],
            was_shot: contains(&self.shots, coord),
        }
    }

    /// Cells left, right, above and below `coord` that lie on the grid.
    pub fn orthogonal_neighbors(&self, coord: Coord) -> impl Iterator<Item = Cell> + '_ {
        coord.orthogonal_neighbors().map(move |c| self.cell_at(c))
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        contains(&self.ship_map, coord)
    }

    pub fn was_shot(&self, coord: Coord) -> bool {
        contains(&self.shots, coord)
    }

    /// Every cell claimed by a ship.
    pub fn ship_map(&self) -> CellMask {
        self.ship_map
    }

    /// Every cell fired upon.
    pub fn shots(&self) -> CellMask {
        self.shots
    }

    /// Cells not yet fired upon.
    pub fn unshot_count(&self) -> usize {
        GRID * GRID - self.shots.count_ones()
    }

    pub(crate) fn occupy(&mut self, coord: Coord, ship: ShipId) {
        self.occupant[coord.y()][coord.x()] = Some(ship);
        let _ = self.ship_map.set(coord.y(), coord.x());
    }

    /// Mark `coord` as fired upon. Returns `false` if it already was.
    pub(crate) fn mark_shot(&mut self, coord: Coord) -> bool {
        if self.was_shot(coord) {
            return false;
        }
        let _ = self.shots.set(coord.y(), coord.x());
        true
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

fn contains(mask: &CellMask, coord: Coord) -> bool {
    mask.get(coord.y(), coord.x()).unwrap_or(false)
}
