//! Ship placement rules: footprints, bounds, overlap and the no-touch rule.

use log::debug;

use crate::board::Board;
use crate::common::PlacementError;
use crate::config::MAX_SHIP_LENGTH;
use crate::grid::Coord;
use crate::ship::{Orientation, ShipId, ShipType};

/// The cells a ship covers, starting at its origin and extending along its
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    origin: Coord,
    orientation: Orientation,
    cells: [Coord; MAX_SHIP_LENGTH],
    len: usize,
}

impl Footprint {
    /// Fails with `OutOfBounds` if any cell would leave the grid.
    pub fn new(
        origin: Coord,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, PlacementError> {
        if length == 0 || length > MAX_SHIP_LENGTH {
            return Err(PlacementError::InvalidLength(length));
        }
        let (dx, dy) = orientation.step();
        let mut cells = [origin; MAX_SHIP_LENGTH];
        for (i, cell) in cells.iter_mut().enumerate().take(length) {
            let i = i as isize;
            *cell = origin
                .offset(dx * i, dy * i)
                .ok_or(PlacementError::OutOfBounds)?;
        }
        Ok(Footprint {
            origin,
            orientation,
            cells,
            len: length,
        })
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Covered cells, origin first.
    pub fn cells(&self) -> &[Coord] {
        &self.cells[..self.len]
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().contains(&coord)
    }
}

impl Board {
    /// Validate a placement and return the footprint it would occupy.
    ///
    /// Checks, in order: fleet capacity, length, bounds, overlap with any
    /// placed ship, and orthogonal contact with any placed ship. Diagonal
    /// contact is allowed.
    pub fn check_placement(
        &self,
        ship_type: ShipType,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<Footprint, PlacementError> {
        if self.is_fully_deployed() {
            return Err(PlacementError::FleetFull);
        }
        let footprint = Footprint::new(origin, ship_type.length(), orientation)?;
        let grid = self.grid();
        if footprint.cells().iter().any(|&c| grid.is_occupied(c)) {
            return Err(PlacementError::Overlaps);
        }
        let touches = footprint
            .cells()
            .iter()
            .any(|&c| grid.orthogonal_neighbors(c).any(|n| n.ship.is_some()));
        if touches {
            return Err(PlacementError::Touches);
        }
        Ok(footprint)
    }

    /// Whether `ship_type` may be placed at `origin` with `orientation`.
    pub fn can_place(&self, ship_type: ShipType, origin: Coord, orientation: Orientation) -> bool {
        self.check_placement(ship_type, origin, orientation).is_ok()
    }

    /// Place a ship, or report why it cannot go there. The board is untouched
    /// on failure.
    pub fn try_place(
        &mut self,
        ship_type: ShipType,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<ShipId, PlacementError> {
        let footprint = self.check_placement(ship_type, origin, orientation)?;
        let id = self.commit(ship_type, footprint);
        debug!(
            "placed {} at {} {:?} as ship #{}",
            ship_type.name(),
            origin,
            orientation,
            id.index()
        );
        Ok(id)
    }

    /// Boolean form of [`Board::try_place`].
    pub fn place_ship(&mut self, ship_type: ShipType, origin: Coord, orientation: Orientation) -> bool {
        self.try_place(ship_type, origin, orientation).is_ok()
    }
}
