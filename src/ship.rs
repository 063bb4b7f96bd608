//! Ship definitions and damage tracking.

use core::fmt;

use crate::grid::Coord;
use crate::placement::Footprint;

/// Direction a ship extends from its origin: `Horizontal` towards +x,
/// `Vertical` towards +y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step `(dx, dy)` along the hull.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Index of a ship in its board's ship list. Cells refer to ships through it
/// without owning them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(pub(crate) u8);

impl ShipId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A ship placed on a board. Its shape is fixed once placed; only the hit
/// count changes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    footprint: Footprint,
    hit_count: usize,
}

impl Ship {
    pub(crate) fn new(ship_type: ShipType, footprint: Footprint) -> Self {
        Ship {
            ship_type,
            footprint,
            hit_count: 0,
        }
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    pub fn orientation(&self) -> Orientation {
        self.footprint.orientation()
    }

    pub fn origin(&self) -> Coord {
        self.footprint.origin()
    }

    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// Afloat while at least one cell is intact.
    pub fn is_alive(&self) -> bool {
        self.hit_count < self.length()
    }

    /// Record one hit. Returns `true` when this hit sank the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.hit_count += 1;
        !self.is_alive()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, hits: {}/{} }}",
            self.ship_type.name(),
            self.origin(),
            self.orientation(),
            self.hit_count,
            self.length(),
        )
    }
}
