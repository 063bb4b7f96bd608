use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;

/// Longest hull any fleet may contain.
pub const MAX_SHIP_LENGTH: usize = 4;

/// Random origins tried per ship before random placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Random cells tried per shot before target selection gives up.
pub const MAX_SHOT_ATTEMPTS: usize = 10_000;

const CARRIER: ShipType = ShipType::new("Carrier", 4);
const SUBMARINE: ShipType = ShipType::new("Submarine", 3);
const DESTROYER: ShipType = ShipType::new("Destroyer", 2);
const FRIGATE: ShipType = ShipType::new("Frigate", 1);

/// Ten ships: one of length 4, two of 3, three of 2, four of 1.
pub const CLASSIC_FLEET: Fleet = Fleet::new(
    "classic",
    &[
        CARRIER, SUBMARINE, SUBMARINE, DESTROYER, DESTROYER, DESTROYER, FRIGATE, FRIGATE,
        FRIGATE, FRIGATE,
    ],
);

/// One ship of each length.
pub const REDUCED_FLEET: Fleet = Fleet::new("reduced", &[CARRIER, SUBMARINE, DESTROYER, FRIGATE]);

/// Ordered set of ships each side deploys, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    name: &'static str,
    ships: &'static [ShipType],
}

impl Fleet {
    pub const fn new(name: &'static str, ships: &'static [ShipType]) -> Self {
        Self { name, ships }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship types in placement order.
    pub fn ships(&self) -> &'static [ShipType] {
        self.ships
    }

    /// Number of ships, which is also each board's starting `ships_remaining`.
    pub fn size(&self) -> usize {
        self.ships.len()
    }

    /// Total number of cells the fleet occupies.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(|s| s.length()).sum()
    }

    /// Look a built-in fleet up by name.
    pub fn by_name(name: &str) -> Option<Fleet> {
        [CLASSIC_FLEET, REDUCED_FLEET]
            .into_iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }
}

impl Default for Fleet {
    fn default() -> Self {
        CLASSIC_FLEET
    }
}

/// How the opponent's turn is resolved after the player misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnMode {
    /// The whole opponent hit chain runs inside the player's shot call.
    #[default]
    Synchronous,
    /// The session stops in `OpponentTurn`; the caller drives each opponent shot.
    Stepped,
}
