// Uniform random placement and targeting, bounded by the configured caps.

use log::{debug, warn};
use rand::Rng;

use crate::{
    board::Board,
    common::EngineError,
    config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, MAX_SHOT_ATTEMPTS},
    grid::Coord,
    ship::{Orientation, ShipType},
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

fn random_coord<R: Rng + ?Sized>(rng: &mut R) -> Option<Coord> {
    Coord::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE))
}

/// Place `ship_type` at a uniformly random origin and orientation, retrying
/// until a legal spot turns up or `MAX_PLACEMENT_ATTEMPTS` is spent.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    ship_type: ShipType,
) -> Result<(Coord, Orientation), EngineError> {
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let Some(origin) = random_coord(rng) else {
            continue;
        };
        let orientation = if rng.random() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        if board.place_ship(ship_type, origin, orientation) {
            debug!("{} placed after {attempt} attempt(s)", ship_type.name());
            return Ok((origin, orientation));
        }
    }
    warn!(
        "gave up placing {} after {MAX_PLACEMENT_ATTEMPTS} attempts",
        ship_type.name()
    );
    Err(EngineError::PlacementExhausted {
        ship: ship_type.name(),
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

/// Pick a uniformly random cell of `board` that has not been fired upon.
/// Already-shot draws are rejected and redrawn; nothing else is remembered.
pub fn random_target<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Result<Coord, EngineError> {
    if board.grid().unshot_count() == 0 {
        return Err(EngineError::NoTargetAvailable);
    }
    for _ in 0..MAX_SHOT_ATTEMPTS {
        match random_coord(rng) {
            Some(target) if !board.grid().was_shot(target) => return Ok(target),
            _ => {}
        }
    }
    warn!("no unshot cell found after {MAX_SHOT_ATTEMPTS} draws");
    Err(EngineError::NoTargetAvailable)
}
