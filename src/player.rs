use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{EngineError, ShotOutcome},
    config::Fleet,
    grid::Coord,
};

/// Interface implemented by the non-human side.
///
/// A Player is responsible for:
/// - Placing its whole fleet onto its own board
/// - Selecting an unshot cell to attack on the other board
///
/// Hit chaining is decided by the session, never by the player.
pub trait Player: Send {
    /// Place every ship of `fleet` onto `board`.
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &Fleet,
    ) -> Result<(), EngineError>;

    /// Choose a cell of `target` that has not been fired upon.
    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Result<Coord, EngineError>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coord, _outcome: ShotOutcome) {}
}
