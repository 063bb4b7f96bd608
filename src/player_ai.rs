use rand::rngs::SmallRng;

use crate::{
    ai,
    board::Board,
    common::EngineError,
    config::Fleet,
    grid::Coord,
    player::Player,
};

/// Opponent that places and fires uniformly at random.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &Fleet,
    ) -> Result<(), EngineError> {
        for &ship_type in fleet.ships() {
            ai::random_placement(rng, board, ship_type)?;
        }
        Ok(())
    }

    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Result<Coord, EngineError> {
        ai::random_target(rng, target)
    }
}
