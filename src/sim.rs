//! Computer-versus-computer games played through the public session API.

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    common::EngineError,
    config::Fleet,
    game::{GameSession, Phase, Side},
    player::Player,
    player_ai::RandomPlayer,
};

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SimReport {
    pub seed: u64,
    pub fleet: &'static str,
    pub winner: Side,
    pub player_shots: usize,
    pub opponent_shots: usize,
    pub player_ships_remaining: usize,
    pub opponent_ships_remaining: usize,
}

/// Play a full game where the player side also places and fires at random.
/// The same seed always produces the same game.
pub fn autoplay(seed: u64, fleet: Fleet) -> Result<SimReport, EngineError> {
    let mut session = GameSession::seeded(fleet, seed);
    let mut pilot = RandomPlayer::new();
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));

    session.auto_place_player()?;
    let winner = loop {
        match session.phase() {
            Phase::PlayerTurn => {
                let target = pilot.select_target(&mut rng, session.board(Side::Opponent))?;
                session.player_shoot(target)?;
            }
            Phase::GameOver(winner) => break winner,
            other => return Err(EngineError::UnexpectedPhase(other)),
        }
    };

    let report = SimReport {
        seed,
        fleet: fleet.name(),
        winner,
        player_shots: session.shots_fired(Side::Player),
        opponent_shots: session.shots_fired(Side::Opponent),
        player_ships_remaining: session.ships_remaining(Side::Player),
        opponent_ships_remaining: session.ships_remaining(Side::Opponent),
    };
    info!("seed {seed}: {winner:?} won");
    Ok(report)
}
