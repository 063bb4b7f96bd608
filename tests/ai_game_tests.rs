use gridbattle::{
    autoplay, random_target, Board, Coord, EngineError, Player, RandomPlayer, Side,
    CLASSIC_FLEET, REDUCED_FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_random_vs_random_games_finish() {
    for fleet in [CLASSIC_FLEET, REDUCED_FLEET] {
        for seed in 0..20 {
            let report = autoplay(seed, fleet).unwrap();
            let (winner_left, loser_left) = match report.winner {
                Side::Player => (report.player_ships_remaining, report.opponent_ships_remaining),
                Side::Opponent => (report.opponent_ships_remaining, report.player_ships_remaining),
            };
            assert_eq!(loser_left, 0, "seed {seed}");
            assert!(winner_left > 0, "seed {seed}");
            assert!(report.player_shots <= 100);
            assert!(report.opponent_shots <= 100);
            assert!(report.player_shots + report.opponent_shots >= fleet.total_cells());
        }
    }
}

#[test]
fn test_autoplay_is_reproducible() {
    assert_eq!(autoplay(42, CLASSIC_FLEET).unwrap(), autoplay(42, CLASSIC_FLEET).unwrap());
}

#[test]
fn test_report_serializes() {
    let report = autoplay(3, REDUCED_FLEET).unwrap();
    let v = serde_json::to_value(&report).unwrap();
    assert!(v["winner"].is_string());
    assert_eq!(v["fleet"], "reduced");
}

#[test]
fn test_random_player_deploys_every_fleet() {
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(&CLASSIC_FLEET, true);
        RandomPlayer::new()
            .place_ships(&mut rng, &mut board, &CLASSIC_FLEET)
            .unwrap();
        assert!(board.is_fully_deployed());
        assert_eq!(board.grid().ship_map().count_ones(), 20);
    }
}

#[test]
fn test_random_target_avoids_shot_cells() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut board = Board::new(&REDUCED_FLEET, false);
    let open = Coord::new(4, 7).unwrap();
    for coord in Coord::all().filter(|&c| c != open) {
        board.fire(coord);
    }
    assert_eq!(random_target(&mut rng, &board), Ok(open));
    board.fire(open);
    assert_eq!(
        random_target(&mut rng, &board),
        Err(EngineError::NoTargetAvailable)
    );
}
