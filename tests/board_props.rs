use gridbattle::{
    random_placement, Board, Coord, Orientation, ShipType, ShotOutcome, CLASSIC_FLEET,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn placement() -> impl Strategy<Value = (usize, usize, usize, Orientation)> {
    (0..10usize, 0..10usize, 1..=4usize, orientation())
}

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(&CLASSIC_FLEET, false);
    for &ship in CLASSIC_FLEET.ships() {
        random_placement(&mut rng, &mut board, ship).unwrap();
    }
    board
}

/// Every pair of distinct ships is disjoint and never orthogonally adjacent,
/// and every cell points at the ship whose footprint covers it.
fn assert_fleet_invariants(board: &Board) -> Result<(), TestCaseError> {
    let ships = board.ships();
    for (i, a) in ships.iter().enumerate() {
        for b in &ships[i + 1..] {
            for &cell in a.footprint().cells() {
                prop_assert!(!b.footprint().contains(cell), "ships overlap at {}", cell);
                for n in cell.orthogonal_neighbors() {
                    prop_assert!(!b.footprint().contains(n), "ships touch at {}/{}", cell, n);
                }
            }
        }
    }
    for coord in Coord::all() {
        let owner = ships.iter().position(|s| s.footprint().contains(coord));
        prop_assert_eq!(board.cell_at(coord).ship.map(|id| id.index()), owner);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn placements_never_overlap_or_touch(attempts in prop::collection::vec(placement(), 1..40)) {
        let mut board = Board::new(&CLASSIC_FLEET, false);
        for (x, y, len, o) in attempts {
            let before = board.clone();
            let origin = Coord::new(x, y).unwrap();
            let placed = board.place_ship(ShipType::new("Test", len), origin, o);
            if !placed {
                prop_assert_eq!(&board, &before);
            }
            assert_fleet_invariants(&board)?;
        }
    }

    #[test]
    fn out_of_bounds_placement_rejected(x in 0..10usize, y in 0..10usize, len in 1..=4usize, o in orientation()) {
        let mut board = Board::new(&CLASSIC_FLEET, false);
        let origin = Coord::new(x, y).unwrap();
        let end = match o {
            Orientation::Horizontal => x + len - 1,
            Orientation::Vertical => y + len - 1,
        };
        let placed = board.place_ship(ShipType::new("Test", len), origin, o);
        prop_assert_eq!(placed, end <= 9);
        if !placed {
            prop_assert_eq!(board, Board::new(&CLASSIC_FLEET, false));
        }
    }

    #[test]
    fn random_fleet_respects_rules(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(board.ships().len(), CLASSIC_FLEET.size());
        prop_assert_eq!(board.grid().ship_map().count_ones(), CLASSIC_FLEET.total_cells());
        assert_fleet_invariants(&board)?;
    }

    #[test]
    fn reshoot_is_idempotent(seed in any::<u64>(), x in 0..10usize, y in 0..10usize) {
        let mut board = random_board(seed);
        let target = Coord::new(x, y).unwrap();
        let first = board.fire(target);
        let after_first = board.clone();
        let second = board.fire(target);
        prop_assert_eq!(first.is_hit(), second.is_hit());
        prop_assert!(!matches!(second, ShotOutcome::Sunk(_)));
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn ships_remaining_drops_once_per_sunk_ship(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..10usize, 0..10usize), 0..150),
    ) {
        let mut board = random_board(seed);
        for (x, y) in shots {
            let before = board.ships_remaining();
            let outcome = board.fire(Coord::new(x, y).unwrap());
            let expected = if matches!(outcome, ShotOutcome::Sunk(_)) { before - 1 } else { before };
            prop_assert_eq!(board.ships_remaining(), expected);
            let sunk = board.ships().iter().filter(|s| !s.is_alive()).count();
            prop_assert_eq!(board.ships_remaining(), CLASSIC_FLEET.size() - sunk);
        }
    }
}
