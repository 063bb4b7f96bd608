use gridbattle::{
    Board, CellView, Coord, Footprint, Orientation, PlacementError, ShipType, ShotOutcome,
    CLASSIC_FLEET, REDUCED_FLEET,
};

const CARRIER: ShipType = ShipType::new("Carrier", 4);
const DESTROYER: ShipType = ShipType::new("Destroyer", 2);
const FRIGATE: ShipType = ShipType::new("Frigate", 1);

fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y).unwrap()
}

#[test]
fn test_vertical_carrier_and_neighbors() {
    let mut board = Board::new(&CLASSIC_FLEET, false);
    assert!(board.place_ship(CARRIER, c(0, 0), Orientation::Vertical));
    for y in 0..4 {
        assert!(board.cell_at(c(0, y)).ship.is_some());
    }
    assert!(board.cell_at(c(0, 4)).ship.is_none());

    // (1,1) touches (0,1).
    assert_eq!(
        board.check_placement(FRIGATE, c(1, 1), Orientation::Vertical),
        Err(PlacementError::Touches)
    );
    assert!(!board.place_ship(FRIGATE, c(1, 1), Orientation::Vertical));
    // (1,4) only meets the carrier diagonally.
    assert!(board.place_ship(FRIGATE, c(1, 4), Orientation::Vertical));
    // Column 2 is clear of column 0.
    assert!(board.place_ship(FRIGATE, c(2, 0), Orientation::Vertical));
    assert_eq!(board.ships().len(), 3);
}

#[test]
fn test_overlap_rejected() {
    let mut board = Board::new(&CLASSIC_FLEET, false);
    assert!(board.place_ship(CARRIER, c(2, 5), Orientation::Horizontal));
    assert_eq!(
        board.check_placement(DESTROYER, c(4, 4), Orientation::Vertical),
        Err(PlacementError::Overlaps)
    );
}

#[test]
fn test_parallel_and_perpendicular_contact_rejected() {
    let mut board = Board::new(&CLASSIC_FLEET, false);
    assert!(board.place_ship(CARRIER, c(2, 5), Orientation::Horizontal));
    // Alongside, one row below.
    assert!(!board.can_place(DESTROYER, c(3, 6), Orientation::Horizontal));
    // End-on, continuing the same row.
    assert!(!board.can_place(DESTROYER, c(6, 5), Orientation::Horizontal));
    // Perpendicular, its tip meeting the hull from above.
    assert!(!board.can_place(DESTROYER, c(4, 3), Orientation::Vertical));
    // Diagonal corner contact is fine.
    assert!(board.can_place(DESTROYER, c(6, 6), Orientation::Vertical));
}

#[test]
fn test_out_of_bounds_leaves_board_unchanged() {
    let mut board = Board::new(&CLASSIC_FLEET, false);
    assert!(board.place_ship(FRIGATE, c(0, 0), Orientation::Vertical));
    let before = board.clone();
    assert_eq!(
        board.try_place(CARRIER, c(7, 0), Orientation::Horizontal),
        Err(PlacementError::OutOfBounds)
    );
    assert_eq!(
        board.try_place(CARRIER, c(9, 7), Orientation::Vertical),
        Err(PlacementError::OutOfBounds)
    );
    assert_eq!(board, before);
    // Exactly reaching the edge is allowed.
    assert!(board.place_ship(CARRIER, c(6, 9), Orientation::Horizontal));
}

#[test]
fn test_invalid_length_and_full_fleet() {
    assert_eq!(
        Footprint::new(c(0, 0), 5, Orientation::Vertical),
        Err(PlacementError::InvalidLength(5))
    );
    let mut board = Board::new(&REDUCED_FLEET, false);
    for (i, ship) in REDUCED_FLEET.ships().iter().enumerate() {
        assert!(board.place_ship(*ship, c(i * 2, 0), Orientation::Vertical));
    }
    assert!(board.is_fully_deployed());
    assert_eq!(
        board.try_place(FRIGATE, c(9, 9), Orientation::Vertical),
        Err(PlacementError::FleetFull)
    );
}

#[test]
fn test_miss_on_empty_board_is_idempotent() {
    let mut board = Board::new(&CLASSIC_FLEET, false);
    assert!(!board.shoot(c(5, 5)));
    assert!(board.cell_at(c(5, 5)).was_shot);
    let after_first = board.clone();
    assert!(!board.shoot(c(5, 5)));
    assert_eq!(board, after_first);
}

#[test]
fn test_single_cell_ship_sinks() {
    let mut board = Board::new(&CLASSIC_FLEET, false);
    assert!(board.place_ship(FRIGATE, c(3, 3), Orientation::Horizontal));
    assert_eq!(board.ships_remaining(), 10);

    assert_eq!(board.fire(c(3, 3)), ShotOutcome::Sunk("Frigate"));
    let ship = board.ship_at(c(3, 3)).unwrap();
    assert_eq!(ship.hit_count(), 1);
    assert!(!ship.is_alive());
    assert_eq!(board.ships_remaining(), 9);

    // Replay reports the hit but counts nothing.
    assert_eq!(board.fire(c(3, 3)), ShotOutcome::Hit);
    assert_eq!(board.ship_at(c(3, 3)).unwrap().hit_count(), 1);
    assert_eq!(board.ships_remaining(), 9);
}

#[test]
fn test_ship_sinks_on_last_cell_only() {
    let mut board = Board::new(&REDUCED_FLEET, false);
    assert!(board.place_ship(CARRIER, c(1, 1), Orientation::Vertical));
    for y in 1..4 {
        assert_eq!(board.fire(c(1, y)), ShotOutcome::Hit);
        assert_eq!(board.ships_remaining(), 4);
    }
    assert_eq!(board.fire(c(1, 4)), ShotOutcome::Sunk("Carrier"));
    assert_eq!(board.ships_remaining(), 3);
}

#[test]
fn test_hidden_view() {
    let mut board = Board::new(&CLASSIC_FLEET, true);
    assert!(board.place_ship(DESTROYER, c(0, 0), Orientation::Horizontal));
    board.fire(c(0, 0));
    board.fire(c(5, 5));

    let hidden = board.view(false);
    assert_eq!(hidden.cell(c(0, 0)), CellView::Hit);
    assert_eq!(hidden.cell(c(1, 0)), CellView::Unknown);
    assert_eq!(hidden.cell(c(5, 5)), CellView::Miss);
    assert_eq!(hidden.cell(c(9, 9)), CellView::Unknown);

    let revealed = board.view(true);
    assert_eq!(revealed.cell(c(1, 0)), CellView::Ship);
    assert_eq!(revealed.cell(c(9, 9)), CellView::Water);

    let text = revealed.to_string();
    assert!(text.starts_with("    A B C D E F G H I J"));
    assert!(text.contains(" 1  X S"));
    assert!(text.ends_with("ships remaining: 10"));
}
