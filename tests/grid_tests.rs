use gridbattle::{Board, Coord, CoordParseError, Grid, CLASSIC_FLEET};

fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y).unwrap()
}

#[test]
fn test_coord_bounds() {
    assert!(Coord::new(0, 0).is_some());
    assert!(Coord::new(9, 9).is_some());
    assert!(Coord::new(10, 0).is_none());
    assert!(Coord::new(0, 10).is_none());
    assert_eq!(Coord::all().count(), 100);
}

#[test]
fn test_offset_stays_on_grid() {
    assert_eq!(c(0, 0).offset(-1, 0), None);
    assert_eq!(c(9, 9).offset(0, 1), None);
    assert_eq!(c(4, 4).offset(2, -3), Some(c(6, 1)));
}

#[test]
fn test_orthogonal_neighbors() {
    let mut corner: Vec<_> = c(0, 0).orthogonal_neighbors().collect();
    corner.sort();
    assert_eq!(corner, vec![c(0, 1), c(1, 0)]);

    let edge: Vec<_> = c(9, 5).orthogonal_neighbors().collect();
    assert_eq!(edge.len(), 3);
    assert!(edge.contains(&c(8, 5)));
    assert!(edge.contains(&c(9, 4)));
    assert!(edge.contains(&c(9, 6)));

    assert_eq!(c(5, 5).orthogonal_neighbors().count(), 4);
}

#[test]
fn test_coord_text_roundtrip() {
    assert_eq!("C7".parse::<Coord>().unwrap(), c(2, 6));
    assert_eq!(" j10 ".parse::<Coord>().unwrap(), c(9, 9));
    assert_eq!(c(0, 0).to_string(), "A1");
    assert_eq!(c(9, 9).to_string(), "J10");
}

#[test]
fn test_coord_parse_errors() {
    assert_eq!("".parse::<Coord>(), Err(CoordParseError::Empty));
    assert_eq!("K1".parse::<Coord>(), Err(CoordParseError::InvalidColumn('K')));
    assert_eq!("71".parse::<Coord>(), Err(CoordParseError::InvalidColumn('7')));
    assert_eq!("A0".parse::<Coord>(), Err(CoordParseError::InvalidRow));
    assert_eq!("A11".parse::<Coord>(), Err(CoordParseError::InvalidRow));
    assert_eq!("Ax".parse::<Coord>(), Err(CoordParseError::InvalidRow));
}

#[test]
fn test_empty_grid_cells() {
    let grid = Grid::new();
    for coord in Coord::all() {
        let cell = grid.cell_at(coord);
        assert_eq!(cell.coord, coord);
        assert!(cell.ship.is_none());
        assert!(!cell.was_shot);
    }
    assert_eq!(grid.unshot_count(), 100);
}

#[test]
fn test_neighbors_report_occupants() {
    let mut board = Board::new(&CLASSIC_FLEET, false);
    assert!(board.place_ship(CLASSIC_FLEET.ships()[0], c(3, 3), gridbattle::Orientation::Horizontal));
    let occupied: Vec<_> = board
        .grid()
        .orthogonal_neighbors(c(3, 4))
        .filter(|n| n.ship.is_some())
        .map(|n| n.coord)
        .collect();
    assert_eq!(occupied, vec![c(3, 3)]);
}
