//! End-to-end games: placements, markers and closure scoring together.

use tessera_board::Board;
use tessera_core::{Cell, Direction::*, FeatureKind, MarkerError, PlacementError, PlayerId};
use tessera_test_utils::fixtures::{blank, cloister, path_end, straight_path, zone_cap, zone_pair};
use tessera_test_utils::ScoreTable;
use tessera_tile::{Fragment, Tile};

const P0: PlayerId = PlayerId(0);
const P1: PlayerId = PlayerId(1);

fn c(x: i32, y: i32) -> Cell {
    Cell::new(x, y)
}

fn tile(fragments: Vec<Fragment>) -> Tile {
    Tile::new(fragments).unwrap()
}

#[test]
fn three_cell_path_scores_its_length() {
    let mut board = Board::new();
    let mut table = ScoreTable::new();

    board
        .place_tile(tile(vec![Fragment::path(&[North, South]), Fragment::point()]), c(0, 0))
        .unwrap();
    let point = board.find_point_feature(c(0, 0)).unwrap();
    board.place_marker(point, P0).unwrap();

    // A dead end turned half way round opens to the south.
    board.place_tile(path_end().rotated(2), c(0, 1)).unwrap();
    let path = board.find_path_feature(c(0, 1), South).unwrap();
    board.place_marker(path, P1).unwrap();
    assert!(board.settle(&mut table).is_empty());

    board.place_tile(path_end(), c(0, -1)).unwrap();
    let closures = board.settle(&mut table);

    assert_eq!(closures.len(), 1);
    assert_eq!(closures[0].feature.kind, FeatureKind::Path);
    assert_eq!(closures[0].score, 3);
    assert_eq!(table.score(P1), 3);
    assert_eq!(table.score(P0), 0);
    assert_eq!(board.value(point), Some(3));
}

#[test]
fn two_cell_zone_with_bonus_scores_double() {
    let mut board = Board::new();
    let mut table = ScoreTable::new();

    board
        .place_tile(tile(vec![Fragment::zone_with_bonus(&[East])]), c(0, 0))
        .unwrap();
    board.place_tile(zone_cap(West), c(1, 0)).unwrap();
    let zone = board.find_zone_feature(c(1, 0), West).unwrap();
    board.place_marker(zone, P0).unwrap();

    let closures = board.settle(&mut table);
    assert_eq!(closures.len(), 1);
    assert_eq!(closures[0].score, (2 + 1) * 2);
    assert_eq!(table.score(P0), 6);
}

#[test]
fn zone_with_shield_closed_by_third_tile() {
    let mut board = Board::new();
    let mut table = ScoreTable::new();

    board
        .place_tile(tile(vec![Fragment::zone(&[East]), Fragment::zone(&[West])]), c(0, 0))
        .unwrap();
    board
        .place_tile(zone_pair(North, West, true).rotated(1), c(-1, 0))
        .unwrap();

    let zone = board.find_zone_feature(c(-1, 0), East).unwrap();
    board.place_marker(zone, P0).unwrap();
    assert_eq!(
        board.resolve(zone),
        board.find_zone_feature(c(0, 0), West)
    );
    let view = board.feature(zone).unwrap();
    assert!(!view.is_closed());
    assert_eq!(board.value(zone), Some(3));

    board.place_tile(zone_cap(South), c(-1, 1)).unwrap();
    assert!(board.feature(zone).unwrap().is_closed());
    assert_eq!(board.value(zone), Some(8));

    board.settle(&mut table);
    assert_eq!(table.score(P0), 8);
    assert_eq!(table.score(P1), 0);

    // The east-facing zone on (0,0) is still open and unscored.
    let east = board.find_zone_feature(c(0, 0), East).unwrap();
    assert!(!board.feature(east).unwrap().is_closed());
}

#[test]
fn roads_and_cloister_full_game() {
    let mut board = Board::new();
    let mut table = ScoreTable::new();

    board
        .place_tile(tile(vec![Fragment::path(&[South, North]), Fragment::point()]), c(0, 0))
        .unwrap();
    assert_eq!(table.score(P0), 0);

    let monastery = board.find_point_feature(c(0, 0)).unwrap();
    assert_eq!(board.value(monastery), Some(1));
    board.place_marker(monastery, P0).unwrap();

    assert_eq!(
        board.place_tile(straight_path(), c(0, 0)),
        Err(PlacementError::Occupied { cell: c(0, 0) })
    );
    assert_eq!(
        board.place_tile(straight_path(), c(2, 0)),
        Err(PlacementError::Detached { cell: c(2, 0) })
    );
    assert!(matches!(
        board.place_tile(straight_path().rotated(1), c(1, 0)),
        Err(PlacementError::EdgeMismatch { .. })
    ));
    board.place_tile(straight_path().rotated(2), c(1, 0)).unwrap();

    assert_eq!(board.find_path_feature(c(1, 0), East), None);
    let origin_path = board.find_path_feature(c(0, 0), North).unwrap();
    assert_eq!(
        board.place_marker(origin_path, P0),
        Err(MarkerError::NotOnLastTile)
    );
    let side_path = board.find_path_feature(c(1, 0), North).unwrap();
    board.place_marker(side_path, P0).unwrap();

    board.place_tile(straight_path().rotated(3), c(2, 0)).unwrap();
    board.place_tile(path_end(), c(0, -1)).unwrap();
    let road = board.find_path_feature(c(0, -1), North).unwrap();
    board.place_marker(road, P0).unwrap();

    board.place_tile(path_end().rotated(2), c(0, 1)).unwrap();
    let upper = board.find_path_feature(c(0, 0), South).unwrap();
    assert_eq!(board.resolve(road), board.resolve(upper));
    assert_eq!(board.value(road), Some(3));

    board.settle(&mut table);
    assert_eq!(table.score(P0), 3);
    assert_eq!(table.score(P1), 0);

    board.place_tile(path_end().rotated(2), c(-1, 1)).unwrap();
    let west_upper = board.find_path_feature(c(-1, 1), South).unwrap();
    board.place_marker(west_upper, P0).unwrap();
    board.place_tile(path_end(), c(-1, -1)).unwrap();
    let west_lower = board.find_path_feature(c(-1, -1), North).unwrap();
    board.place_marker(west_lower, P1).unwrap();

    // Joins two marked roads into one.
    board.place_tile(straight_path(), c(-1, 0)).unwrap();
    let joined = board.find_path_feature(c(-1, 0), South).unwrap();
    assert_eq!(board.feature(joined).unwrap().markers().len(), 2);

    let closures = board.settle(&mut table);
    assert_eq!(closures.len(), 1);
    assert_eq!(closures[0].score, 3);
    let mut credited = closures[0].credited.clone();
    credited.sort();
    assert_eq!(credited.as_slice(), &[P0, P1]);
    assert_eq!(table.score(P0), 6);
    assert_eq!(table.score(P1), 3);
    assert_eq!(board.value(monastery), Some(7));

    board.place_tile(straight_path(), c(1, 1)).unwrap();
    board.settle(&mut table);
    board.place_tile(straight_path(), c(1, -1)).unwrap();
    let closures = board.settle(&mut table);

    assert!(board.feature(monastery).unwrap().is_closed());
    assert_eq!(board.value(monastery), Some(9));
    assert_eq!(closures.len(), 1);
    assert_eq!(table.score(P0), 15);
    assert_eq!(table.score(P1), 3);
}

#[test]
fn majority_holder_takes_everything() {
    let mut board = Board::new();
    let mut table = ScoreTable::new();

    board.place_tile(path_end().rotated(1), c(0, 0)).unwrap();
    board.place_marker(board.find_path_feature(c(0, 0), East).unwrap(), P0).unwrap();
    board.place_tile(blank(), c(0, 1)).unwrap();
    board.place_tile(path_end().rotated(2), c(1, 1)).unwrap();
    board.place_marker(board.find_path_feature(c(1, 1), South).unwrap(), P0).unwrap();
    board.place_tile(blank(), c(0, -1)).unwrap();
    board.place_tile(path_end(), c(1, -1)).unwrap();
    board.place_marker(board.find_path_feature(c(1, -1), North).unwrap(), P1).unwrap();
    assert!(board.settle(&mut table).is_empty());

    // A junction joining all three roads, with nothing leaving east.
    board
        .place_tile(tile(vec![Fragment::path(&[West, North, South])]), c(1, 0))
        .unwrap();

    let closures = board.settle(&mut table);
    assert_eq!(closures.len(), 1);
    assert_eq!(closures[0].score, 4);
    assert_eq!(closures[0].credited.as_slice(), &[P0]);
    assert_eq!(table.score(P0), 4);
    assert_eq!(table.score(P1), 0);
    assert_eq!(table.credits(), &[(P0, 4)]);
}

#[test]
fn loop_closes_without_ends() {
    let mut board = Board::new();
    let mut table = ScoreTable::new();
    let corner = |steps| tile(vec![Fragment::path(&[North, East])]).rotated(steps);

    board.place_tile(corner(0), c(0, 0)).unwrap();
    board.place_marker(board.find_path_feature(c(0, 0), North).unwrap(), P1).unwrap();
    board.place_tile(corner(3), c(1, 0)).unwrap();
    board.place_tile(corner(2), c(1, 1)).unwrap();
    assert!(board.settle(&mut table).is_empty());
    board.place_tile(corner(1), c(0, 1)).unwrap();

    let closures = board.settle(&mut table);
    assert_eq!(closures.len(), 1);
    assert_eq!(closures[0].score, 4);
    assert_eq!(table.score(P1), 4);
    assert_eq!(board.features(FeatureKind::Path).len(), 1);
}

#[test]
fn cloister_surrounded_on_all_sides() {
    let mut board = Board::new();
    let mut table = ScoreTable::new();

    board.place_tile(cloister(), c(0, 0)).unwrap();
    board.place_marker(board.find_point_feature(c(0, 0)).unwrap(), P1).unwrap();

    let ring = [
        c(1, 0),
        c(1, 1),
        c(0, 1),
        c(-1, 1),
        c(-1, 0),
        c(-1, -1),
        c(0, -1),
        c(1, -1),
    ];
    for &cell in &ring[..7] {
        board.place_tile(cloister(), cell).unwrap();
        assert!(board.settle(&mut table).is_empty());
    }
    board.place_tile(cloister(), ring[7]).unwrap();
    let closures = board.settle(&mut table);
    assert_eq!(closures.len(), 1);
    assert_eq!(closures[0].feature.kind, FeatureKind::Point);
    assert_eq!(closures[0].score, 9);

    assert_eq!(table.score(P1), 9);
    assert!(board.settle(&mut table).is_empty());
    assert_eq!(table.score(P1), 9);
}
