//! Tests for the tic-tac-toe position enum.

use gridclash::{Board, Mark, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_index_round_trip() {
    for pos in Position::ALL {
        assert_eq!(Position::from_index(pos.to_index()), Some(pos));
    }
}

#[test]
fn test_parse_from_number() {
    assert_eq!(Position::from_label_or_number("0"), Some(Position::TopLeft));
    assert_eq!(Position::from_label_or_number(" 4 "), Some(Position::Center));
    assert_eq!(Position::from_label_or_number("9"), None);
}

#[test]
fn test_parse_from_label() {
    assert_eq!(
        Position::from_label_or_number("Top-left"),
        Some(Position::TopLeft)
    );
    assert_eq!(
        Position::from_label_or_number("middle-right"),
        Some(Position::MiddleRight)
    );
    assert_eq!(Position::from_label_or_number("nowhere"), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Mark::X));
    board.set(Position::Center, Square::Occupied(Mark::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
