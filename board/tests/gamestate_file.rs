use std::fs;

use gol_board::{Board, BoardError, MetadataOrder, load, load_with, save};
use tempfile::TempDir;

#[test]
fn load_reads_grid_and_size_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("_gamestate_.txt");
    fs::write(&path, "10\n01\n11\n4\n5").unwrap();

    let board = load(&path).unwrap();
    assert_eq!((board.rows(), board.cols()), (3, 2));
    assert_eq!(board.to_grid_text(), "10\n01\n11\n");
}

#[test]
fn load_reads_simulator_layout() {
    // The terminal simulator writes rows first, then columns.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("_gamestate_.txt");
    fs::write(&path, "0000\n0110\n4\n6").unwrap();

    let board = load_with(&path, MetadataOrder::RowsThenCols).unwrap();
    assert_eq!((board.rows(), board.cols()), (2, 4));
    assert_eq!(board.population(), 2);
}

#[test]
fn missing_file_is_malformed() {
    let dir = TempDir::new().unwrap();
    let err = load(dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, BoardError::MalformedFile { .. }), "{err}");
}

#[test]
fn short_file_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.txt");
    fs::write(&path, "000\n000\n5\n5\n").unwrap();

    let err = load(&path).unwrap_err();
    assert!(matches!(err, BoardError::MalformedFile { .. }), "{err}");
}

#[test]
fn save_writes_only_grid_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "stale contents that are longer than the grid\n").unwrap();

    let mut board = Board::new(2, 2).unwrap();
    board.toggle(0, 0).unwrap();
    board.toggle(1, 1).unwrap();
    save(&path, &board).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "10\n01\n");
}

#[test]
fn save_into_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.txt");

    let err = Board::new(1, 1).unwrap().save(&path).unwrap_err();
    assert!(matches!(err, BoardError::Io { .. }), "{err}");
}

#[test]
fn load_toggle_save_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("_gamestate_.txt");
    fs::write(&path, "000\n010\n000\n010\n5\n6\n").unwrap();

    let mut board = Board::load(&path).unwrap();
    board.toggle(0, 2).unwrap();
    board.toggle(1, 1).unwrap();
    board.save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "001\n000\n000\n010\n");

    // The simulator puts the size lines back before the next edit.
    let mut text = fs::read_to_string(&path).unwrap();
    text.push_str("5\n6\n");
    fs::write(&path, text).unwrap();
    assert_eq!(Board::load(&path).unwrap(), board);
}
