//! 佈局檔案載入測試

use backgammon_core::board::BoardState;
use backgammon_core::constants::HOME;
use backgammon_core::error::{ErrorKind, LoadError};
use backgammon_core::layout::BoardLayout;
use backgammon_core::player::Player;
use std::io::Write;
use std::path::Path;

const BEAR_OFF_LAYOUT: &str = r#"
[[placements]]
player = "Black"
slot = 19
count = 5

[[placements]]
player = "Black"
slot = 24
count = 10

[[placements]]
player = "Red"
slot = 0
count = 15
"#;

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bear_off.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    write!(f, "{BEAR_OFF_LAYOUT}").unwrap();

    let layout = BoardLayout::load(&path).unwrap();
    let board = BoardState::from_layout(&layout);
    assert_eq!(board.count(Player::Black, 19), 5);
    assert_eq!(board.count(Player::Red, HOME), 15);
    assert!(board.is_legal_move(Player::Black, 19, 6));
}

#[test]
fn test_load_missing_file() {
    let err = BoardLayout::load(Path::new("nonexistent_layout.toml")).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Load(LoadError::ReadFile { .. })
    ));
}

#[test]
fn test_load_invalid_layout_has_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.toml");
    std::fs::write(
        &path,
        r#"
[[placements]]
player = "Black"
slot = 19
count = 14

[[placements]]
player = "Red"
slot = 6
count = 15
"#,
    )
    .unwrap();

    let err = BoardLayout::load(&path).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Load(LoadError::Invalid(_))));

    let error_str = err.to_string();
    assert!(error_str.contains("Black 共有 14 顆棋子"));
    assert!(error_str.contains("載入佈局檔案"));
    assert!(error_str.contains("short.toml"));
}

#[test]
fn test_snapshot_roundtrip_through_toml() {
    let mut board = BoardState::new();
    assert!(board.move_checker(Player::Black, 17, 5));
    assert!(board.move_checker(Player::Red, 24, 2));

    let toml_str = board.layout().to_toml_string().unwrap();
    let restored = BoardState::from_layout(&BoardLayout::from_toml_str(&toml_str).unwrap());
    assert_eq!(restored.layout(), board.layout());
    assert_eq!(restored.on_bar(Player::Black), 1);
}
