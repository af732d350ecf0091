//! 回合流程測試

use backgammon_core::constants::{BAR, HOME};
use backgammon_core::error::{BoardError, ErrorKind, GameError};
use backgammon_core::game::Game;
use backgammon_core::layout::{BoardLayout, Placement};
use backgammon_core::player::Player;

fn layout(placements: &[(Player, usize, u32)]) -> BoardLayout {
    BoardLayout {
        placements: placements
            .iter()
            .map(|&(player, slot, count)| Placement {
                player,
                slot,
                count,
            })
            .collect(),
    }
}

#[test]
fn test_turn_flow() {
    let mut game = Game::new(Player::Black);
    game.set_dice(1, 2).unwrap();

    let outcome = game.play(17, 2).unwrap();
    assert_eq!(outcome.destination, 19);
    assert!(game.can_play());

    let err = game.end_turn().unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Game(GameError::MovesRemaining {
            player: Player::Black
        })
    ));

    game.play(1, 1).unwrap();
    assert!(game.dice().unwrap().is_exhausted());
    assert!(!game.can_play());

    assert_eq!(game.end_turn().unwrap(), Player::Red);
    assert_eq!(game.current_player(), Player::Red);
    assert!(game.dice().is_none());
}

#[test]
fn test_doubles_allow_four_moves() {
    let mut game = Game::new(Player::Red);
    game.set_dice(2, 2).unwrap();
    for _ in 0..4 {
        game.play(13, 2).unwrap();
    }
    assert!(game.dice().unwrap().is_exhausted());
    assert_eq!(game.board().count(Player::Red, 11), 4);

    let err = game.play(11, 2).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Game(GameError::DieNotAvailable(2))
    ));
}

#[test]
fn test_end_turn_when_nothing_is_playable() {
    let closed = layout(&[
        (Player::Black, BAR, 1),
        (Player::Black, 12, 14),
        (Player::Red, 1, 2),
        (Player::Red, 2, 2),
        (Player::Red, 3, 2),
        (Player::Red, 4, 2),
        (Player::Red, 5, 2),
        (Player::Red, 6, 5),
    ]);
    let mut game = Game::with_layout(&closed, Player::Black).unwrap();
    game.set_dice(3, 4).unwrap();

    assert!(game.valid_sources().is_empty());
    assert!(!game.can_play());
    assert_eq!(game.end_turn().unwrap(), Player::Red);
}

#[test]
fn test_borne_off_checkers_are_not_playable() {
    let partly_off = layout(&[
        (Player::Black, 24, 14),
        (Player::Black, HOME, 1),
        (Player::Red, 3, 15),
    ]);
    let mut game = Game::with_layout(&partly_off, Player::Black).unwrap();
    game.set_dice(2, 2).unwrap();
    assert_eq!(game.valid_sources(), vec![24]);

    let err = game.play(HOME, 2).unwrap_err();
    assert_eq!(
        err.as_board_error(),
        Some(&BoardError::BorneOff {
            player: Player::Black
        })
    );
    assert_eq!(game.dice().unwrap().remaining_uses(2), 4);
    assert_eq!(game.board().borne_off(Player::Black), 1);
    assert_eq!(game.board().count(Player::Black, 2), 0);

    game.select(HOME);
    assert_eq!(game.board().selected(Player::Black), None);
    assert!(!game.board().container(2).unwrap().is_valid_destination(Player::Black));
}

#[test]
fn test_end_turn_with_only_borne_off_and_blocked_checkers() {
    let stuck = layout(&[
        (Player::Black, HOME, 13),
        (Player::Black, 18, 2),
        (Player::Red, 20, 2),
        (Player::Red, 24, 13),
    ]);
    let mut game = Game::with_layout(&stuck, Player::Black).unwrap();
    game.set_dice(2, 2).unwrap();

    // 18 + 2 = 20 被封鎖，18 又在內場外不能脫離
    assert!(game.valid_sources().is_empty());
    assert!(!game.can_play());
    assert_eq!(game.end_turn().unwrap(), Player::Red);
}

#[test]
fn test_winner_ends_game() {
    let almost = layout(&[
        (Player::Black, 24, 1),
        (Player::Black, HOME, 14),
        (Player::Red, 1, 15),
    ]);
    let mut game = Game::with_layout(&almost, Player::Black).unwrap();
    game.set_dice(1, 2).unwrap();

    game.play(24, 1).unwrap();
    assert_eq!(game.winner(), Some(Player::Black));
    assert!(!game.can_play());

    let err = game.roll().unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Game(GameError::GameOver {
            winner: Player::Black
        })
    ));
}

#[test]
fn test_select_highlights_remaining_dice() {
    let mut game = Game::new(Player::Red);
    game.set_dice(6, 5).unwrap();
    game.select(24);

    let board = game.board();
    assert_eq!(board.selected(Player::Red), Some(24));
    assert!(board.container(18).unwrap().is_valid_destination(Player::Red));
    // 19 被封鎖
    assert!(!board.container(19).unwrap().is_valid_destination(Player::Red));

    game.play(24, 6).unwrap();
    let board = game.board();
    assert_eq!(board.selected(Player::Red), None);
    assert!(!board.container(18).unwrap().is_valid_destination(Player::Red));
}

#[test]
fn test_valid_sources_follow_remaining_dice() {
    let mut game = Game::new(Player::Red);
    game.set_dice(6, 6).unwrap();
    assert_eq!(game.valid_sources(), vec![8, 13, 24]);
}

#[test]
fn test_with_layout_rejects_invalid_layout() {
    let broken = layout(&[(Player::Black, 1, 15)]);
    assert!(Game::with_layout(&broken, Player::Black).is_err());
}

#[test]
fn test_events_reach_game_subscribers() {
    let mut game = Game::new(Player::Black);
    let rx = game.subscribe();
    game.set_dice(6, 1).unwrap();
    game.play(1, 6).unwrap();
    assert_eq!(rx.try_iter().count(), 2);
}
