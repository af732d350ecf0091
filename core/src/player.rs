//! 玩家定義
//!
//! 點的編號以 Black 的視角為準：
//! - Black 由小往大移動（1 → 24 → HOME），內場為 19..=24
//! - Red 由大往小移動（24 → 1 → HOME），內場為 1..=6

use crate::alias::{Pips, SlotId};
use crate::constants::{BAR, FIRST_POINT, HOME_BOARD_SIZE, LAST_POINT};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use strum_macros::{Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Player {
    Black = 0,
    Red = 1,
}

impl Player {
    /// 從數字編號轉換（Black = 0，Red = 1）
    ///
    /// 其他編號代表呼叫端的程式錯誤，回傳 [`BoardError::InvalidPlayer`]
    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            0 => Ok(Player::Black),
            1 => Ok(Player::Red),
            other => Err(BoardError::InvalidPlayer(other).into()),
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// 每位玩家陣列的索引
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::Red,
            Player::Red => Player::Black,
        }
    }

    /// 移動方向：Black 為 +1，Red 為 -1
    pub fn direction(self) -> isize {
        match self {
            Player::Black => 1,
            Player::Red => -1,
        }
    }

    /// 內場（可以開始脫離的區域）
    pub fn home_board(self) -> RangeInclusive<SlotId> {
        match self {
            Player::Black => LAST_POINT - HOME_BOARD_SIZE + 1..=LAST_POINT,
            Player::Red => FIRST_POINT..=HOME_BOARD_SIZE,
        }
    }

    /// 從 BAR 進場時落下的點
    pub fn entry_point(self, pips: Pips) -> SlotId {
        match self {
            Player::Black => pips as SlotId,
            Player::Red => BAR - pips as SlotId,
        }
    }

    /// 棋子在 `slot` 時距離脫離還需要的點數（BAR 視為 25）
    pub fn distance_to_home(self, slot: SlotId) -> SlotId {
        match self {
            Player::Black if slot == BAR => BAR,
            Player::Black => BAR - slot,
            Player::Red => slot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Black.other(), Player::Red);
        assert_eq!(Player::Red.other(), Player::Black);
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Player::from_id(0).unwrap(), Player::Black);
        assert_eq!(Player::from_id(1).unwrap(), Player::Red);

        let err = Player::from_id(7).unwrap_err();
        assert_eq!(err.as_board_error(), Some(&BoardError::InvalidPlayer(7)));
    }

    #[test]
    fn test_index_matches_id() {
        for player in Player::iter() {
            assert_eq!(player.index(), player.id() as usize);
        }
    }

    #[test]
    fn test_home_board() {
        assert_eq!(Player::Black.home_board(), 19..=24);
        assert_eq!(Player::Red.home_board(), 1..=6);
    }

    #[test]
    fn test_entry_point() {
        assert_eq!(Player::Black.entry_point(1), 1);
        assert_eq!(Player::Black.entry_point(6), 6);
        assert_eq!(Player::Red.entry_point(1), 24);
        assert_eq!(Player::Red.entry_point(6), 19);
    }

    #[test]
    fn test_distance_to_home() {
        assert_eq!(Player::Black.distance_to_home(24), 1);
        assert_eq!(Player::Black.distance_to_home(1), 24);
        assert_eq!(Player::Black.distance_to_home(BAR), 25);
        assert_eq!(Player::Red.distance_to_home(1), 1);
        assert_eq!(Player::Red.distance_to_home(BAR), 25);
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::Black.to_string(), "Black");
        assert_eq!(Player::Red.to_string(), "Red");
    }
}
