//! 棋盤常數定義

use crate::alias::{CheckerCount, Pips, SlotId};

/// 已脫離棋盤的棋子存放處（雙方共用，各自計數）
pub const HOME: SlotId = 0;

/// 被打下的棋子存放處（雙方共用，各自計數）
pub const BAR: SlotId = 25;

/// 棋盤上第一個點
pub const FIRST_POINT: SlotId = 1;

/// 棋盤上最後一個點
pub const LAST_POINT: SlotId = 24;

/// 槽位總數（HOME + 24 點 + BAR）
pub const SLOT_COUNT: usize = 26;

/// 每位玩家的棋子數
pub const CHECKERS_PER_PLAYER: CheckerCount = 15;

/// 骰子最小點數
pub const MIN_PIPS: Pips = 1;

/// 骰子最大點數
pub const MAX_PIPS: Pips = 6;

/// 內場（home board）的點數
pub const HOME_BOARD_SIZE: SlotId = 6;
