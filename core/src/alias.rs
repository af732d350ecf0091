//! 型別別名

/// 槽位編號：`0` = HOME，`1..=24` = 棋盤上的點，`25` = BAR
pub type SlotId = usize;

/// 單顆骰子的點數（`1..=6`）
pub type Pips = u8;

/// 棋子數量
pub type CheckerCount = u32;
