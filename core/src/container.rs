//! 棋子容器（點、BAR、HOME）
//!
//! 三種容器共用同一組操作（增減棋子、查詢數量），差別只在於顯示用的旗標：
//! - 點：是否為合法目的地
//! - BAR：每位玩家各自的選取狀態
//! - HOME：每位玩家各自的合法目的地旗標
//!
//! 容器種類由槽位編號決定，見 [`CheckerContainer::for_slot`]。

use crate::alias::{CheckerCount, SlotId};
use crate::constants::{BAR, HOME};
use crate::player::Player;

/// 容器種類與其顯示旗標
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Point { valid_destination: bool, selected: bool },
    Bar { selected: [bool; 2] },
    Home { valid_destination: [bool; 2] },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerContainer {
    slot: SlotId,
    checkers: [CheckerCount; 2],
    kind: ContainerKind,
}

impl CheckerContainer {
    /// 依槽位編號建立對應種類的空容器
    pub fn for_slot(slot: SlotId) -> Self {
        let kind = match slot {
            HOME => ContainerKind::Home {
                valid_destination: [false; 2],
            },
            BAR => ContainerKind::Bar {
                selected: [false; 2],
            },
            _ => ContainerKind::Point {
                valid_destination: false,
                selected: false,
            },
        };
        Self {
            slot,
            checkers: [0; 2],
            kind,
        }
    }

    pub fn slot(&self) -> SlotId {
        self.slot
    }

    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    pub fn count(&self, player: Player) -> CheckerCount {
        self.checkers[player.index()]
    }

    /// 依玩家索引排列的數量 `[Black, Red]`
    pub fn counts(&self) -> [CheckerCount; 2] {
        self.checkers
    }

    /// 增加棋子，回傳新的數量
    pub fn increment(&mut self, player: Player, count: CheckerCount) -> CheckerCount {
        let checkers = &mut self.checkers[player.index()];
        *checkers += count;
        *checkers
    }

    /// 移除一顆棋子，回傳新的數量
    ///
    /// 容器內沒有該玩家的棋子時 panic：合法性檢查通過的移動不會走到這裡。
    pub fn decrement(&mut self, player: Player) -> CheckerCount {
        let checkers = &mut self.checkers[player.index()];
        assert!(
            *checkers > 0,
            "{player} 在槽位 {} 沒有棋子可移除",
            self.slot
        );
        *checkers -= 1;
        *checkers
    }

    pub fn is_valid_destination(&self, player: Player) -> bool {
        match self.kind {
            ContainerKind::Point {
                valid_destination, ..
            } => valid_destination,
            ContainerKind::Home { valid_destination } => valid_destination[player.index()],
            ContainerKind::Bar { .. } => false,
        }
    }

    /// 設定合法目的地旗標，回傳旗標是否真的改變
    ///
    /// 點的旗標不分玩家，`player` 只用於 HOME；HOME 沒有指定玩家時不變。
    /// BAR 永遠不是目的地。
    pub fn set_valid_destination(&mut self, player: Option<Player>, on: bool) -> bool {
        let flag = match &mut self.kind {
            ContainerKind::Point {
                valid_destination, ..
            } => valid_destination,
            ContainerKind::Home { valid_destination } => match player {
                Some(player) => &mut valid_destination[player.index()],
                None => return false,
            },
            ContainerKind::Bar { .. } => return false,
        };
        let changed = *flag != on;
        *flag = on;
        changed
    }

    pub fn is_selected(&self, player: Player) -> bool {
        match self.kind {
            ContainerKind::Point { selected, .. } => selected,
            ContainerKind::Bar { selected } => selected[player.index()],
            ContainerKind::Home { .. } => false,
        }
    }

    /// 設定選取旗標，回傳旗標是否真的改變
    ///
    /// 點的選取旗標由雙方共用，只有 BAR 分玩家記錄；HOME 不能被選取。
    pub fn set_selected(&mut self, player: Player, on: bool) -> bool {
        let flag = match &mut self.kind {
            ContainerKind::Point { selected, .. } => selected,
            ContainerKind::Bar { selected } => &mut selected[player.index()],
            ContainerKind::Home { .. } => return false,
        };
        let changed = *flag != on;
        *flag = on;
        changed
    }
}
