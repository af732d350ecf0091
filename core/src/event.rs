//! 棋盤變化通知
//!
//! 規則引擎不依賴任何顯示層；顯示層透過 [`EventBus::subscribe`] 取得
//! `mpsc::Receiver`，自行決定何時讀取事件。

use crate::alias::{CheckerCount, SlotId};
use crate::player::Player;
use serde::{Deserialize, Serialize};
use std::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BoardEvent {
    /// 某容器內某玩家的棋子數量改變
    CheckerCountChanged {
        player: Player,
        slot: SlotId,
        count: CheckerCount,
    },
    /// 合法目的地旗標改變；點的旗標不分玩家（`player` 為 `None`）
    ValidDestinationChanged {
        slot: SlotId,
        player: Option<Player>,
        on: bool,
    },
    /// 選取狀態改變
    SelectedChanged { slot: SlotId, on: bool },
}

/// 事件訂閱者清單
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<mpsc::Sender<BoardEvent>>,
}

impl EventBus {
    pub fn subscribe(&mut self) -> mpsc::Receiver<BoardEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// 廣播事件；接收端已關閉的訂閱者直接移除
    pub fn emit(&mut self, event: BoardEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
