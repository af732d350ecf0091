//! 棋盤狀態與走子規則
//!
//! `BoardState` 持有 26 個棋子容器（HOME、24 個點、BAR），負責：
//! - 計算目的地（[`BoardState::destination_slot`]）
//! - 判斷合法性（[`BoardState::check_move`] / [`BoardState::is_legal_move`]）
//! - 執行移動與吃子（[`BoardState::try_move`] / [`BoardState::move_checker`]）
//! - 顯示用的目的地提示與選取狀態
//!
//! 所有數量變化都會透過 [`EventBus`] 通知訂閱者。

use crate::alias::{CheckerCount, Pips, SlotId};
use crate::constants::{BAR, FIRST_POINT, HOME, LAST_POINT, MAX_PIPS, MIN_PIPS, SLOT_COUNT};
use crate::container::CheckerContainer;
use crate::error::{BoardError, Result};
use crate::event::{BoardEvent, EventBus};
use crate::layout::{BoardLayout, Placement};
use crate::player::Player;
use std::sync::mpsc;
use strum::IntoEnumIterator;
use tracing::{debug, trace};

/// 一次成功移動的結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: Player,
    pub source: SlotId,
    pub destination: SlotId,
    /// 是否把對手的單顆棋子打到 BAR
    pub hit: bool,
}

#[derive(Debug)]
pub struct BoardState {
    containers: Vec<CheckerContainer>,
    events: EventBus,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// 標準開局的棋盤
    pub fn new() -> Self {
        Self::from_layout(&BoardLayout::standard())
    }

    /// 依佈局建立棋盤，不檢查佈局是否合法（需要時先呼叫 [`BoardLayout::validate`]）
    ///
    /// 超出範圍的槽位會被忽略。
    pub fn from_layout(layout: &BoardLayout) -> Self {
        let mut containers: Vec<CheckerContainer> =
            (0..SLOT_COUNT).map(CheckerContainer::for_slot).collect();
        for placement in &layout.placements {
            if let Some(container) = containers.get_mut(placement.slot) {
                container.increment(placement.player, placement.count);
            }
        }
        Self {
            containers,
            events: EventBus::default(),
        }
    }

    /// 目前的擺放快照
    pub fn layout(&self) -> BoardLayout {
        let placements = self
            .containers
            .iter()
            .flat_map(|container| {
                Player::iter().filter_map(move |player| {
                    let count = container.count(player);
                    (count > 0).then_some(Placement {
                        player,
                        slot: container.slot(),
                        count,
                    })
                })
            })
            .collect();
        BoardLayout { placements }
    }

    /// 訂閱棋盤變化事件
    pub fn subscribe(&mut self) -> mpsc::Receiver<BoardEvent> {
        self.events.subscribe()
    }

    pub fn container(&self, slot: SlotId) -> Option<&CheckerContainer> {
        self.containers.get(slot)
    }

    /// 某槽位上某玩家的棋子數；槽位超出範圍時為 0
    pub fn count(&self, player: Player, slot: SlotId) -> CheckerCount {
        self.containers
            .get(slot)
            .map_or(0, |container| container.count(player))
    }

    pub fn on_bar(&self, player: Player) -> CheckerCount {
        self.count(player, BAR)
    }

    pub fn borne_off(&self, player: Player) -> CheckerCount {
        self.count(player, HOME)
    }

    /// 所有槽位上的棋子總數（應恆為 15）
    pub fn total_checkers(&self, player: Player) -> CheckerCount {
        self.containers.iter().map(|c| c.count(player)).sum()
    }

    /// 剩餘點數：所有棋子脫離還需要的點數總和
    pub fn pip_count(&self, player: Player) -> u32 {
        self.containers
            .iter()
            .filter(|c| c.slot() != HOME)
            .map(|c| c.count(player) * player.distance_to_home(c.slot()) as u32)
            .sum()
    }

    /// 計算目的地槽位，不檢查合法性
    ///
    /// - 從 BAR 出發：Black 落在 `pips`，Red 落在 `25 - pips`
    /// - Black：`source + pips`，超過 24 即為 HOME（脫離）
    /// - Red：`source - pips`，小於 1 即為 HOME（脫離）
    pub fn destination_slot(player: Player, source: SlotId, pips: Pips) -> SlotId {
        if source == BAR {
            return player.entry_point(pips);
        }
        let pips = pips as SlotId;
        match player {
            Player::Black => {
                let destination = source + pips;
                if destination > LAST_POINT {
                    HOME
                } else {
                    destination
                }
            }
            Player::Red => {
                if source < FIRST_POINT + pips {
                    HOME
                } else {
                    source - pips
                }
            }
        }
    }

    /// 檢查移動是否合法，合法時回傳目的地
    ///
    /// 依序檢查：
    /// 0. HOME 不能當起點：已脫離的棋子不再參與
    /// 1. 起點有沒有自己的棋子
    /// 2. BAR 上有棋子時只能移動 BAR 上的棋子
    /// 3. 脫離：所有棋子都必須在內場；點數不是剛好時，更遠的點不能有棋子
    /// 4. 目的地被對手兩顆以上的棋子封鎖
    pub fn check_move(&self, player: Player, source: SlotId, pips: Pips) -> Result<SlotId> {
        if source >= SLOT_COUNT {
            return Err(BoardError::InvalidSlot { slot: source }.into());
        }
        if !(MIN_PIPS..=MAX_PIPS).contains(&pips) {
            return Err(BoardError::InvalidPips { pips }.into());
        }
        if source == HOME {
            return Err(BoardError::BorneOff { player }.into());
        }

        if self.count(player, source) == 0 {
            return Err(BoardError::NoChecker {
                player,
                slot: source,
            }
            .into());
        }

        let on_bar = self.on_bar(player);
        if source != BAR && on_bar > 0 {
            return Err(BoardError::MustEnterFromBar {
                player,
                count: on_bar,
            }
            .into());
        }

        let destination = Self::destination_slot(player, source, pips);
        if destination == HOME {
            self.check_bear_off(player, source, pips)?;
            return Ok(HOME);
        }

        let opponent = player.other();
        let blockers = self.count(opponent, destination);
        if blockers >= 2 {
            return Err(BoardError::Blocked {
                slot: destination,
                opponent,
                count: blockers,
            }
            .into());
        }

        Ok(destination)
    }

    fn check_bear_off(&self, player: Player, source: SlotId, pips: Pips) -> Result<()> {
        // 內場以外的點都不能有棋子（BAR 已在前面檢查過）
        let home_board = player.home_board();
        if let Some(slot) = (FIRST_POINT..=LAST_POINT)
            .find(|slot| !home_board.contains(slot) && self.count(player, *slot) > 0)
        {
            return Err(BoardError::CheckersOutsideHome { player, slot }.into());
        }

        // 剛好脫離的點數一定可以
        let exact = match player {
            Player::Black => source + pips as SlotId == BAR,
            Player::Red => source == pips as SlotId,
        };
        if exact {
            return Ok(());
        }

        // 點數超過時，比起點更遠的內場點不能有棋子（起點本身不算）
        let farther = match player {
            Player::Black => *home_board.start()..source,
            Player::Red => source + 1..*home_board.end() + 1,
        };
        if let Some(slot) = farther.into_iter().find(|slot| self.count(player, *slot) > 0) {
            return Err(BoardError::FartherCheckerInHome {
                player,
                from: source,
                pips,
                slot,
            }
            .into());
        }

        Ok(())
    }

    pub fn is_legal_move(&self, player: Player, source: SlotId, pips: Pips) -> bool {
        match self.check_move(player, source, pips) {
            Ok(_) => true,
            Err(err) => {
                debug!(%player, source, pips, "illegal move: {err}");
                false
            }
        }
    }

    /// 執行移動；不合法時不做任何修改並回傳拒絕原因
    pub fn try_move(&mut self, player: Player, source: SlotId, pips: Pips) -> Result<MoveOutcome> {
        let destination = self.check_move(player, source, pips)?;

        let opponent = player.other();
        let hit = destination != HOME && self.count(opponent, destination) == 1;
        if hit {
            self.decrement(opponent, destination);
            self.increment(opponent, BAR, 1);
        }
        self.decrement(player, source);
        self.increment(player, destination, 1);

        trace!(%player, source, destination, hit, "checker moved");
        Ok(MoveOutcome {
            player,
            source,
            destination,
            hit,
        })
    }

    /// 執行移動，回傳是否成功
    pub fn move_checker(&mut self, player: Player, source: SlotId, pips: Pips) -> bool {
        match self.try_move(player, source, pips) {
            Ok(_) => true,
            Err(err) => {
                debug!(%player, source, pips, "move rejected: {err}");
                false
            }
        }
    }

    /// 所有以 `pips` 點可以合法出發的槽位（只有點與 BAR）
    pub fn valid_sources(&self, player: Player, pips: Pips) -> Vec<SlotId> {
        (FIRST_POINT..=BAR)
            .filter(|&source| self.check_move(player, source, pips).is_ok())
            .collect()
    }

    /// 從 `source` 出發，各點數對應的合法目的地（去除重複）
    pub fn legal_destinations(&self, player: Player, source: SlotId, pips: &[Pips]) -> Vec<SlotId> {
        let mut destinations: Vec<SlotId> = pips
            .iter()
            .filter_map(|&p| self.check_move(player, source, p).ok())
            .collect();
        destinations.sort_unstable();
        destinations.dedup();
        destinations
    }

    /// 若移動合法，將目的地標記為合法目的地
    pub fn check_if_valid_destination(&mut self, player: Player, source: SlotId, pips: Pips) {
        if let Ok(destination) = self.check_move(player, source, pips) {
            let player = (destination == HOME).then_some(player);
            self.set_valid_destination(destination, player, true);
        }
    }

    /// 清除所有點與雙方 HOME 的合法目的地標記
    pub fn remove_all_highlights(&mut self) {
        for slot in FIRST_POINT..=LAST_POINT {
            self.set_valid_destination(slot, None, false);
        }
        for player in Player::iter() {
            self.set_valid_destination(HOME, Some(player), false);
        }
    }

    /// 選取某槽位（同時取消其他槽位的選取）
    ///
    /// 點的選取旗標由雙方共用，只有 BAR 分玩家記錄，
    /// 因此只應替目前行動的玩家選取。
    pub fn select(&mut self, player: Player, slot: SlotId) {
        self.clear_selection(player);
        if let Some(container) = self.containers.get_mut(slot) {
            if container.set_selected(player, true) {
                self.events.emit(BoardEvent::SelectedChanged { slot, on: true });
            }
        }
    }

    /// 取消選取：所有點的選取一律清除，BAR 只清除 `player` 的選取
    pub fn clear_selection(&mut self, player: Player) {
        for slot in FIRST_POINT..=BAR {
            if self.containers[slot].set_selected(player, false) {
                self.events
                    .emit(BoardEvent::SelectedChanged { slot, on: false });
            }
        }
    }

    pub fn selected(&self, player: Player) -> Option<SlotId> {
        self.containers
            .iter()
            .find(|c| c.is_selected(player))
            .map(|c| c.slot())
    }

    fn set_valid_destination(&mut self, slot: SlotId, player: Option<Player>, on: bool) {
        let container = &mut self.containers[slot];
        if container.set_valid_destination(player, on) {
            self.events
                .emit(BoardEvent::ValidDestinationChanged { slot, player, on });
        }
    }

    fn increment(&mut self, player: Player, slot: SlotId, count: CheckerCount) {
        let count = self.containers[slot].increment(player, count);
        self.events.emit(BoardEvent::CheckerCountChanged {
            player,
            slot,
            count,
        });
    }

    fn decrement(&mut self, player: Player, slot: SlotId) {
        let count = self.containers[slot].decrement(player);
        self.events.emit(BoardEvent::CheckerCountChanged {
            player,
            slot,
            count,
        });
    }
}
