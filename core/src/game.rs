//! 回合流程
//!
//! 負責輪到誰、這回合的骰子、以及勝負判定。走子規則全部交給 [`BoardState`]。

use crate::alias::{Pips, SlotId};
use crate::board::{BoardState, MoveOutcome};
use crate::constants::CHECKERS_PER_PLAYER;
use crate::dice::Dice;
use crate::error::{GameError, Result};
use crate::event::BoardEvent;
use crate::layout::BoardLayout;
use crate::player::Player;
use std::sync::mpsc;
use tracing::info;

#[derive(Debug)]
pub struct Game {
    board: BoardState,
    current: Player,
    dice: Option<Dice>,
    winner: Option<Player>,
}

impl Game {
    /// 標準開局
    pub fn new(starting: Player) -> Self {
        Self {
            board: BoardState::new(),
            current: starting,
            dice: None,
            winner: None,
        }
    }

    /// 自訂佈局開局（佈局必須合法）
    pub fn with_layout(layout: &BoardLayout, starting: Player) -> Result<Self> {
        layout.validate()?;
        let board = BoardState::from_layout(layout);
        let winner = Self::find_winner(&board);
        Ok(Self {
            board,
            current: starting,
            dice: None,
            winner,
        })
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn subscribe(&mut self) -> mpsc::Receiver<BoardEvent> {
        self.board.subscribe()
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn dice(&self) -> Option<&Dice> {
        self.dice.as_ref()
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// 目前玩家擲骰
    pub fn roll(&mut self) -> Result<&Dice> {
        self.ensure_not_over()?;
        Ok(&*self.dice.insert(Dice::roll()))
    }

    /// 使用外部提供的骰子點數
    pub fn set_dice(&mut self, first: Pips, second: Pips) -> Result<&Dice> {
        self.ensure_not_over()?;
        let dice = Dice::from_values(first, second)?;
        Ok(&*self.dice.insert(dice))
    }

    /// 以某顆骰子的點數移動 `source` 上的棋子，成功時消耗該骰子一次
    pub fn play(&mut self, source: SlotId, pips: Pips) -> Result<MoveOutcome> {
        self.ensure_not_over()?;
        let dice = self.dice.as_mut().ok_or(GameError::NoDice)?;
        if !dice.has(pips) {
            return Err(GameError::DieNotAvailable(pips).into());
        }

        let outcome = self.board.try_move(self.current, source, pips)?;
        dice.use_die(pips)?;

        self.board.remove_all_highlights();
        self.board.clear_selection(self.current);

        if let Some(winner) = Self::find_winner(&self.board) {
            info!(%winner, "game over");
            self.winner = Some(winner);
        }
        Ok(outcome)
    }

    /// 剩下的骰子中是否還有任何合法的走法
    pub fn can_play(&self) -> bool {
        self.winner.is_none() && !self.valid_sources().is_empty()
    }

    /// 目前玩家以剩餘骰子可以出發的槽位
    pub fn valid_sources(&self) -> Vec<SlotId> {
        let Some(dice) = &self.dice else {
            return Vec::new();
        };
        let mut sources: Vec<SlotId> = dice
            .distinct_remaining()
            .into_iter()
            .flat_map(|pips| self.board.valid_sources(self.current, pips))
            .collect();
        sources.sort_unstable();
        sources.dedup();
        sources
    }

    /// 結束回合並換人，回傳下一位玩家
    ///
    /// 骰子用完或已無合法走法時才能結束。
    pub fn end_turn(&mut self) -> Result<Player> {
        self.ensure_not_over()?;
        if self.can_play() {
            return Err(GameError::MovesRemaining {
                player: self.current,
            }
            .into());
        }

        self.dice = None;
        self.board.remove_all_highlights();
        self.board.clear_selection(self.current);
        self.current = self.current.other();
        info!(player = %self.current, "turn started");
        Ok(self.current)
    }

    /// 選取起點並標示每個剩餘點數的合法目的地
    pub fn select(&mut self, source: SlotId) {
        self.board.remove_all_highlights();
        self.board.select(self.current, source);
        let Some(dice) = &self.dice else {
            return;
        };
        for pips in dice.distinct_remaining() {
            self.board
                .check_if_valid_destination(self.current, source, pips);
        }
    }

    pub fn deselect(&mut self) {
        self.board.remove_all_highlights();
        self.board.clear_selection(self.current);
    }

    fn ensure_not_over(&self) -> Result<()> {
        match self.winner {
            Some(winner) => Err(GameError::GameOver { winner }.into()),
            None => Ok(()),
        }
    }

    fn find_winner(board: &BoardState) -> Option<Player> {
        [Player::Black, Player::Red]
            .into_iter()
            .find(|&player| board.borne_off(player) == CHECKERS_PER_PLAYER)
    }
}
