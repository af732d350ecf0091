//! 錯誤處理系統
//!
//! 規則引擎的布林 API（`is_legal_move`、`move_checker`）不回傳錯誤；
//! 需要知道拒絕原因時改用 `check_move` / `try_move`，原因以 [`BoardError`] 表示。

use crate::alias::{CheckerCount, Pips, SlotId};
use crate::player::Player;
use std::path::PathBuf;
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// 棋盤規則錯誤（同時也是移動被拒絕的原因）
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum BoardError {
    #[error("未知的玩家編號: {0}")]
    InvalidPlayer(u8),
    #[error("槽位超出範圍: {slot}")]
    InvalidSlot { slot: SlotId },
    #[error("骰子點數超出範圍: {pips}")]
    InvalidPips { pips: Pips },
    #[error("{player} 已脫離的棋子不能再移動")]
    BorneOff { player: Player },
    #[error("{player} 在 {slot} 沒有棋子可移動")]
    NoChecker { player: Player, slot: SlotId },
    #[error("{player} 在 BAR 上有 {count} 顆棋子，必須先移動 BAR 上的棋子")]
    MustEnterFromBar { player: Player, count: CheckerCount },
    #[error("{player} 在 {slot} 仍有棋子位於內場外，不能脫離")]
    CheckersOutsideHome { player: Player, slot: SlotId },
    #[error("{player} 在更遠的 {slot} 仍有棋子，不能以 {pips} 點從 {from} 脫離")]
    FartherCheckerInHome {
        player: Player,
        from: SlotId,
        pips: Pips,
        slot: SlotId,
    },
    #[error("目的地 {slot} 被 {opponent} 的 {count} 顆棋子封鎖")]
    Blocked {
        slot: SlotId,
        opponent: Player,
        count: CheckerCount,
    },
}

/// 佈局載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("讀取檔案失敗 {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{format} 反序列化失敗: {reason}")]
    Deserialize { format: String, reason: String },
    #[error("{format} 序列化失敗: {reason}")]
    Serialize { format: String, reason: String },
    #[error("佈局不合法: {0}")]
    Invalid(String),
}

/// 回合流程錯誤
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum GameError {
    #[error("骰子點數必須在 1..=6: {0}")]
    InvalidDieValue(Pips),
    #[error("尚未擲骰")]
    NoDice,
    #[error("沒有可用的 {0} 點骰子")]
    DieNotAvailable(Pips),
    #[error("{player} 仍有可走的步數，不能結束回合")]
    MovesRemaining { player: Player },
    #[error("遊戲已結束，勝者為 {winner}")]
    GameOver { winner: Player },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }

    /// 若為棋盤規則錯誤，取出拒絕原因
    pub fn as_board_error(&self) -> Option<&BoardError> {
        match &self.kind {
            ErrorKind::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    #[track_caller]
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err.context(context)),
        }
    }
}
