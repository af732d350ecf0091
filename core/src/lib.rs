//! 雙人西洋雙陸棋（backgammon）規則引擎
//!
//! 此函式庫實作走子合法性與狀態轉移，包括：
//! - 24 個點、BAR、HOME 的棋子計數
//! - 進場、封鎖、吃子、脫離（bearing off）規則
//! - 棋盤變化事件（供顯示層訂閱）
//! - 佈局設定（TOML）、擲骰與回合流程
//!
//! 顯示層只接收事件，不參與任何規則判斷。

pub mod alias;
pub mod board;
pub mod constants;
pub mod container;
pub mod dice;
pub mod error;
pub mod event;
pub mod game;
pub mod layout;
pub mod player;

// 重新導出常用類型
pub use alias::{CheckerCount, Pips, SlotId};
pub use board::{BoardState, MoveOutcome};
pub use constants::{BAR, HOME};
pub use dice::Dice;
pub use error::{BoardError, Error, ErrorKind, GameError, LoadError, Result};
pub use event::BoardEvent;
pub use game::Game;
pub use layout::{BoardLayout, Placement};
pub use player::Player;
