//! 棋盤佈局（初始擺放）
//!
//! 佈局可以用 TOML 描述，例如：
//! ```toml
//! [[placements]]
//! player = "Black"
//! slot = 19
//! count = 15
//!
//! [[placements]]
//! player = "Red"
//! slot = 6
//! count = 15
//! ```

use crate::alias::{CheckerCount, SlotId};
use crate::constants::{BAR, CHECKERS_PER_PLAYER, HOME, SLOT_COUNT};
use crate::error::{Context, LoadError, Result};
use crate::player::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::IntoEnumIterator;

/// 單筆擺放：某玩家在某槽位放幾顆棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub player: Player,
    pub slot: SlotId,
    pub count: CheckerCount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    #[serde(default)]
    pub placements: Vec<Placement>,
}

impl BoardLayout {
    /// 標準開局
    ///
    /// Red：24 兩顆、6 五顆、8 三顆、13 五顆；Black 以相反方向對稱擺放。
    pub fn standard() -> Self {
        let placements = [
            (Player::Red, 24, 2),
            (Player::Black, 1, 2),
            (Player::Red, 6, 5),
            (Player::Black, 19, 5),
            (Player::Red, 8, 3),
            (Player::Black, 17, 3),
            (Player::Red, 13, 5),
            (Player::Black, 12, 5),
        ]
        .into_iter()
        .map(|(player, slot, count)| Placement {
            player,
            slot,
            count,
        })
        .collect();
        Self { placements }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let layout: BoardLayout = toml::from_str(content).map_err(|e| LoadError::Deserialize {
            format: "TOML".to_string(),
            reason: e.to_string(),
        })?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content).context(format!("載入佈局檔案 {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            LoadError::Serialize {
                format: "TOML".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// 依槽位彙總的數量，重複的擺放會累加
    pub fn slot_counts(&self) -> [[CheckerCount; 2]; SLOT_COUNT] {
        let mut counts = [[0; 2]; SLOT_COUNT];
        for placement in &self.placements {
            if let Some(slot) = counts.get_mut(placement.slot) {
                slot[placement.player.index()] += placement.count;
            }
        }
        counts
    }

    /// 驗證佈局
    ///
    /// - 槽位必須在 `0..=25`
    /// - 每位玩家恰好 15 顆棋子
    /// - 同一個點不能雙方都有兩顆以上
    pub fn validate(&self) -> Result<()> {
        if let Some(placement) = self.placements.iter().find(|p| p.slot > BAR) {
            return Err(LoadError::Invalid(format!(
                "{} 的擺放槽位 {} 超出範圍",
                placement.player, placement.slot
            ))
            .into());
        }

        let counts = self.slot_counts();
        for player in Player::iter() {
            let total: CheckerCount = counts.iter().map(|slot| slot[player.index()]).sum();
            if total != CHECKERS_PER_PLAYER {
                return Err(LoadError::Invalid(format!(
                    "{player} 共有 {total} 顆棋子，應為 {CHECKERS_PER_PLAYER}"
                ))
                .into());
            }
        }

        for (slot, pair) in counts.iter().enumerate() {
            if slot == HOME || slot == BAR {
                continue;
            }
            if pair[0] >= 2 && pair[1] >= 2 {
                return Err(
                    LoadError::Invalid(format!("點 {slot} 同時被雙方佔據")).into(),
                );
            }
        }

        Ok(())
    }
}
