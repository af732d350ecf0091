//! 擲骰系統
//!
//! 每回合擲兩顆骰子；擲出相同點數（doubles）時可以走四次。
//! 規則引擎本身只接受外部提供的點數，隨機數只在這裡產生。

use crate::alias::Pips;
use crate::constants::{MAX_PIPS, MIN_PIPS};
use crate::error::{GameError, Result};
use rand::Rng;

/// 一回合的骰子與剩餘可用次數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dice {
    /// 擲出的兩個點數
    pub values: [Pips; 2],
    /// 尚未使用的點數（doubles 時有四個）
    remaining: Vec<Pips>,
}

impl Dice {
    /// 以外部提供的點數建立
    pub fn from_values(first: Pips, second: Pips) -> Result<Self> {
        for value in [first, second] {
            if !(MIN_PIPS..=MAX_PIPS).contains(&value) {
                return Err(GameError::InvalidDieValue(value).into());
            }
        }
        Ok(Self::with_values(first, second))
    }

    /// 擲兩顆骰子
    pub fn roll() -> Self {
        Self::roll_with(&mut rand::rng())
    }

    /// 使用指定的亂數產生器擲骰（測試時可固定種子）
    pub fn roll_with<R: Rng>(rng: &mut R) -> Self {
        let first = rng.random_range(MIN_PIPS..=MAX_PIPS);
        let second = rng.random_range(MIN_PIPS..=MAX_PIPS);
        Self::with_values(first, second)
    }

    fn with_values(first: Pips, second: Pips) -> Self {
        let remaining = if first == second {
            vec![first; 4]
        } else {
            vec![first, second]
        };
        Self {
            values: [first, second],
            remaining,
        }
    }

    pub fn is_double(&self) -> bool {
        self.values[0] == self.values[1]
    }

    pub fn remaining(&self) -> &[Pips] {
        &self.remaining
    }

    /// 尚未使用的點數（去除重複，由大到小）
    pub fn distinct_remaining(&self) -> Vec<Pips> {
        let mut values = self.remaining.clone();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values.dedup();
        values
    }

    /// 某點數還能用幾次
    pub fn remaining_uses(&self, pips: Pips) -> usize {
        self.remaining.iter().filter(|&&p| p == pips).count()
    }

    pub fn has(&self, pips: Pips) -> bool {
        self.remaining.contains(&pips)
    }

    /// 使用一次某點數
    pub fn use_die(&mut self, pips: Pips) -> Result<()> {
        let idx = self
            .remaining
            .iter()
            .position(|&p| p == pips)
            .ok_or(GameError::DieNotAvailable(pips))?;
        self.remaining.remove(idx);
        Ok(())
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// 格式化以供顯示（例如："3, 5 剩餘 [5]"）
    pub fn format(&self) -> String {
        format!(
            "{}, {} 剩餘 {:?}",
            self.values[0], self.values[1], self.remaining
        )
    }
}
