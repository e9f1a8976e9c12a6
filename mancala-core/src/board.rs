//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SLOTS, DEFAULT_STARTING_SEEDS};
use crate::error::{MancalaError, Result};
use crate::pit::{Pit, Side};

/// 棋盘
///
/// 14 个槽位的种子计数，按 `Pit::index()` 索引。
/// 不变量：一局之内种子总数恒定，规则只搬运种子，不产生也不销毁。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    seeds: [u32; BOARD_SLOTS],
}

impl Board {
    /// 创建初始棋盘（每坑 4 粒，库为空）
    pub fn initial() -> Self {
        let mut seeds = [DEFAULT_STARTING_SEEDS; BOARD_SLOTS];
        seeds[Pit::SouthStore.index()] = 0;
        seeds[Pit::NorthStore.index()] = 0;
        Self { seeds }
    }

    /// 创建指定初始种子数的棋盘
    ///
    /// 初始种子数必须为正，否则返回 `InvalidConfiguration`。
    pub fn new(starting_seeds: u32) -> Result<Self> {
        if starting_seeds == 0 {
            return Err(MancalaError::InvalidConfiguration { starting_seeds });
        }
        let mut seeds = [starting_seeds; BOARD_SLOTS];
        seeds[Pit::SouthStore.index()] = 0;
        seeds[Pit::NorthStore.index()] = 0;
        Ok(Self { seeds })
    }

    /// 获取指定槽位的种子数
    pub fn get(&self, pit: Pit) -> u32 {
        self.seeds[pit.index()]
    }

    /// 设置指定槽位的种子数
    pub fn set(&mut self, pit: Pit, count: u32) {
        self.seeds[pit.index()] = count;
    }

    /// 指定阵营库中的种子数
    pub fn store(&self, side: Side) -> u32 {
        self.get(side.store())
    }

    /// 指定阵营 6 个坑的种子总数（不含库）
    pub fn side_seeds(&self, side: Side) -> u32 {
        side.pits().iter().map(|&pit| self.get(pit)).sum()
    }

    /// 全部 14 个槽位的种子总数
    pub fn total_seeds(&self) -> u32 {
        self.seeds.iter().sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
