//! 错误类型定义

use thiserror::Error;

use crate::pit::{Pit, Side};

/// 规则错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MancalaError {
    /// 非法走法（坑不属于走子方、坑为空或选择了库）
    #[error("Illegal move: {pit} is not a legal move for {side}")]
    IllegalMove { side: Side, pit: Pit },

    /// 无效的初始配置
    #[error("Invalid configuration: starting seeds must be positive, got {starting_seeds}")]
    InvalidConfiguration { starting_seeds: u32 },

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, MancalaError>;
