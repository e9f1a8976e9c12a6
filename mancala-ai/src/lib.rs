//! Mancala AI 引擎
//!
//! 包含:
//! - 局面评估函数
//! - Minimax + Alpha-Beta 搜索（固定深度或不限深度）
//! - 难度配置与单步走法提示

mod evaluate;
mod search;

pub use evaluate::Evaluator;
pub use search::{AiConfig, AiEngine, Difficulty, SearchDepth, SCORE_WIN};
