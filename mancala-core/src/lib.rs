//! Mancala（Kalah 变体）共享规则库
//!
//! 包含:
//! - 棋坑、阵营、棋盘等核心数据结构
//! - 走法枚举与播种、额外回合、捕获规则
//! - 终局判定与收官
//! - 对局会话状态机

mod board;
mod constants;
mod error;
mod game;
mod pit;
mod rules;

pub use board::Board;
pub use constants::*;
pub use error::{MancalaError, Result};
pub use game::Game;
pub use pit::{Pit, Side};
pub use rules::{Outcome, Rules};
