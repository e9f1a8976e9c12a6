//! 对局会话状态机
//!
//! 状态：等待走子（带走子方）/ 终局（带结果）。终局是吸收态。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{MancalaError, Result};
use crate::pit::{Pit, Side};
use crate::rules::{Outcome, Rules};

/// 完整的对局状态（棋盘 + 当前走子方 + 已判定的结果）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_turn: Side,
    outcome: Outcome,
}

impl Game {
    /// 创建初始对局（每坑 4 粒，南方先行）
    pub fn initial() -> Self {
        Self {
            board: Board::initial(),
            current_turn: Side::South,
            outcome: Outcome::Ongoing,
        }
    }

    /// 创建指定配置的对局
    pub fn new(starting_seeds: u32, first_side: Side) -> Result<Self> {
        Ok(Self {
            board: Board::new(starting_seeds)?,
            current_turn: first_side,
            outcome: Outcome::Ongoing,
        })
    }

    /// 当前棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 当前走子方
    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    /// 当前对局结果
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// 当前走子方的合法走法
    pub fn legal_moves(&self) -> Vec<Pit> {
        Rules::legal_moves(&self.board, self.current_turn)
    }

    /// 走一步并判定结果
    ///
    /// 终局后再走返回 `GameOver`。
    pub fn play(&mut self, pit: Pit) -> Result<Outcome> {
        if self.outcome.is_over() {
            return Err(MancalaError::GameOver);
        }

        let (board, next_side) = Rules::apply_move(&self.board, self.current_turn, pit)?;
        let (board, outcome) = Rules::resolve_outcome(&board);
        self.board = board;
        self.current_turn = next_side;
        self.outcome = outcome;
        Ok(outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::initial()
    }
}
