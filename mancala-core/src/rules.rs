//! 走法应用与终局判定

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{MancalaError, Result};
use crate::pit::{Pit, Side};

/// 对局结果
///
/// 始终由当前棋盘重新推导，不单独维护可变状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// 对局进行中
    Ongoing,
    /// 某方获胜
    Win(Side),
    /// 平局
    Tie,
}

impl Outcome {
    /// 对局是否已结束
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// 规则引擎
pub struct Rules;

impl Rules {
    /// 枚举指定阵营的合法走法（有种子的己方坑，按固定扫描顺序）
    pub fn legal_moves(board: &Board, side: Side) -> Vec<Pit> {
        side.pits()
            .iter()
            .copied()
            .filter(|&pit| board.get(pit) > 0)
            .collect()
    }

    /// 应用一步走法，返回新棋盘与下一个走子方
    ///
    /// 播种时跳过对方的库；末粒落入己方库则获得额外回合；
    /// 末粒落入己方原本为空的坑且对面坑非空则发生捕获。
    /// 纯函数式转移：入参棋盘不被修改。
    pub fn apply_move(board: &Board, side: Side, pit: Pit) -> Result<(Board, Side)> {
        if pit.is_store() || pit.owner() != side || board.get(pit) == 0 {
            return Err(MancalaError::IllegalMove { side, pit });
        }

        let mut next = board.clone();
        let mut seeds = next.get(pit);
        next.set(pit, 0);

        // 逐粒播种，经过对方的库时跳过且不消耗种子
        let opponent_store = side.opponent().store();
        let mut landing = pit;
        while seeds > 0 {
            landing = landing.successor();
            if landing == opponent_store {
                continue;
            }
            next.set(landing, next.get(landing) + 1);
            seeds -= 1;
        }

        // 末粒落入己方库：额外回合，不做捕获检查
        if landing == side.store() {
            return Ok((next, side));
        }

        // 捕获：末粒落入己方原本为空的坑，且对面坑有种子
        if landing.owner() == side && !landing.is_store() && next.get(landing) == 1 {
            if let Some(opposite) = landing.opposite() {
                let captured = next.get(opposite);
                if captured > 0 {
                    let store = side.store();
                    next.set(store, next.get(store) + captured + 1);
                    next.set(landing, 0);
                    next.set(opposite, 0);
                }
            }
        }

        Ok((next, side.opponent()))
    }

    /// 判定终局，必要时执行收官
    ///
    /// 一方库存严格过半时胜负提前确定（棋盘不变）；
    /// 一方坑全空时，另一方把己方坑内剩余种子扫入己方库再比库存。
    /// 幂等：对已判定的棋盘重复调用返回相同结果且棋盘不变。
    pub fn resolve_outcome(board: &Board) -> (Board, Outcome) {
        let total = board.total_seeds();

        // 库存过半，无需清空棋盘即可判定
        for side in [Side::South, Side::North] {
            if board.store(side) * 2 > total {
                return (board.clone(), Outcome::Win(side));
            }
        }

        let south_seeds = board.side_seeds(Side::South);
        let north_seeds = board.side_seeds(Side::North);
        if south_seeds > 0 && north_seeds > 0 {
            return (board.clone(), Outcome::Ongoing);
        }

        // 收官：对方坑已空的一方收走己方坑内剩余的种子
        let mut resolved = board.clone();
        let collector = if south_seeds == 0 {
            Side::North
        } else {
            Side::South
        };
        let remaining = resolved.side_seeds(collector);
        resolved.set(collector.store(), resolved.store(collector) + remaining);
        for pit in collector.pits() {
            resolved.set(pit, 0);
        }

        let outcome = match resolved
            .store(Side::South)
            .cmp(&resolved.store(Side::North))
        {
            Ordering::Greater => Outcome::Win(Side::South),
            Ordering::Less => Outcome::Win(Side::North),
            Ordering::Equal => Outcome::Tie,
        };
        (resolved, outcome)
    }
}
