//! 局面评估函数

use mancala_core::{Board, Side};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 评估棋盘（北方视角，正值对北方有利）
    ///
    /// 静态启发式：双方（库 + 己方坑）种子总数之差。
    /// 仅用于深度截断处的叶子评估；终局棋盘由搜索直接给出胜负分。
    pub fn evaluate(board: &Board) -> i32 {
        let north = board.store(Side::North) + board.side_seeds(Side::North);
        let south = board.store(Side::South) + board.side_seeds(Side::South);
        north as i32 - south as i32
    }
}
