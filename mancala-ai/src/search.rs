//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝，支持固定深度与不限深度两种模式。
//! 北方为极大方，南方为极小方；额外回合由走法应用返回的走子方决定，
//! 递归不得假设双方交替。

use mancala_core::{Board, Outcome, Pit, Result, Rules, Side};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluate::Evaluator;

/// 终局分值：北方胜 +1000，南方胜 -1000，平局 0
pub const SCORE_WIN: i32 = 1000;

/// 搜索深度限制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchDepth {
    /// 固定层数，每次递归消耗一层（额外回合同样消耗）
    Limited(u32),
    /// 搜索至真正终局
    Unlimited,
}

impl SearchDepth {
    /// 深度是否已耗尽
    fn exhausted(self) -> bool {
        matches!(self, SearchDepth::Limited(0))
    }

    /// 递归一层后的剩余深度
    fn next(self) -> SearchDepth {
        match self {
            SearchDepth::Limited(depth) => SearchDepth::Limited(depth.saturating_sub(1)),
            SearchDepth::Unlimited => SearchDepth::Unlimited,
        }
    }
}

/// 难度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// AI 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub depth: SearchDepth,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                difficulty,
                depth: SearchDepth::Limited(3),
            },
            Difficulty::Medium => Self {
                difficulty,
                depth: SearchDepth::Limited(6),
            },
            Difficulty::Hard => Self {
                difficulty,
                depth: SearchDepth::Limited(10),
            },
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            nodes_searched: 0,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    /// 搜索最佳走法，返回（分值，走法）
    ///
    /// 分值为全局视角：正值对北方有利。终局检查优先于深度截断，
    /// 必胜/必败局面在深度 0 也能识别。平分走法取扫描顺序中先出现者，
    /// 结果确定性可复现。无合法走法时返回静态评估与 `None`。
    pub fn search(&mut self, board: &Board, side: Side, depth: SearchDepth) -> (i32, Option<Pit>) {
        self.nodes_searched = 0;
        let (score, best) = self.minimax(board, side, depth, i32::MIN, i32::MAX);
        debug!(
            nodes = self.nodes_searched,
            score,
            best = ?best,
            "search finished"
        );
        (score, best)
    }

    /// 为自主对局选择实际执行的走法
    ///
    /// Easy 难度有 30% 概率随机走子；其余情况等同于按配置深度搜索。
    pub fn choose_move(&mut self, board: &Board, side: Side) -> Option<Pit> {
        let moves = Rules::legal_moves(board, side);
        if moves.is_empty() {
            return None;
        }

        if self.config.difficulty == Difficulty::Easy && rand::random::<f32>() < 0.3 {
            let mut rng = rand::thread_rng();
            return moves.choose(&mut rng).copied();
        }

        let (score, best) = self.search(board, side, self.config.depth);
        debug!(%side, score, chosen = ?best, "ai move selected");
        best.or_else(|| moves.first().copied())
    }

    /// 评估单个候选走法（走子方视角，正值对走子方有利）
    ///
    /// 先试走该步，再以返回的走子方对子局面做深度减一的搜索。
    /// 供界面显示走法提示。
    pub fn evaluate_move(
        &mut self,
        board: &Board,
        side: Side,
        pit: Pit,
        depth: SearchDepth,
    ) -> Result<i32> {
        let (next_board, next_side) = Rules::apply_move(board, side, pit)?;
        let (score, _) = self.search(&next_board, next_side, depth.next());
        Ok(match side {
            Side::North => score,
            Side::South => -score,
        })
    }

    /// Minimax + Alpha-Beta
    fn minimax(
        &mut self,
        board: &Board,
        side: Side,
        depth: SearchDepth,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Pit>) {
        self.nodes_searched += 1;

        // 终局检查优先于深度截断（在副本上判定，不影响入参棋盘）
        let (_, outcome) = Rules::resolve_outcome(board);
        match outcome {
            Outcome::Win(Side::North) => return (SCORE_WIN, None),
            Outcome::Win(Side::South) => return (-SCORE_WIN, None),
            Outcome::Tie => return (0, None),
            Outcome::Ongoing => {}
        }

        if depth.exhausted() {
            return (Evaluator::evaluate(board), None);
        }

        let moves = Rules::legal_moves(board, side);
        // 走子方暂时无子可走（终局判定尚未介入时的兜底）
        if moves.is_empty() {
            return (Evaluator::evaluate(board), None);
        }

        let maximizing = side == Side::North;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for pit in moves {
            // 每个分支在独立的棋盘副本上展开
            let Ok((next_board, next_side)) = Rules::apply_move(board, side, pit) else {
                continue;
            };
            let (score, _) = self.minimax(&next_board, next_side, depth.next(), alpha, beta);

            // 严格优于才更新，平分时保留扫描顺序靠前的走法
            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(pit);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(pit);
                }
                beta = beta.min(score);
            }

            // Alpha-Beta 剪枝
            if beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    }

    /// 上一次搜索访问的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mancala_core::BOARD_SLOTS;

    /// 测试用引擎：Medium 配置，避免 Easy 的随机走子
    fn engine() -> AiEngine {
        AiEngine::from_difficulty(Difficulty::Medium)
    }

    /// 全空棋盘，方便逐坑摆子
    fn empty_board() -> Board {
        let mut board = Board::initial();
        for i in 0..BOARD_SLOTS {
            board.set(Pit::from_index(i).unwrap(), 0);
        }
        board
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut board = Board::initial();
        board.set(Pit::D, 0);
        board.set(Pit::G, 5);

        let mut engine = engine();
        let first = engine.search(&board, Side::North, SearchDepth::Limited(5));
        for _ in 0..3 {
            assert_eq!(
                engine.search(&board, Side::North, SearchDepth::Limited(5)),
                first
            );
        }
        assert!(first.1.is_some());
    }

    #[test]
    fn test_tie_break_first_in_scan_order() {
        // 深度 1 下南方 A、B、C 同分（种子不出己方半场），取扫描顺序最前的 A
        let board = Board::initial();
        let mut engine = engine();
        let (score, best) = engine.search(&board, Side::South, SearchDepth::Limited(1));
        assert_eq!(score, 0);
        assert_eq!(best, Some(Pit::A));
    }

    #[test]
    fn test_terminal_beats_depth_cutoff() {
        // 已分胜负的棋盘在深度 0 仍返回胜负分而非静态评估
        let mut board = empty_board();
        board.set(Pit::SouthStore, 10);
        board.set(Pit::NorthStore, 30);
        board.set(Pit::A, 2);

        let mut engine = engine();
        let (score, best) = engine.search(&board, Side::South, SearchDepth::Limited(0));
        assert_eq!(score, SCORE_WIN);
        assert_eq!(best, None);

        // 南方必胜局面对称
        board.set(Pit::SouthStore, 30);
        board.set(Pit::NorthStore, 10);
        let (score, _) = engine.search(&board, Side::South, SearchDepth::Limited(0));
        assert_eq!(score, -SCORE_WIN);
    }

    #[test]
    fn test_depth_zero_evaluates_undecided_board() {
        let mut board = Board::initial();
        board.set(Pit::NorthStore, 3);

        let mut engine = engine();
        let (score, best) = engine.search(&board, Side::South, SearchDepth::Limited(0));
        assert_eq!(score, Evaluator::evaluate(&board));
        assert_eq!(best, None);
    }

    #[test]
    fn test_finds_immediate_winning_move() {
        // 北方走 G 的 1 粒落北库即库存过半
        let mut board = empty_board();
        board.set(Pit::NorthStore, 5);
        board.set(Pit::SouthStore, 4);
        board.set(Pit::G, 1);
        board.set(Pit::A, 1);

        let mut engine = engine();
        let (score, best) = engine.search(&board, Side::North, SearchDepth::Limited(1));
        assert_eq!(score, SCORE_WIN);
        assert_eq!(best, Some(Pit::G));
    }

    #[test]
    fn test_extra_turn_followed_by_harvest() {
        // 北方唯一走法 G 落库得额外回合，随即北方坑全空触发收官，平局
        let mut board = empty_board();
        board.set(Pit::G, 1);
        board.set(Pit::A, 1);

        let mut engine = engine();
        let (score, best) = engine.search(&board, Side::North, SearchDepth::Unlimited);
        assert_eq!(score, 0);
        assert_eq!(best, Some(Pit::G));
    }

    #[test]
    fn test_unlimited_search_on_small_game() {
        // 每坑 1 粒的小局可以搜到真正终局
        let board = Board::new(1).unwrap();
        let mut engine = engine();
        let (score, best) = engine.search(&board, Side::South, SearchDepth::Unlimited);

        assert!(best.is_some());
        assert!(score.abs() <= SCORE_WIN);
        assert!(engine.nodes_searched() > 0);
        println!("12-seed game score: {score}, nodes: {}", engine.nodes_searched());
    }

    #[test]
    fn test_evaluate_move_mover_perspective() {
        let board = Board::initial();
        let mut engine = engine();
        let depth = SearchDepth::Limited(4);

        // 与手工展开一致：试走后搜索子局面，南方取负
        let hint = engine
            .evaluate_move(&board, Side::South, Pit::D, depth)
            .unwrap();
        let (next_board, next_side) = Rules::apply_move(&board, Side::South, Pit::D).unwrap();
        let (raw, _) = engine.search(&next_board, next_side, depth.next());
        assert_eq!(hint, -raw);

        // 非法走法照常报错
        assert!(engine
            .evaluate_move(&board, Side::South, Pit::G, depth)
            .is_err());
    }

    #[test]
    fn test_choose_move_matches_search_for_fixed_depth() {
        let board = Board::initial();
        let mut engine = AiEngine::new(AiConfig {
            difficulty: Difficulty::Medium,
            depth: SearchDepth::Limited(6),
        });

        let chosen = engine.choose_move(&board, Side::North);
        let (_, best) = engine.search(&board, Side::North, SearchDepth::Limited(6));
        assert_eq!(chosen, best);
        assert!(chosen.is_some());
    }

    #[test]
    fn test_choose_move_easy_returns_legal_move() {
        let board = Board::initial();
        let mut engine = AiEngine::from_difficulty(Difficulty::Easy);
        let chosen = engine.choose_move(&board, Side::North).unwrap();
        assert!(Rules::legal_moves(&board, Side::North).contains(&chosen));
    }

    #[test]
    fn test_difficulty_config() {
        let easy = AiConfig::from_difficulty(Difficulty::Easy);
        assert_eq!(easy.depth, SearchDepth::Limited(3));

        let medium = AiConfig::from_difficulty(Difficulty::Medium);
        assert_eq!(medium.depth, SearchDepth::Limited(6));

        let hard = AiConfig::from_difficulty(Difficulty::Hard);
        assert_eq!(hard.depth, SearchDepth::Limited(10));
    }
}
