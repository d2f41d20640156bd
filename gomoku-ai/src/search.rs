//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝 + 时间预算

use std::time::{Duration, Instant};

use gomoku_core::{Board, Position, Stone};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::evaluate::Evaluator;
use crate::movegen;
use crate::pattern::{INFINITY, WIN_SCORE};
use crate::transposition::TranspositionTable;

/// 引擎配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 固定的搜索深度（层数）
    pub max_depth: u8,
    /// 一次选点的时间预算（毫秒）
    pub time_limit_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            time_limit_ms: 2000,
        }
    }
}

/// 搜索引擎
///
/// 单线程、同步、深度优先递归搜索；唯一的让出点是每次调用
/// 顶部的墙钟检查。棋盘与置换表在整个调用期间被引擎独占。
pub struct Engine {
    config: EngineConfig,
    evaluator: Evaluator,
    cache: TranspositionTable,
    /// 缓存分值所属的评估方；换边时需清空缓存
    cache_side: Option<Stone>,
    nodes_searched: u64,
}

impl Engine {
    /// 创建新引擎
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            evaluator: Evaluator::new(),
            cache: TranspositionTable::new(),
            cache_side: None,
            nodes_searched: 0,
        }
    }

    /// 为指定一方选择最佳走法
    ///
    /// `last_move` 决定候选窗口的中心；开局第一手调用方应传入棋盘中心。
    /// 窗口内没有空格时返回 `None`，调用方按（局部）和棋处理。
    /// 返回前棋盘恢复到调用时的状态。
    pub fn choose_move(
        &mut self,
        board: &mut Board,
        side: Stone,
        last_move: Position,
    ) -> Option<Position> {
        self.nodes_searched = 0;
        if self.cache_side != Some(side) {
            // 缓存分值是按评估方视角存储的，换边后不可复用
            self.cache.clear();
            self.cache_side = Some(side);
        }

        let start = Instant::now();
        let deadline = start + Duration::from_millis(self.config.time_limit_ms);

        let moves = movegen::candidates(board, last_move, side);
        if moves.is_empty() {
            return None;
        }

        // 以启发分值最高的候选兜底，窗口非空时必有返回
        let mut best_move = moves[0].pos;
        let mut best_score = -INFINITY;
        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut scored = 0usize;

        for mv in &moves {
            if Instant::now() >= deadline {
                if scored == 0 {
                    debug!("time budget exhausted before any search; using heuristic pick");
                    return Some(best_move);
                }
                debug!(scored, total = moves.len(), "time budget exhausted mid-search");
                break;
            }

            board.place(mv.pos, side);
            let score = self.minimax(
                board,
                self.config.max_depth,
                false,
                side,
                alpha,
                beta,
                deadline,
                mv.pos,
            );
            board.undo(mv.pos);
            scored += 1;

            debug!(x = mv.pos.x, y = mv.pos.y, score, "candidate evaluated");

            if score > best_score {
                best_score = score;
                best_move = mv.pos;
                alpha = alpha.max(best_score);
            }
        }

        info!(
            x = best_move.x,
            y = best_move.y,
            score = best_score,
            nodes = self.nodes_searched,
            elapsed_ms = start.elapsed().as_millis() as u64,
            cache_entries = self.cache.len(),
            "move selected"
        );
        Some(best_move)
    }

    /// Minimax + Alpha-Beta 搜索
    ///
    /// 超过时间预算后立即返回静态评估值，让整个调用栈快速回退；
    /// 搜索在时间压力下退化为启发式，从不失败。
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        side: Stone,
        mut alpha: i64,
        mut beta: i64,
        deadline: Instant,
        last_move: Position,
    ) -> i64 {
        self.nodes_searched += 1;

        if Instant::now() >= deadline {
            return self.evaluator.evaluate(board, side, &mut self.cache);
        }

        match board.winner() {
            Some(winner) if winner == side => return WIN_SCORE,
            Some(_) => return -WIN_SCORE,
            None => {}
        }

        if depth == 0 {
            return self.evaluator.evaluate(board, side, &mut self.cache);
        }

        let moves = movegen::candidates(board, last_move, side);

        if maximizing {
            let mut best = -INFINITY;
            for mv in &moves {
                board.place(mv.pos, side);
                let score = match self.cache.probe(board.hash()) {
                    Some(cached) => cached,
                    None => {
                        let s = self.minimax(
                            board,
                            depth - 1,
                            false,
                            side,
                            alpha,
                            beta,
                            deadline,
                            mv.pos,
                        );
                        self.cache.store(board.hash(), s);
                        s
                    }
                };
                board.undo(mv.pos);

                best = best.max(score);
                if best >= beta {
                    break; // Beta 截断
                }
                alpha = alpha.max(best);
            }
            best
        } else {
            let opponent = side.opponent();
            let mut best = INFINITY;
            for mv in &moves {
                board.place(mv.pos, opponent);
                let score = match self.cache.probe(board.hash()) {
                    Some(cached) => cached,
                    None => {
                        let s = self.minimax(
                            board,
                            depth - 1,
                            true,
                            side,
                            alpha,
                            beta,
                            deadline,
                            mv.pos,
                        );
                        self.cache.store(board.hash(), s);
                        s
                    }
                };
                board.undo(mv.pos);

                best = best.min(score);
                if best <= alpha {
                    break; // Alpha 截断
                }
                beta = beta.min(best);
            }
            best
        }
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 当前配置
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 置换表只读访问（用于统计）
    pub fn cache(&self) -> &TranspositionTable {
        &self.cache
    }
}
