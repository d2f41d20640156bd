//! 全盘静态评估
//!
//! 逐格、逐方向向外展开相对棋子值序列，在每个已注册长度的前缀处
//! 做棋型精确匹配，所有命中分值累加。同一位置的多个棋型会叠加计分，
//! 反映多重威胁的复合价值。结果按角色相对哈希缓存在置换表中。

use gomoku_core::{Board, Position, Stone, ZobristTable, BOARD_SIZE, DIRECTIONS};
use tracing::trace;

use crate::pattern::PatternTable;
use crate::transposition::TranspositionTable;

/// 评估器
pub struct Evaluator {
    patterns: PatternTable,
}

impl Evaluator {
    /// 创建评估器（构建棋型表）
    pub fn new() -> Self {
        Self {
            patterns: PatternTable::new(),
        }
    }

    /// 评估局面（评估方视角，正值对评估方有利）
    ///
    /// 结果按角色相对占位哈希缓存；缓存命中时不再扫描棋盘
    pub fn evaluate(&self, board: &Board, side: Stone, cache: &mut TranspositionTable) -> i64 {
        let key = Self::relative_hash(board, side);
        if let Some(score) = cache.probe(key) {
            return score;
        }

        let score = self.score_board(board, side);
        cache.store(key, score);
        score
    }

    /// 计算角色相对占位哈希（槽位 0 = 评估方，槽位 1 = 对方）
    ///
    /// 同一形状无论评估方执黑执白都映射到同一个缓存键
    fn relative_hash(board: &Board, side: Stone) -> u64 {
        let table = ZobristTable::shared();
        let mut hash = 0u64;
        for (pos, stone) in board.stones() {
            hash ^= table.relative_key(stone == side, pos);
        }
        hash
    }

    /// 无缓存的全盘棋型匹配求和
    fn score_board(&self, board: &Board, side: Stone) -> i64 {
        let size = BOARD_SIZE as i32;
        let max_len = self.patterns.max_len() as i32;
        let mut score = 0i64;
        let mut pattern: Vec<i8> = Vec::with_capacity(max_len as usize);

        for y in 0..size {
            for x in 0..size {
                for (dx, dy) in DIRECTIONS {
                    pattern.clear();
                    for i in 0..max_len {
                        let nx = x + i * dx;
                        let ny = y + i * dy;
                        if nx < 0 || ny < 0 || nx >= size || ny >= size {
                            // 出界即截断，不作为填充值参与匹配
                            break;
                        }
                        let pos = Position::new_unchecked(nx as u8, ny as u8);
                        pattern.push(match board.get(pos) {
                            Some(stone) if stone == side => 1,
                            Some(_) => -1,
                            None => 0,
                        });
                        if self.patterns.has_length(pattern.len()) {
                            if let Some(value) = self.patterns.score(&pattern) {
                                score += value;
                            }
                        }
                    }
                }
            }
        }

        trace!(%side, score, "static evaluation");
        score
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
