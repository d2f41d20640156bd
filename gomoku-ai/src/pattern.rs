//! 棋型评分表
//!
//! 以相对棋子值（1=评估方, -1=对方, 0=空格）的短序列为键的静态评分表。
//! 启动时为两个视角各注册一份，构建后不可变；
//! 表是反对称的：视角 -1 下某棋型的分值等于其镜像在视角 +1 下分值的相反数。

use std::collections::HashMap;

/// 五连的终局分值
///
/// 严格大于全盘所有棋型分值之和的上界，保证胜负压过任何局面分
pub const WIN_SCORE: i64 = 1_000_000_000_000;

/// alpha/beta 的初始哨兵，严格大于 `WIN_SCORE`
pub const INFINITY: i64 = i64::MAX / 2;

/// 棋型表
pub struct PatternTable {
    scores: HashMap<Vec<i8>, i64>,
    /// 已注册的棋型长度（升序去重）
    lengths: Vec<usize>,
    max_len: usize,
}

impl PatternTable {
    /// 注册两个视角下的全部棋型
    ///
    /// 分值大致按"距离获胜的远近"每级缩小 10 倍
    pub fn new() -> Self {
        let mut scores: HashMap<Vec<i8>, i64> = HashMap::new();

        for p in [-1i8, 1i8] {
            let q = -p;
            let s = p as i64;

            // 五连（胜利）
            scores.insert(vec![p; 5], WIN_SCORE * s);
            // 活四
            scores.insert(vec![0, p, p, p, p, 0], 100_000 * s);
            // 一加三
            scores.insert(vec![0, p, 0, p, p, p, 0], 50_000 * s);
            scores.insert(vec![0, p, p, p, 0, p, 0], 50_000 * s);
            // 二加二
            scores.insert(vec![0, p, p, 0, p, p, 0], 25_000 * s);
            // 冲四（单端被堵）
            scores.insert(vec![0, p, p, p, p, q], 10_000 * s);
            scores.insert(vec![q, p, p, p, p, 0], 10_000 * s);
            // 死四（两端被堵），浪费先手，小幅罚分
            scores.insert(vec![q, p, p, p, p, q], -1_000 * s);
            // 活三与单端被堵的三
            scores.insert(vec![0, p, p, p, 0], 1_000 * s);
            scores.insert(vec![q, p, p, p, 0], 1_000 * s);
            scores.insert(vec![0, p, p, p, q], 1_000 * s);
            // 跳二
            scores.insert(vec![0, p, 0, p, p, 0], 1_000 * s);
            scores.insert(vec![0, p, p, 0, p, 0], 1_000 * s);
            // 活二
            scores.insert(vec![0, 0, p, p, 0], 100 * s);
        }

        let mut lengths: Vec<usize> = scores.keys().map(|k| k.len()).collect();
        lengths.sort_unstable();
        lengths.dedup();
        let max_len = lengths.last().copied().unwrap_or(0);

        Self {
            scores,
            lengths,
            max_len,
        }
    }

    /// 精确匹配查询
    #[inline]
    pub fn score(&self, pattern: &[i8]) -> Option<i64> {
        self.scores.get(pattern).copied()
    }

    /// 检查某长度是否为已注册的棋型长度
    #[inline]
    pub fn has_length(&self, len: usize) -> bool {
        self.lengths.binary_search(&len).is_ok()
    }

    /// 已注册的棋型长度集合（升序）
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// 最长棋型长度
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::new()
    }
}
