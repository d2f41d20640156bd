//! 置换表
//!
//! 局面哈希到已计算分值的无界缓存，用于避免重复计算。
//! 条目从不淘汰（接受的内存代价）；整个搜索过程共享同一张表，
//! 并可在同一引擎实例的多次调用之间复用。

use std::collections::HashMap;

/// 置换表
///
/// 键为局面哈希，值为特定评估方视角下的分值。
/// 叶子静态评估与搜索子树分值共用同一张表（参照实现的行为）。
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, i64>,
    /// 命中次数
    hits: u64,
    /// 查询次数
    probes: u64,
}

impl TranspositionTable {
    /// 创建空表
    pub fn new() -> Self {
        Self::default()
    }

    /// 查询条目
    pub fn probe(&mut self, hash: u64) -> Option<i64> {
        self.probes += 1;
        let entry = self.entries.get(&hash).copied();
        if entry.is_some() {
            self.hits += 1;
        }
        entry
    }

    /// 存储条目（覆盖旧值）
    pub fn store(&mut self, hash: u64, score: i64) {
        self.entries.insert(hash, score);
    }

    /// 清空表与统计
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.probes = 0;
    }

    /// 条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 命中率
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new();
        tt.store(0x1234_5678_90AB_CDEF, 4200);

        assert_eq!(tt.probe(0x1234_5678_90AB_CDEF), Some(4200));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_probe_miss() {
        let mut tt = TranspositionTable::new();
        assert_eq!(tt.probe(0xDEAD_BEEF), None);
        assert_eq!(tt.hit_rate(), 0.0);
    }

    #[test]
    fn test_store_overwrites() {
        let mut tt = TranspositionTable::new();
        tt.store(1, 100);
        tt.store(1, -50);
        assert_eq!(tt.probe(1), Some(-50));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_hit_rate_and_clear() {
        let mut tt = TranspositionTable::new();
        tt.store(7, 1);
        let _ = tt.probe(7);
        let _ = tt.probe(8);
        assert!((tt.hit_rate() - 0.5).abs() < f64::EPSILON);

        tt.clear();
        assert!(tt.is_empty());
        assert_eq!(tt.hit_rate(), 0.0);
    }
}
