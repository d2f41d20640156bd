//! Zobrist 哈希
//!
//! 用于快速计算棋局的哈希值，支持增量更新

use std::sync::OnceLock;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::constants::BOARD_CELLS;
use crate::stone::{Position, Stone};

/// Zobrist 哈希表
///
/// 使用随机数为每个位置的每个槽位生成唯一的哈希键
pub struct ZobristTable {
    /// 哈希键 [slot][position]
    /// slot: 绝对颜色（0=White, 1=Black）或相对角色（0=评估方, 1=对方）
    /// position: 0-224 对应 225 个格子
    keys: [[u64; BOARD_CELLS]; 2],
}

impl ZobristTable {
    /// 创建新的 Zobrist 表（使用固定种子保证确定性）
    pub fn new() -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(0x476F_6D6F_6B75_3135);

        let mut keys = [[0u64; BOARD_CELLS]; 2];
        for slot in keys.iter_mut() {
            for key in slot.iter_mut() {
                *key = rng.gen();
            }
        }

        Self { keys }
    }

    /// 获取进程内共享的表
    pub fn shared() -> &'static ZobristTable {
        static TABLE: OnceLock<ZobristTable> = OnceLock::new();
        TABLE.get_or_init(ZobristTable::new)
    }

    /// 获取棋子的绝对颜色哈希键（用于棋盘增量哈希）
    #[inline]
    pub fn key(&self, stone: Stone, pos: Position) -> u64 {
        self.keys[stone.index()][pos.to_index()]
    }

    /// 获取相对角色哈希键（槽位 0 = 评估方，槽位 1 = 对方）
    ///
    /// 同一形状无论评估方执哪种颜色都映射到同一个键
    #[inline]
    pub fn relative_key(&self, is_mover: bool, pos: Position) -> u64 {
        let slot = if is_mover { 0 } else { 1 };
        self.keys[slot][pos.to_index()]
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
