//! 五子棋共享模型库
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 五连胜负判定
//! - Zobrist 哈希（增量更新）
//! - 错误类型定义

mod board;
mod constants;
mod error;
mod stone;
mod zobrist;

pub use board::Board;
pub use constants::*;
pub use error::{GomokuError, Result};
pub use stone::{Position, Stone};
pub use zobrist::ZobristTable;
