//! 错误类型定义

use thiserror::Error;

/// 五子棋规则错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GomokuError {
    /// 无效的位置
    #[error("Invalid position: ({x}, {y})")]
    InvalidPosition { x: u8, y: u8 },

    /// 目标格子已有棋子
    #[error("Cell already occupied: ({x}, {y})")]
    CellOccupied { x: u8, y: u8 },
}

/// 操作结果类型
pub type Result<T> = std::result::Result<T, GomokuError>;
