//! 棋盘常量定义

use crate::stone::Position;

/// 棋盘边长（列数 = 行数）
pub const BOARD_SIZE: usize = 15;

/// 棋盘格子总数
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// 获胜所需的连子数
pub const WIN_LENGTH: usize = 5;

/// 候选走法搜索半径（以最后一手为中心的方形窗口）
pub const SEARCH_RADIUS: i32 = 2;

/// 四个扫描方向：右、下、右下、左下
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// 棋盘中心点（开局第一手时作为"最后一手"的哨兵值）
pub const CENTER: Position =
    Position::new_unchecked((BOARD_SIZE / 2) as u8, (BOARD_SIZE / 2) as u8);
