//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_CELLS, BOARD_SIZE, DIRECTIONS, WIN_LENGTH};
use crate::error::{GomokuError, Result};
use crate::stone::{Position, Stone};
use crate::zobrist::ZobristTable;

/// 棋盘
///
/// 15x15 格子，索引为 y * 15 + x；落子和悔子时哈希增量更新。
/// 搜索期间棋盘被原地修改并恢复，不做按层复制。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 格子状态，使用 Vec 以支持 serde
    cells: Vec<Option<Stone>>,
    /// 增量维护的 Zobrist 哈希，等于所有已占格子键的异或
    hash: u64,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: vec![None; BOARD_CELLS],
            hash: 0,
        }
    }

    /// 获取指定位置的棋子
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Stone> {
        if pos.is_valid() {
            self.cells[pos.to_index()]
        } else {
            None
        }
    }

    /// 检查指定位置是否为空格
    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        pos.is_valid() && self.cells[pos.to_index()].is_none()
    }

    /// 落子（要求目标格为空，搜索内部使用）
    ///
    /// 外部调用方应使用 [`Board::try_place`]
    pub fn place(&mut self, pos: Position, stone: Stone) {
        debug_assert!(self.is_empty_at(pos), "place on non-empty cell {pos}");
        self.cells[pos.to_index()] = Some(stone);
        self.hash ^= ZobristTable::shared().key(stone, pos);
    }

    /// 落子（检查边界与占用）
    pub fn try_place(&mut self, pos: Position, stone: Stone) -> Result<()> {
        if !pos.is_valid() {
            return Err(GomokuError::InvalidPosition { x: pos.x, y: pos.y });
        }
        if self.cells[pos.to_index()].is_some() {
            return Err(GomokuError::CellOccupied { x: pos.x, y: pos.y });
        }
        self.place(pos, stone);
        Ok(())
    }

    /// 撤销指定位置的落子
    ///
    /// 使用格子上当前的颜色选择哈希键，因此只能用于撤销该格
    /// 最近一次 `place`，不是完整的悔棋历史。
    pub fn undo(&mut self, pos: Position) {
        debug_assert!(pos.is_valid());
        if let Some(stone) = self.cells[pos.to_index()].take() {
            self.hash ^= ZobristTable::shared().key(stone, pos);
        }
    }

    /// 当前局面的 Zobrist 哈希
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// 已落子数
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// 遍历所有已落子的格子
    pub fn stones(&self) -> impl Iterator<Item = (Position, Stone)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|stone| {
                let pos = Position::new_unchecked(
                    (i % BOARD_SIZE) as u8,
                    (i / BOARD_SIZE) as u8,
                );
                (pos, stone)
            })
        })
    }

    /// 带边界检查的格子读取
    #[inline]
    fn at(&self, x: i32, y: i32) -> Option<Stone> {
        let size = BOARD_SIZE as i32;
        if x < 0 || y < 0 || x >= size || y >= size {
            None
        } else {
            self.cells[y as usize * BOARD_SIZE + x as usize]
        }
    }

    /// 判定胜者
    ///
    /// 扫描每个非空格子的四个方向，向外最多数五格，
    /// 遇到不同色或出界立即停止；数满五连即为胜者。
    pub fn winner(&self) -> Option<Stone> {
        let size = BOARD_SIZE as i32;
        for y in 0..size {
            for x in 0..size {
                let Some(stone) = self.at(x, y) else {
                    continue;
                };
                for (dx, dy) in DIRECTIONS {
                    let mut count = 0;
                    for i in 0..WIN_LENGTH as i32 {
                        if self.at(x + i * dx, y + i * dy) == Some(stone) {
                            count += 1;
                        } else {
                            break;
                        }
                    }
                    if count == WIN_LENGTH {
                        return Some(stone);
                    }
                }
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_row(board: &mut Board, x0: u8, y: u8, len: u8, stone: Stone) {
        for i in 0..len {
            board.place(Position::new_unchecked(x0 + i, y), stone);
        }
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::empty();
        assert_eq!(board.winner(), None);
        assert_eq!(board.hash(), 0);
        assert_eq!(board.stone_count(), 0);
    }

    #[test]
    fn test_four_in_a_row_is_not_a_win() {
        let mut board = Board::empty();
        place_row(&mut board, 3, 7, 4, Stone::Black);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_five_in_a_row_horizontal() {
        let mut board = Board::empty();
        place_row(&mut board, 3, 7, 5, Stone::Black);
        assert_eq!(board.winner(), Some(Stone::Black));
    }

    #[test]
    fn test_five_in_a_row_vertical() {
        let mut board = Board::empty();
        for i in 0..5 {
            board.place(Position::new_unchecked(2, 4 + i), Stone::White);
        }
        assert_eq!(board.winner(), Some(Stone::White));
    }

    #[test]
    fn test_five_in_a_row_diagonals() {
        // 右下方向
        let mut board = Board::empty();
        for i in 0..5 {
            board.place(Position::new_unchecked(1 + i, 1 + i), Stone::Black);
        }
        assert_eq!(board.winner(), Some(Stone::Black));

        // 左下方向
        let mut board = Board::empty();
        for i in 0..5 {
            board.place(Position::new_unchecked(10 - i, 2 + i), Stone::White);
        }
        assert_eq!(board.winner(), Some(Stone::White));
    }

    #[test]
    fn test_no_wrap_around_win() {
        // 行尾三连接行首两连不构成五连
        let mut board = Board::empty();
        place_row(&mut board, 12, 4, 3, Stone::Black);
        place_row(&mut board, 0, 5, 2, Stone::Black);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_interrupted_run_is_not_a_win() {
        let mut board = Board::empty();
        place_row(&mut board, 3, 7, 2, Stone::Black);
        board.place(Position::new_unchecked(5, 7), Stone::White);
        place_row(&mut board, 6, 7, 3, Stone::Black);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_hash_is_order_independent() {
        let a = Position::new_unchecked(3, 3);
        let b = Position::new_unchecked(9, 6);

        let mut board1 = Board::empty();
        board1.place(a, Stone::White);
        board1.place(b, Stone::Black);

        let mut board2 = Board::empty();
        board2.place(b, Stone::Black);
        board2.place(a, Stone::White);

        assert_eq!(board1.hash(), board2.hash(), "同一局面的哈希应与落子顺序无关");
        assert_eq!(board1, board2);
    }

    #[test]
    fn test_hash_depends_on_color() {
        let pos = Position::new_unchecked(7, 7);

        let mut white = Board::empty();
        white.place(pos, Stone::White);

        let mut black = Board::empty();
        black.place(pos, Stone::Black);

        assert_ne!(white.hash(), black.hash());
    }

    #[test]
    fn test_undo_is_exact_inverse_of_place() {
        let mut board = Board::empty();
        board.place(Position::new_unchecked(4, 4), Stone::White);
        let hash_before = board.hash();

        let pos = Position::new_unchecked(8, 2);
        board.place(pos, Stone::Black);
        assert_ne!(board.hash(), hash_before);

        board.undo(pos);
        assert_eq!(board.hash(), hash_before);
        assert_eq!(board.get(pos), None);
        assert_eq!(board.stone_count(), 1);
    }

    #[test]
    fn test_try_place_rejects_occupied_cell() {
        let mut board = Board::empty();
        let pos = Position::new_unchecked(5, 5);
        assert_eq!(board.try_place(pos, Stone::White), Ok(()));
        assert_eq!(
            board.try_place(pos, Stone::Black),
            Err(GomokuError::CellOccupied { x: 5, y: 5 })
        );
        // 失败的落子不应污染哈希
        let hash = board.hash();
        let _ = board.try_place(pos, Stone::Black);
        assert_eq!(board.hash(), hash);
    }

    #[test]
    fn test_stones_iterates_occupied_cells() {
        let mut board = Board::empty();
        board.place(Position::new_unchecked(1, 0), Stone::White);
        board.place(Position::new_unchecked(0, 1), Stone::Black);

        let stones: Vec<_> = board.stones().collect();
        assert_eq!(
            stones,
            vec![
                (Position::new_unchecked(1, 0), Stone::White),
                (Position::new_unchecked(0, 1), Stone::Black),
            ]
        );
    }
}
