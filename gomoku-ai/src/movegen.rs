//! 候选走法生成
//!
//! 只考虑最后一手周围半径 2 方形窗口内的空格——搜索从不离开
//! 已有棋子的邻域，这是让 15x15 全盘搜索可行的关键剪枝手段。
//! 候选按轻量启发分值降序返回，显著提高 Alpha-Beta 截断率。

use gomoku_core::{Board, Position, Stone, BOARD_SIZE, DIRECTIONS, SEARCH_RADIUS};

/// 带启发分值的候选走法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub pos: Position,
    pub score: i64,
}

/// 生成最后一手周围的候选走法，按启发分值降序排列
///
/// 窗口与棋盘边界裁剪后若没有空格则返回空列表，
/// 调用方应将其视为"局部无子可落"。
pub fn candidates(board: &Board, last_move: Position, side: Stone) -> Vec<ScoredMove> {
    let size = BOARD_SIZE as i32;
    let lx = last_move.x as i32;
    let ly = last_move.y as i32;

    let mut moves = Vec::new();
    for y in (ly - SEARCH_RADIUS).max(0)..(ly + SEARCH_RADIUS + 1).min(size) {
        for x in (lx - SEARCH_RADIUS).max(0)..(lx + SEARCH_RADIUS + 1).min(size) {
            let pos = Position::new_unchecked(x as u8, y as u8);
            if board.is_empty_at(pos) {
                moves.push(ScoredMove {
                    pos,
                    score: position_score(board, pos, side),
                });
            }
        }
    }

    // 稳定排序：同分候选保持窗口扫描顺序
    moves.sort_by(|a, b| b.score.cmp(&a.score));
    moves
}

/// 走法位置的轻量启发分值
///
/// 四个方向各向外看 4 步：己方棋子 +2、对方棋子 +1（兼顾延伸与封堵）、
/// 遇到空格停止该方向、出界每步 -1。
fn position_score(board: &Board, pos: Position, side: Stone) -> i64 {
    let size = BOARD_SIZE as i32;
    let mut score = 0i64;

    for (dx, dy) in DIRECTIONS {
        for i in 1..=4 {
            let nx = pos.x as i32 + dx * i;
            let ny = pos.y as i32 + dy * i;
            if nx < 0 || ny < 0 || nx >= size || ny >= size {
                score -= 1;
                continue;
            }
            match board.get(Position::new_unchecked(nx as u8, ny as u8)) {
                Some(stone) if stone == side => score += 2,
                Some(_) => score += 1,
                None => break,
            }
        }
    }
    score
}
