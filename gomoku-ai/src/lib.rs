//! 五子棋 AI 引擎
//!
//! 包含:
//! - 棋型评分表
//! - 全盘静态评估（带缓存）
//! - 候选走法生成与排序
//! - Minimax + Alpha-Beta 搜索（带时间预算）
//! - 置换表

mod evaluate;
mod movegen;
mod pattern;
mod search;
mod transposition;

pub use evaluate::Evaluator;
pub use movegen::{candidates, ScoredMove};
pub use pattern::{PatternTable, INFINITY, WIN_SCORE};
pub use search::{Engine, EngineConfig};
pub use transposition::TranspositionTable;
