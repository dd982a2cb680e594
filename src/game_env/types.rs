use ndarray::Array3;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::position::Position;

// ==============================================================================
// --- 基础数据结构 ---
// ==============================================================================

/// 走法：起点与终点在 256 格缓冲区中的线性下标。
/// 只相对于生成它的那个局面有意义。
pub type Move = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red = 1,
    Black = -1,
}

impl Player {
    pub fn opposite(&self) -> Self {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    pub fn val(&self) -> i32 {
        *self as i32
    }

    pub fn idx(&self) -> usize {
        match self {
            Player::Red => 0,
            Player::Black => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "红方(Red)"),
            Player::Black => write!(f, "黑方(Black)"),
        }
    }
}

/// 终局原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminationReason {
    /// 吃掉对方帅/将获胜
    WinByCapture,
    /// 同一局面第三次出现判负 (走帅/将除外)
    LossByRepetition,
    /// 投降判负
    LossByResignation,
}

/// 对局状态机
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Terminated(TerminationReason),
}

/// 每步附带的信息
#[derive(Debug, Clone)]
pub struct StepInfo {
    /// 最近的历史局面 (最多保留 6 个)
    pub history: Vec<Position>,
    /// 本步走法的位置价值增量，仅供参考，不影响合法性
    pub value: i32,
    pub is_red_player: bool,
    pub is_black_player: bool,
}

/// 观察空间数据结构 (Neural Network Input)
#[derive(Debug, Clone)]
pub struct Observation {
    /// 棋盘特征张量: (Channels, H, W) = (91, 10, 9)
    /// 第 0 通道为棋盘编码，其余 90 通道为按起点格展开的动作掩码
    pub board: Array3<f32>,
}
