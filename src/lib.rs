//! # Xiangqi 9x10 - 中国象棋游戏库
//!
//! 这是一个用于强化学习的中国象棋 (Xiangqi) 规则引擎与回合环境实现。
//!
//! ## 模块
//! - `game_env`: 核心游戏逻辑和环境实现
//!
//! ## 使用示例
//! ```rust
//! use xiangqi_9x10::CnChessEnv;
//!
//! let mut env = CnChessEnv::new();
//! let (obs, info) = env.reset();
//! // 进行游戏...
//! ```

pub mod game_env;

// 重新导出核心类型，方便外部使用
pub use game_env::{
    CnChessEnv,
    DecodedAction,
    GameState,
    Move,
    Observation,
    Player,
    Position,
    StepInfo,
    TerminationReason,
};

// 导出常量
pub use game_env::{
    ACTION_SPACE_SIZE,
    BOARD_CELLS,
    BOARD_COLS,
    BOARD_ROWS,
    BOARD_SQUARES,
    HISTORY_CACHE_STEPS,
    RESIGN_ACTION,
};

// 导出动作编解码函数
pub use game_env::{action_to_move, cord_to_str, is_resign, move_to_action, str_to_cord};
