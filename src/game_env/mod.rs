// ==============================================================================
// --- 模块声明 ---
// ==============================================================================

pub mod actions;
pub mod board;
pub mod constants;
pub mod features;
pub mod position;
pub mod rules;
pub mod types;
pub mod value;

// ==============================================================================
// --- 公共 API 重导出 ---
// ==============================================================================

// 从 constants.rs 导出所有常量
pub use constants::*;

// 从 types.rs 导出所有数据类型
pub use types::{GameState, Move, Observation, Player, StepInfo, TerminationReason};

// 从 position.rs 导出局面值类型
pub use position::Position;

// 从 board.rs 导出主要的环境结构体
pub use board::CnChessEnv;

// 从 actions.rs 导出动作编解码函数
pub use actions::{
    action_to_move, cord_to_str, is_resign, move_to_action, str_to_cord, DecodedAction,
};

// 从 value.rs 导出估值函数
pub use value::{get_move_value, piece_base_value, pst};
