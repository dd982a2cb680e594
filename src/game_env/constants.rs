// ==============================================================================
// --- 常量定义 ---
// ==============================================================================

/// 含哨兵边界的超网格宽度 (16)
pub const GRID_WIDTH: usize = 16;
/// 超网格总格数 (256)
pub const BOARD_CELLS: usize = GRID_WIDTH * GRID_WIDTH;
/// 可下子区域行数 (10)
pub const BOARD_ROWS: usize = 10;
/// 可下子区域列数 (9)
pub const BOARD_COLS: usize = 9;
/// 可下子区域在超网格中的起始行/列 (四周各留 3 层哨兵，任何单步或多步
/// 射线都不会越出缓冲区)
pub const PLAYABLE_ROW_OFFSET: usize = 3;
pub const PLAYABLE_COL_OFFSET: usize = 3;

// --- 角点下标 (a0 为己方左下角，i9 为对方右上角) ---
pub const A0: usize = 12 * GRID_WIDTH + 3;
pub const I0: usize = 12 * GRID_WIDTH + 11;
pub const A9: usize = 3 * GRID_WIDTH + 3;
pub const I9: usize = 3 * GRID_WIDTH + 11;

/// 河界：线性下标大于该值即在己方半场 (兵未过河不能横走、相/象不可越过)
pub const RIVER_BOUNDARY: isize = 128;
/// 九宫前沿：目标下标小于该值即越出己方九宫
pub const PALACE_TOP: isize = 160;
/// 九宫左边线列号 (按 j & 15 取列)
pub const PALACE_LEFT: isize = 6;
/// 九宫右边线列号
pub const PALACE_RIGHT: isize = 8;

// --- 方向增量 (N 指向对方底线) ---
pub const DIR_N: isize = -(GRID_WIDTH as isize);
pub const DIR_E: isize = 1;
pub const DIR_S: isize = GRID_WIDTH as isize;
pub const DIR_W: isize = -1;

/// 兵/卒: 上、左、右
pub const SOLDIER_DIRECTIONS: [isize; 3] = [DIR_N, DIR_W, DIR_E];
/// 马/馬: 八个日字跳
pub const HORSE_DIRECTIONS: [isize; 8] = [
    DIR_N + DIR_N + DIR_E,
    DIR_E + DIR_N + DIR_E,
    DIR_E + DIR_S + DIR_E,
    DIR_S + DIR_S + DIR_E,
    DIR_S + DIR_S + DIR_W,
    DIR_W + DIR_S + DIR_W,
    DIR_W + DIR_N + DIR_W,
    DIR_N + DIR_N + DIR_W,
];
/// 相/象: 四个田字斜跳
pub const ELEPHANT_DIRECTIONS: [isize; 4] = [
    2 * (DIR_N + DIR_E),
    2 * (DIR_S + DIR_E),
    2 * (DIR_S + DIR_W),
    2 * (DIR_N + DIR_W),
];
/// 车/車: 四个正方向滑行
pub const CHARIOT_DIRECTIONS: [isize; 4] = [DIR_N, DIR_E, DIR_S, DIR_W];
/// 炮/砲: 四个正方向滑行 (隔子吃)
pub const CANNON_DIRECTIONS: [isize; 4] = [DIR_N, DIR_E, DIR_S, DIR_W];
/// 士/仕: 四个斜一步
pub const ADVISOR_DIRECTIONS: [isize; 4] = [
    DIR_N + DIR_E,
    DIR_S + DIR_E,
    DIR_S + DIR_W,
    DIR_N + DIR_W,
];
/// 帅/将: 四个正方向一步
pub const GENERAL_DIRECTIONS: [isize; 4] = [DIR_N, DIR_E, DIR_S, DIR_W];

/// 按棋子字符查方向表 (大写 = 当前走子方)
/// P: 兵/卒, N: 马/馬, B: 相/象, R: 车/車, A: 士/仕, C: 炮, K: 帅/将
pub fn piece_directions(piece: u8) -> &'static [isize] {
    match piece {
        b'P' => &SOLDIER_DIRECTIONS,
        b'N' => &HORSE_DIRECTIONS,
        b'B' => &ELEPHANT_DIRECTIONS,
        b'R' => &CHARIOT_DIRECTIONS,
        b'C' => &CANNON_DIRECTIONS,
        b'A' => &ADVISOR_DIRECTIONS,
        b'K' => &GENERAL_DIRECTIONS,
        _ => &[],
    }
}

// --- 动作空间定义 ---

/// 棋盘格数 (9 列 x 10 行)
pub const BOARD_SQUARES: usize = BOARD_COLS * BOARD_ROWS;
/// 走子动作空间: 任意格到任意格的笛卡尔积
pub const ACTION_SPACE_SIZE: usize = BOARD_SQUARES * BOARD_SQUARES;
/// 投降哨兵动作 (无坐标含义)
pub const RESIGN_ACTION: usize = ACTION_SPACE_SIZE;

// --- 回合常量 ---

/// 历史局面缓存窗口
pub const HISTORY_CACHE_STEPS: usize = 6;
/// 同一局面出现该次数即触发重复判负 (走帅/将除外)
pub const REPETITION_LOSS_COUNT: u32 = 3;

/// 观察张量通道数: 1 个棋盘编码通道 + 90 个动作掩码通道
pub const OBSERVATION_CHANNELS: usize = 1 + BOARD_SQUARES;

/// 标准开局布局 (大写为先行一方，每行 16 字符，含换行)
pub const INITIAL_BOARD: &str = concat!(
    "               \n",
    "               \n",
    "               \n",
    "   rnbakabnr   \n",
    "   .........   \n",
    "   .c.....c.   \n",
    "   p.p.p.p.p   \n",
    "   .........   \n",
    "   .........   \n",
    "   P.P.P.P.P   \n",
    "   .C.....C.   \n",
    "   .........   \n",
    "   RNBAKABNR   \n",
    "               \n",
    "               \n",
    "               \n",
);
