use ndarray::Array2;
use std::fmt;

use super::constants::*;
use super::types::Move;

// ==============================================================================
// --- 局面值类型 (Position) ---
// ==============================================================================

/// 不可变局面：以 256 字节的超网格缓冲区表示棋盘。
///
/// 可下子的 9x10 子矩形位于第 3..=12 行、第 3..=11 列，四周由空格/换行
/// 哨兵包围。大写棋子始终表示当前走子方。结构相等与哈希覆盖整个缓冲区，
/// 局面因此可以直接作为重复计数的键。所有变换都返回新的 Position。
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: [u8; BOARD_CELLS],
}

impl Position {
    /// 从布局编码构造局面：行以换行分隔，`.` 为空位，空格为哨兵，
    /// 大写为当前走子方。编码必须恰好为 256 个 ASCII 字符。
    pub fn new(board_str: &str) -> Self {
        let bytes = board_str.as_bytes();
        assert_eq!(bytes.len(), BOARD_CELLS, "布局编码必须为 256 字符");
        let mut board = [0u8; BOARD_CELLS];
        board.copy_from_slice(bytes);
        Self { board }
    }

    /// 标准开局局面
    pub fn initial() -> Self {
        Self::new(INITIAL_BOARD)
    }

    /// 缓冲区只读视图
    pub fn board(&self) -> &[u8; BOARD_CELLS] {
        &self.board
    }

    /// 读取指定下标的格子内容
    #[inline]
    pub fn cell(&self, i: usize) -> u8 {
        self.board[i]
    }

    /// 布局字符串 (渲染方只读取这一表示，经 rotate 后仍满足同一编码约定)
    pub fn layout(&self) -> String {
        String::from_utf8_lossy(&self.board).into_owned()
    }

    /// 旋转 180 度并交换大小写，使新的走子方以大写呈现。
    /// 反转前 255 个字节，末字节固定为空格垫位。
    pub fn rotate(&self) -> Self {
        let mut board = [0u8; BOARD_CELLS];
        for k in 0..BOARD_CELLS - 1 {
            board[k] = swap_case(self.board[BOARD_CELLS - 2 - k]);
        }
        board[BOARD_CELLS - 1] = b' ';
        Self { board }
    }

    /// 执行走法并返回旋转后的新局面。
    /// 不校验走法来源，调用方只能传入生成器产出的走法。
    pub fn apply_move(&self, mv: Move) -> Self {
        let (i, j) = mv;
        let mut board = self.board;
        board[j] = board[i];
        board[i] = b'.';
        Self { board }.rotate()
    }

    /// 当前走子方是否还有帅/将
    pub fn player_has_king(&self) -> bool {
        self.board.contains(&b'K')
    }

    /// 对方是否还有帅/将
    pub fn oppo_has_king(&self) -> bool {
        self.board.contains(&b'k')
    }

    /// 可下子区域的棋子编码平面: (10, 9)，
    /// 红方 1..7 (车马相仕帅兵炮)，黑方取负，空位为 0
    pub fn to_plane(&self) -> Array2<f32> {
        let mut plane = Array2::zeros((BOARD_ROWS, BOARD_COLS));
        for r in 0..BOARD_ROWS {
            for c in 0..BOARD_COLS {
                let i = (PLAYABLE_ROW_OFFSET + r) * GRID_WIDTH + PLAYABLE_COL_OFFSET + c;
                plane[[r, c]] = piece_code(self.board[i]) as f32;
            }
        }
        plane
    }
}

fn swap_case(c: u8) -> u8 {
    if c.is_ascii_uppercase() {
        c.to_ascii_lowercase()
    } else if c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

fn piece_code(c: u8) -> i8 {
    match c {
        b'R' => 1,
        b'N' => 2,
        b'B' => 3,
        b'A' => 4,
        b'K' => 5,
        b'P' => 6,
        b'C' => 7,
        b'r' => -1,
        b'n' => -2,
        b'b' => -3,
        b'a' => -4,
        b'k' => -5,
        b'p' => -6,
        b'c' => -7,
        _ => 0,
    }
}

fn piece_glyph(c: u8) -> &'static str {
    match c {
        b'R' => "车",
        b'N' => "马",
        b'B' => "相",
        b'A' => "仕",
        b'K' => "帅",
        b'P' => "兵",
        b'C' => "炮",
        b'r' => "俥",
        b'n' => "傌",
        b'b' => "象",
        b'a' => "士",
        b'k' => "将",
        b'p' => "卒",
        b'c' => "砲",
        _ => "．",
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for r in 0..BOARD_ROWS {
            write!(f, " {}", BOARD_ROWS - 1 - r)?;
            for c in 0..BOARD_COLS {
                let i = (PLAYABLE_ROW_OFFSET + r) * GRID_WIDTH + PLAYABLE_COL_OFFSET + c;
                write!(f, "{}", piece_glyph(self.board[i]))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  ａｂｃｄｅｆｇｈｉ")
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({:?})", self.layout())
    }
}

/// 把 10 行可下子区域文本框进 256 字符的哨兵网格 (测试用)
#[cfg(test)]
pub(crate) fn framed_board(rows: [&str; 10]) -> String {
    let pad = "               \n";
    let mut out = String::with_capacity(BOARD_CELLS);
    for _ in 0..PLAYABLE_ROW_OFFSET {
        out.push_str(pad);
    }
    for row in rows {
        assert_eq!(row.len(), BOARD_COLS);
        out.push_str("   ");
        out.push_str(row);
        out.push_str("   \n");
    }
    for _ in 0..PLAYABLE_ROW_OFFSET {
        out.push_str(pad);
    }
    out
}
