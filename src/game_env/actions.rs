use super::constants::*;

// ==============================================================================
// --- 动作编解码 (动作编号 <-> 走法串 <-> 缓冲区下标) ---
// ==============================================================================
//
// 走法串形如 "b2e2"：列字母 a..i 自左向右，行数字 0..9 自己方底线向上。
// 动作编号 = 起点格 * 90 + 终点格，其中 格 = 列 + 9 * 行；
// 8100 保留给投降哨兵，没有坐标分解。

/// 解码后的动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedAction {
    /// 投降哨兵
    Resign,
    /// 普通走法的坐标串 (形如 "b2e2")
    Move(String),
}

/// 动作是否为投降哨兵
pub fn is_resign(action: usize) -> bool {
    action == RESIGN_ACTION
}

/// 字符坐标 (如 "e2") -> 256 格缓冲区下标
pub fn str_to_cord(s: &str) -> usize {
    let b = s.as_bytes();
    let fil = (b[0] - b'a') as usize;
    let rank = (b[1] - b'0') as usize;
    A0 + fil - GRID_WIDTH * rank
}

/// 256 格缓冲区下标 -> 字符坐标
pub fn cord_to_str(i: usize) -> String {
    let offset = i as isize - A0 as isize;
    let rank = offset.div_euclid(GRID_WIDTH as isize);
    let fil = offset.rem_euclid(GRID_WIDTH as isize);
    format!("{}{}", (b'a' + fil as u8) as char, -rank)
}

/// 字符坐标 -> 90 格动作格号
fn str_to_square(b: &[u8]) -> Option<usize> {
    if !(b'a'..=b'i').contains(&b[0]) || !b[1].is_ascii_digit() {
        return None;
    }
    let fil = (b[0] - b'a') as usize;
    let rank = (b[1] - b'0') as usize;
    Some(fil + BOARD_COLS * rank)
}

/// 90 格动作格号 -> 字符坐标
fn square_to_str(sq: usize) -> String {
    let (rank, fil) = (sq / BOARD_COLS, sq % BOARD_COLS);
    format!("{}{}", (b'a' + fil as u8) as char, rank)
}

/// 把走法串编码为动作编号；"resign" 编码为投降哨兵。
/// 不符合两坐标文法的输入返回格式错误。
pub fn move_to_action(mv: &str) -> Result<usize, String> {
    if mv == "resign" {
        return Ok(RESIGN_ACTION);
    }
    let b = mv.as_bytes();
    if b.len() != 4 {
        return Err(format!("走法格式不正确: {}", mv));
    }
    let from = str_to_square(&b[0..2]).ok_or_else(|| format!("走法格式不正确: {}", mv))?;
    let to = str_to_square(&b[2..4]).ok_or_else(|| format!("走法格式不正确: {}", mv))?;
    Ok(from * BOARD_SQUARES + to)
}

/// 把动作编号解码为走法串或投降哨兵。
/// 超出 [0, 8100] 的编号返回格式错误。
pub fn action_to_move(action: usize) -> Result<DecodedAction, String> {
    if action == RESIGN_ACTION {
        return Ok(DecodedAction::Resign);
    }
    if action > RESIGN_ACTION {
        return Err(format!("动作编号超出范围: {}", action));
    }
    let (from, to) = (action / BOARD_SQUARES, action % BOARD_SQUARES);
    Ok(DecodedAction::Move(format!(
        "{}{}",
        square_to_str(from),
        square_to_str(to)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_env::position::Position;

    #[test]
    fn test_cord_str_round_trip() {
        assert_eq!(str_to_cord("a0"), A0);
        assert_eq!(str_to_cord("i0"), I0);
        assert_eq!(str_to_cord("a9"), A9);
        assert_eq!(str_to_cord("i9"), I9);
        for rank in 0..BOARD_ROWS {
            for fil in 0..BOARD_COLS {
                let s = format!("{}{}", (b'a' + fil as u8) as char, rank);
                assert_eq!(cord_to_str(str_to_cord(&s)), s);
            }
        }
    }

    #[test]
    fn test_action_round_trip_over_generated_moves() {
        let pos = Position::initial();
        for (i, j) in pos.gen_moves() {
            let mv = format!("{}{}", cord_to_str(i), cord_to_str(j));
            let action = move_to_action(&mv).unwrap();
            assert!(action < ACTION_SPACE_SIZE);
            assert_eq!(action_to_move(action).unwrap(), DecodedAction::Move(mv));
        }
    }

    #[test]
    fn test_resign_sentinel() {
        assert_eq!(move_to_action("resign").unwrap(), RESIGN_ACTION);
        assert_eq!(action_to_move(RESIGN_ACTION).unwrap(), DecodedAction::Resign);
        assert!(is_resign(RESIGN_ACTION));
        assert!(!is_resign(0));
    }

    #[test]
    fn test_format_errors() {
        assert!(move_to_action("").is_err());
        assert!(move_to_action("e2").is_err());
        assert!(move_to_action("e2e").is_err());
        assert!(move_to_action("j0a0").is_err());
        assert!(move_to_action("a0axb1").is_err());
        assert!(action_to_move(RESIGN_ACTION + 1).is_err());
    }

    #[test]
    fn test_known_encodings() {
        // a0 -> 格 0, i9 -> 格 89
        assert_eq!(move_to_action("a0i9").unwrap(), 89);
        assert_eq!(move_to_action("i9a0").unwrap(), 89 * 90);
        assert_eq!(
            action_to_move(0).unwrap(),
            DecodedAction::Move("a0a0".to_string())
        );
    }
}
