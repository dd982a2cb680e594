use super::constants::*;
use super::position::Position;
use super::types::Move;

// ==============================================================================
// --- 规则逻辑扩展块 (伪合法走法生成) ---
// ==============================================================================

impl Position {
    /// 生成当前走子方 (大写棋子) 的全部伪合法走法。
    ///
    /// 每次调用都从头重新扫描，起点按行优先顺序遍历，结果有限、确定且
    /// 可重复消费。除飞将规则外不过滤"送将"类走法。
    pub fn gen_moves(&self) -> impl Iterator<Item = Move> + '_ {
        (0..BOARD_CELLS).flat_map(move |i| self.moves_from(i))
    }

    /// 单个起点的走法。哨兵边界保证任何射线都停在缓冲区内。
    fn moves_from(&self, i: usize) -> Vec<Move> {
        let mut out = Vec::new();
        let p = self.cell(i);

        // 飞将：沿将帅所在列向上扫描，途中全空且尽头是对方将帅时可直取
        if p == b'K' {
            let mut scan = i as isize - GRID_WIDTH as isize;
            while scan > A9 as isize {
                let q = self.cell(scan as usize);
                if q == b'k' {
                    out.push((i, scan as usize));
                } else if q != b'.' {
                    break;
                }
                scan -= GRID_WIDTH as isize;
            }
        }

        if !p.is_ascii_uppercase() {
            return out;
        }

        // 炮/砲：无垫脚时沿射线走空位，恰有一个垫脚时可隔子吃敌方棋子
        if p == b'C' {
            for &d in &CANNON_DIRECTIONS {
                let mut cfoot = 0;
                let mut j = i as isize + d;
                loop {
                    let q = self.cell(j as usize);
                    if q.is_ascii_whitespace() {
                        break;
                    }
                    if cfoot == 0 && q == b'.' {
                        out.push((i, j as usize));
                    } else if cfoot == 0 {
                        cfoot += 1;
                    } else if cfoot == 1 && q.is_ascii_lowercase() {
                        out.push((i, j as usize));
                        break;
                    } else if cfoot == 1 && q.is_ascii_uppercase() {
                        break;
                    }
                    j += d;
                }
            }
            return out;
        }

        for &d in piece_directions(p) {
            let mut j = i as isize + d;
            loop {
                let q = self.cell(j as usize);
                // 越界或己方棋子
                if q.is_ascii_whitespace() || q.is_ascii_uppercase() {
                    break;
                }
                // 过河前的兵/卒不能横走
                if p == b'P' && (d == DIR_E || d == DIR_W) && i as isize > RIVER_BOUNDARY {
                    break;
                } else if (p == b'A' || p == b'K')
                    && (j < PALACE_TOP || (j & 15) > PALACE_RIGHT || (j & 15) < PALACE_LEFT)
                {
                    // 士/帅 不得离开九宫
                    break;
                } else if p == b'B' && j < RIVER_BOUNDARY {
                    // 相/象 不得过河
                    break;
                } else if p == b'N' {
                    // 蹩马脚：横向 2 格的跳受水平邻格阻挡，其余受纵向邻格阻挡
                    let n_diff_x = (j - i as isize).rem_euclid(GRID_WIDTH as isize);
                    if n_diff_x == 14 || n_diff_x == 2 {
                        let leg = if n_diff_x == 2 { i + 1 } else { i - 1 };
                        if self.cell(leg) != b'.' {
                            break;
                        }
                    } else if j > i as isize {
                        if self.cell(i + GRID_WIDTH) != b'.' {
                            break;
                        }
                    } else if self.cell(i - GRID_WIDTH) != b'.' {
                        break;
                    }
                } else if p == b'B' && self.cell((i as isize + d / 2) as usize) != b'.' {
                    // 相/象 田字中间有子则不能跳
                    break;
                }
                out.push((i, j as usize));
                // 步兵类棋子走一步即停；滑行棋子吃子后停
                if matches!(p, b'P' | b'N' | b'B' | b'A' | b'K') || q.is_ascii_lowercase() {
                    break;
                }
                j += d;
            }
        }
        out
    }
}
