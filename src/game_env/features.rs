use ndarray::Array3;

use super::board::CnChessEnv;
use super::constants::*;
use super::types::Observation;

// ==============================================================================
// --- 特征提取扩展块 (Neural Network Input) ---
// ==============================================================================

impl CnChessEnv {
    /// 组装观察张量: (91, 10, 9)。
    ///
    /// 第 0 通道是可下子区域的棋子编码平面 (行序翻转，使己方底线在前)；
    /// 其余 90 个通道是展平的 8100 维动作掩码按 (起点格, 终点行, 终点列)
    /// 重排的结果。投降哨兵没有掩码位。
    pub fn generate_observation(&self) -> Observation {
        let plane = self.current_position().to_plane();
        let masks = self.action_masks();

        let mut data = Vec::with_capacity(OBSERVATION_CHANNELS * BOARD_ROWS * BOARD_COLS);
        for r in (0..BOARD_ROWS).rev() {
            for c in 0..BOARD_COLS {
                data.push(plane[[r, c]]);
            }
        }
        data.extend(masks.iter().map(|&m| m as f32));

        let board = Array3::from_shape_vec((OBSERVATION_CHANNELS, BOARD_ROWS, BOARD_COLS), data)
            .expect("观察张量形状不匹配");
        Observation { board }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_env::actions::move_to_action;

    #[test]
    fn test_observation_shape_and_bounds() {
        let env = CnChessEnv::new();
        let obs = env.generate_observation();
        assert_eq!(obs.board.dim(), (OBSERVATION_CHANNELS, BOARD_ROWS, BOARD_COLS));
        for &v in obs.board.iter() {
            assert!((-7.0..=7.0).contains(&v));
        }
    }

    #[test]
    fn test_board_plane_is_flipped() {
        let env = CnChessEnv::new();
        let obs = env.generate_observation();
        // 翻转后第 0 行是己方底线: 车马相仕帅...
        assert_eq!(obs.board[[0, 0, 0]], 1.0);
        assert_eq!(obs.board[[0, 0, 4]], 5.0);
        assert_eq!(obs.board[[0, 9, 0]], -1.0);
    }

    #[test]
    fn test_mask_channels_mirror_legal_actions() {
        let env = CnChessEnv::new();
        let obs = env.generate_observation();
        let mask_cell = |action: usize| {
            let (channel, dest) = (action / BOARD_SQUARES, action % BOARD_SQUARES);
            obs.board[[1 + channel, dest / BOARD_COLS, dest % BOARD_COLS]]
        };
        assert_eq!(mask_cell(move_to_action("e3e4").unwrap()), 1.0);
        assert_eq!(mask_cell(move_to_action("e4e5").unwrap()), 0.0);
        let total: f32 = obs
            .board
            .slice(ndarray::s![1.., .., ..])
            .iter()
            .sum();
        assert_eq!(total, 44.0);
    }
}
