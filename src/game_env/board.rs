use std::collections::HashMap;

use super::actions::{action_to_move, cord_to_str, move_to_action, str_to_cord, DecodedAction};
use super::constants::*;
use super::position::Position;
use super::types::{GameState, Observation, Player, StepInfo, TerminationReason};
use super::value::get_move_value;

// ==============================================================================
// --- 环境结构体 (CnChessEnv) ---
// ==============================================================================

/// 中国象棋回合状态机。
///
/// 规则核心 (走法生成、局面变换) 全部在不可变的 Position 上，这里只持有
/// 回合簿记：当前局面、历史窗口、重复计数、投降标志与终局状态。
pub struct CnChessEnv {
    // --- 游戏核心状态 ---
    /// 当前局面 (大写始终为走子方)
    pos: Position,
    /// 最近 6 个历史局面
    his: Vec<Position>,
    /// 局面出现次数 (重复判负规则)，以局面结构本身为键
    board_count: HashMap<Position, u32>,

    // --- 回合簿记 ---
    /// 当前玩家，红方先行 (仅指示性：缓冲区编码本身始终以大写呈现走子方)
    current_player: Player,
    /// 双方投降标志，一经置位不再清除
    resigned: [bool; 2],
    /// 对局状态机
    state: GameState,
}

impl CnChessEnv {
    pub fn new() -> Self {
        let mut env = Self {
            pos: Position::initial(),
            his: Vec::new(),
            board_count: HashMap::new(),
            current_player: Player::Red,
            resigned: [false, false],
            state: GameState::InProgress,
        };
        env.reset();
        env
    }

    /// 回到标准开局：历史只含初始局面，重复计数清空，红方先行
    pub fn reset(&mut self) -> (Observation, StepInfo) {
        self.pos = Position::initial();
        self.his = vec![self.pos];
        self.board_count = HashMap::new();
        self.current_player = Player::Red;
        self.resigned = [false, false];
        self.state = GameState::InProgress;
        (self.generate_observation(), self.generate_info(0))
    }

    /// 用给定局面重建回合基线 (场景验证与测试用)
    pub fn set_position(&mut self, pos: Position) {
        self.pos = pos;
        self.his = vec![pos];
        self.board_count = HashMap::new();
        self.current_player = Player::Red;
        self.resigned = [false, false];
        self.state = GameState::InProgress;
    }

    // --- 核心 Step 逻辑 ---

    /// 执行一步动作。
    ///
    /// 投降哨兵在合法集检查之前处理 (合法集由生成器导出，从不包含 8100)；
    /// 普通走法必须属于当前合法动作集，否则返回错误。重复投降与在己方
    /// 帅/将已被吃的局面上走子属于契约违反，直接 panic。
    pub fn step(
        &mut self,
        action: usize,
    ) -> Result<(Observation, f32, bool, bool, StepInfo), String> {
        match action_to_move(action)? {
            DecodedAction::Resign => {
                let idx = self.current_player.idx();
                assert!(!self.resigned[idx], "玩家 {} 重复投降", self.current_player);
                self.resigned[idx] = true;
                self.state = GameState::Terminated(TerminationReason::LossByResignation);
                let info = self.generate_info(0);
                Ok((self.generate_observation(), -1.0, true, false, info))
            }
            DecodedAction::Move(move_str) => {
                if !self.possible_actions().contains(&action) {
                    return Err(format!("无效动作: {}", action));
                }
                assert!(self.pos.player_has_king(), "当前走子方已无帅/将");

                let (from_str, to_str) = move_str.split_at(2);
                let mv = (str_to_cord(from_str), str_to_cord(to_str));

                // 估值增量与起点棋子都要在走子之前读取：
                // 重复判负的豁免检查针对的是走之前占据起点的棋子
                let value_diff = get_move_value(self.pos.board(), mv);
                let move_piece = self.pos.cell(mv.0);

                self.pos = self.pos.apply_move(mv);
                self.his.push(self.pos);
                if self.his.len() > HISTORY_CACHE_STEPS {
                    let overflow = self.his.len() - HISTORY_CACHE_STEPS;
                    self.his.drain(..overflow);
                }
                let count = {
                    let entry = self.board_count.entry(self.pos).or_insert(0);
                    *entry += 1;
                    *entry
                };

                let mut reward = 0.0;
                let terminated;
                if count >= REPETITION_LOSS_COUNT && move_piece != b'K' {
                    // 同一局面第三次出现且走的不是帅/将：走子方判负
                    terminated = true;
                    reward = -1.0;
                    self.state = GameState::Terminated(TerminationReason::LossByRepetition);
                } else if count >= REPETITION_LOSS_COUNT {
                    terminated = false;
                } else if !self.pos.player_has_king() {
                    // 局面已经旋转过，这里缺少大写帅/将意味着
                    // 刚才那步吃掉了对方的帅/将
                    terminated = true;
                    reward = 1.0;
                    self.state = GameState::Terminated(TerminationReason::WinByCapture);
                } else {
                    terminated = false;
                }
                self.current_player = self.current_player.opposite();

                let info = self.generate_info(value_diff);
                Ok((self.generate_observation(), reward, terminated, false, info))
            }
        }
    }

    // --- 合法动作集 ---

    /// 当前走子方的全部伪合法走法串。
    /// 帅/将已被吃或本方已投降时强制为空。
    pub fn possible_moves(&self) -> Vec<String> {
        if !self.pos.player_has_king() || self.resigned[self.current_player.idx()] {
            return Vec::new();
        }
        self.pos
            .gen_moves()
            .map(|(i, j)| format!("{}{}", cord_to_str(i), cord_to_str(j)))
            .collect()
    }

    /// 合法走法经动作编码后的动作集合
    pub fn possible_actions(&self) -> Vec<usize> {
        self.possible_moves()
            .iter()
            .map(|m| move_to_action(m).expect("生成器产出的走法必然可编码"))
            .collect()
    }

    /// 8100 维的 0/1 动作掩码 (投降哨兵没有掩码位)
    pub fn action_masks(&self) -> Vec<i32> {
        let mut mask = vec![0; ACTION_SPACE_SIZE];
        for action in self.possible_actions() {
            mask[action] = 1;
        }
        mask
    }

    pub(super) fn generate_info(&self, value_diff: i32) -> StepInfo {
        StepInfo {
            history: self.his.clone(),
            value: value_diff,
            is_red_player: self.current_player == Player::Red,
            is_black_player: self.current_player == Player::Black,
        }
    }

    // === 公共访问器方法 ===

    pub fn current_position(&self) -> &Position {
        &self.pos
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn history_positions(&self) -> &[Position] {
        &self.his
    }

    pub fn has_resigned(&self, player: Player) -> bool {
        self.resigned[player.idx()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_env::position::framed_board;

    fn step_move(env: &mut CnChessEnv, mv: &str) -> (f32, bool) {
        let action = move_to_action(mv).unwrap();
        let (_, reward, terminated, _, _) = env.step(action).unwrap();
        (reward, terminated)
    }

    #[test]
    fn test_reset_baseline() {
        let mut env = CnChessEnv::new();
        let (obs, info) = env.reset();
        assert_eq!(obs.board.dim(), (OBSERVATION_CHANNELS, BOARD_ROWS, BOARD_COLS));
        assert_eq!(info.history.len(), 1);
        assert!(info.is_red_player);
        assert_eq!(env.game_state(), GameState::InProgress);
        assert_eq!(env.possible_actions().len(), 44);
    }

    #[test]
    fn test_step_alternates_player_and_reports_value() {
        let mut env = CnChessEnv::new();
        let action = move_to_action("e3e4").unwrap();
        let (_, reward, terminated, truncated, info) = env.step(action).unwrap();
        assert_eq!(reward, 0.0);
        assert!(!terminated);
        assert!(!truncated);
        assert_eq!(info.value, 1);
        assert!(info.is_black_player);
        assert_eq!(env.current_player(), Player::Black);
        assert_eq!(env.game_state(), GameState::InProgress);
    }

    #[test]
    fn test_illegal_action_is_rejected() {
        let mut env = CnChessEnv::new();
        // e4e5 起点是空位，不在合法集内
        let action = move_to_action("e4e5").unwrap();
        assert!(env.step(action).is_err());
        // 超出编号域的动作是格式错误
        assert!(env.step(RESIGN_ACTION + 7).is_err());
    }

    #[test]
    fn test_history_window_is_bounded() {
        let mut env = CnChessEnv::new();
        for _ in 0..2 {
            step_move(&mut env, "b0c2");
            step_move(&mut env, "b0c2");
            step_move(&mut env, "c2b0");
            step_move(&mut env, "c2b0");
        }
        assert_eq!(env.history_positions().len(), HISTORY_CACHE_STEPS);
        assert_eq!(env.game_state(), GameState::InProgress);
    }

    #[test]
    fn test_repetition_with_chariot_loses() {
        let mut env = CnChessEnv::new();
        // 双方车左进一/退一来回重复；第 9 步第三次复现同一局面
        let shuffle = ["a0a1", "a0a1", "a1a0", "a1a0"];
        for round in 0..2 {
            for mv in shuffle {
                let (reward, terminated) = step_move(&mut env, mv);
                assert!(!terminated, "round {} move {} 不应终局", round, mv);
                assert_eq!(reward, 0.0);
            }
        }
        let (reward, terminated) = step_move(&mut env, "a0a1");
        assert!(terminated);
        assert_eq!(reward, -1.0);
        assert_eq!(
            env.game_state(),
            GameState::Terminated(TerminationReason::LossByRepetition)
        );
    }

    #[test]
    fn test_repetition_with_general_is_exempt() {
        let mut env = CnChessEnv::new();
        // 同样的重复节奏，但走的是帅/将：第三次复现不判负
        let shuffle = ["e0e1", "e0e1", "e1e0", "e1e0"];
        for _ in 0..2 {
            for mv in shuffle {
                let (_, terminated) = step_move(&mut env, mv);
                assert!(!terminated);
            }
        }
        let (reward, terminated) = step_move(&mut env, "e0e1");
        assert!(!terminated);
        assert_eq!(reward, 0.0);
        assert_eq!(env.game_state(), GameState::InProgress);
    }

    #[test]
    fn test_flying_general_capture_wins() {
        let mut env = CnChessEnv::new();
        env.set_position(Position::new(&framed_board([
            "....k....",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            "....K....",
        ])));
        let action = move_to_action("e0e9").unwrap();
        assert!(env.possible_actions().contains(&action));
        let (_, reward, terminated, _, _) = env.step(action).unwrap();
        assert!(terminated);
        assert_eq!(reward, 1.0);
        assert_eq!(
            env.game_state(),
            GameState::Terminated(TerminationReason::WinByCapture)
        );
        // 旋转后走子方自己的大写帅/将消失，即对方将帅已被吃
        assert!(!env.current_position().player_has_king());
        assert!(env.possible_actions().is_empty());
    }

    #[test]
    fn test_resignation() {
        let mut env = CnChessEnv::new();
        let (_, reward, terminated, _, _) = env.step(RESIGN_ACTION).unwrap();
        assert!(terminated);
        assert_eq!(reward, -1.0);
        assert_eq!(
            env.game_state(),
            GameState::Terminated(TerminationReason::LossByResignation)
        );
        assert!(env.has_resigned(Player::Red));
        // 投降不交换走子方
        assert_eq!(env.current_player(), Player::Red);
        // 投降后合法动作集强制为空
        assert!(env.possible_actions().is_empty());
    }

    #[test]
    #[should_panic(expected = "重复投降")]
    fn test_double_resignation_panics() {
        let mut env = CnChessEnv::new();
        env.step(RESIGN_ACTION).unwrap();
        let _ = env.step(RESIGN_ACTION);
    }
}
