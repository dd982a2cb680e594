use rand::seq::SliceRandom;
use rand::thread_rng;
use xiangqi_9x10::*;

fn main() {
    let mut env = CnChessEnv::new();
    let mut rng = thread_rng();

    println!("=== Rust 中国象棋 (9x10) - 随机对局演示 ===\n");
    println!("开始执行随机策略测试...\n");

    let (obs, _info) = env.reset();
    println!("游戏重置完成");
    println!("初始观察张量形状: {:?}\n", obs.board.shape());

    let mut step_count = 0;

    loop {
        println!("{}", env.current_position());
        println!("当前玩家: {}", env.current_player());

        let valid_actions = env.possible_actions();
        if valid_actions.is_empty() {
            println!("当前玩家无棋可走，游戏结束。");
            break;
        }

        let action = *valid_actions.choose(&mut rng).unwrap();
        let move_str = match action_to_move(action) {
            Ok(DecodedAction::Move(mv)) => mv,
            Ok(DecodedAction::Resign) => "resign".to_string(),
            Err(e) => panic!("动作解码逻辑错误: {}", e),
        };

        println!("Step {}: 执行动作 {} -> {}\n", step_count, action, move_str);

        match env.step(action) {
            Ok((_obs, reward, terminated, _truncated, info)) => {
                step_count += 1;

                if terminated {
                    println!("{}", env.current_position());
                    println!("\n=== 游戏结束 ===");
                    println!("总步数: {}", step_count);
                    println!("终局状态: {:?}", env.game_state());
                    println!("最后一步奖励: {}, 估值增量: {}", reward, info.value);
                    break;
                }
            }
            Err(e) => {
                panic!("Step 执行逻辑错误: {}", e);
            }
        }

        // 限制最大步数以防无限循环
        if step_count >= 400 {
            println!("\n达到最大步数限制，游戏结束。");
            break;
        }
    }

    println!("\n验证结束。");
}
