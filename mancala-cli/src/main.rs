//! Mancala 终端客户端
//!
//! 仅负责渲染与输入，规则与搜索全部来自库 crate。
//! 人类执南方，AI 执北方；`--ai-only` 时双方都由 AI 走。

use std::io::{self, BufRead, Write};

use anyhow::Result;
use mancala_ai::{AiConfig, AiEngine, Difficulty, SearchDepth, SCORE_WIN};
use mancala_core::{Board, Game, Outcome, Pit, Side};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 命令行选项
struct CliOptions {
    starting_seeds: u32,
    depth: SearchDepth,
    ai_only: bool,
}

impl CliOptions {
    /// 解析 `--seeds N`、`--depth N`（0 表示不限深度）、`--ai-only`
    fn parse() -> Result<Self> {
        let mut options = Self {
            starting_seeds: 4,
            depth: SearchDepth::Limited(10),
            ai_only: false,
        };

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seeds" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--seeds requires a value"))?;
                    options.starting_seeds = value.parse()?;
                }
                "--depth" => {
                    let value: u32 = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--depth requires a value"))?
                        .parse()?;
                    options.depth = if value == 0 {
                        SearchDepth::Unlimited
                    } else {
                        SearchDepth::Limited(value)
                    };
                }
                "--ai-only" => options.ai_only = true,
                other => anyhow::bail!("unknown argument: {other}"),
            }
        }
        Ok(options)
    }
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mancala_ai=info".parse()?),
        )
        .init();

    let options = CliOptions::parse()?;
    let mut game = Game::new(options.starting_seeds, Side::South)?;
    let mut engine = AiEngine::new(AiConfig {
        difficulty: Difficulty::Hard,
        depth: options.depth,
    });

    info!(
        seeds = options.starting_seeds,
        depth = ?options.depth,
        ai_only = options.ai_only,
        "new game"
    );

    let stdin = io::stdin();
    while game.outcome() == Outcome::Ongoing {
        render_board(game.board());
        let side = game.current_turn();

        let pit = if options.ai_only || side == Side::North {
            let Some(pit) = engine.choose_move(game.board(), side) else {
                break;
            };
            println!("{side} (AI) plays {pit}");
            pit
        } else {
            match read_human_move(&stdin, &mut engine, &game, options.depth)? {
                Some(pit) => pit,
                // 用户退出
                None => return Ok(()),
            }
        };

        game.play(pit)?;
    }

    render_board(game.board());
    match game.outcome() {
        Outcome::Win(side) => println!("{side} wins!"),
        Outcome::Tie => println!("Tie game!"),
        Outcome::Ongoing => {}
    }
    Ok(())
}

/// 渲染棋盘
///
/// 上行为北方坑（左 G 右 L），北库在左；下行为南方坑，南库在右。
fn render_board(board: &Board) {
    let row = |pits: &[Pit]| {
        pits.iter()
            .map(|&pit| format!("{:2}", board.get(pit)))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!();
    println!("               G   H   I   J   K   L");
    println!(
        "  North [{:2}]  {}",
        board.store(Side::North),
        row(&[Pit::G, Pit::H, Pit::I, Pit::J, Pit::K, Pit::L])
    );
    println!(
        "              {}  [{:2}] South",
        row(&Side::South.pits()),
        board.store(Side::South)
    );
    println!("               A   B   C   D   E   F");
    println!();
}

/// 读取人类走法；返回 `None` 表示用户退出
fn read_human_move(
    stdin: &io::Stdin,
    engine: &mut AiEngine,
    game: &Game,
    depth: SearchDepth,
) -> Result<Option<Pit>> {
    loop {
        print!("Your move (A-F, h = hints, q = quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let input = line.trim();

        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if input.eq_ignore_ascii_case("h") {
            print_hints(engine, game, depth)?;
            continue;
        }

        let Some(pit) = input.chars().next().and_then(Pit::from_letter) else {
            println!("Unrecognized input: {input}");
            continue;
        };
        if game.legal_moves().contains(&pit) {
            return Ok(Some(pit));
        }
        println!("{pit} is not a legal move");
    }
}

/// 打印每个合法走法的搜索评分（走子方视角，必胜/必败显示 win/loss）
fn print_hints(engine: &mut AiEngine, game: &Game, depth: SearchDepth) -> Result<()> {
    for pit in game.legal_moves() {
        let score = engine.evaluate_move(game.board(), game.current_turn(), pit, depth)?;
        let label = if score >= SCORE_WIN {
            "win".to_string()
        } else if score <= -SCORE_WIN {
            "loss".to_string()
        } else {
            format!("{score:+}")
        };
        println!("  {pit}: {label}");
    }
    Ok(())
}
