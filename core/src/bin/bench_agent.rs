//! Headless driver: plays seeded games with each agent and prints tallies.
//!
//! Usage: `bench_agent [games] [base-seed]`

use minado_core::{Action, Agent, Board, GamePreset, GameState, PatternAgent, RandomAgent, statistics};

fn main() {
    let mut args = std::env::args().skip(1);
    let games: u64 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(200);
    let base_seed: u64 = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(42);

    for preset in GamePreset::ALL {
        let config = preset.config();
        println!(
            "{} ({}x{}, {} mines)",
            preset.name(),
            config.size.0,
            config.size.1,
            config.mines
        );
        report("pattern", preset, games, base_seed, |seed| {
            Box::new(PatternAgent::new(seed))
        });
        report("random", preset, games, base_seed, |seed| {
            Box::new(RandomAgent::new(seed))
        });
    }
}

fn report(
    name: &str,
    preset: GamePreset,
    games: u64,
    base_seed: u64,
    make_agent: impl Fn(u64) -> Box<dyn Agent>,
) {
    let mut wins = 0u64;
    let mut progress_sum = 0f64;

    for game in 0..games {
        let seed = base_seed.wrapping_add(game);
        let Ok(mut board) = Board::new(preset.config(), seed) else {
            return;
        };
        let mut agent = make_agent(seed.wrapping_mul(31).wrapping_add(7));
        play(&mut board, agent.as_mut());

        if board.state() == GameState::Won {
            wins += 1;
        }
        progress_sum += f64::from(statistics(&board).progress_pct);
    }

    println!(
        "  {:>8}: {}/{} wins, avg progress {:.1}%",
        name,
        wins,
        games,
        progress_sum / games as f64
    );
}

fn play(board: &mut Board, agent: &mut dyn Agent) {
    while !board.state().is_finished() {
        let Some(action) = agent.choose_action(board) else {
            break;
        };
        match action {
            Action::Reveal(coords) => {
                if board.reveal(coords).is_err() {
                    break;
                }
            }
            Action::Flag(coords) => {
                board.toggle_flag(coords);
            }
        }
    }
}
