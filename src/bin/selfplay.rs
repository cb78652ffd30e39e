use chess_rules::{Game, GameStatus};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Play random check-safe moves from the starting position until the game
/// ends or the move limit is hit.
#[derive(Debug, Parser)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIMESTAMP"), ")"))]
struct Cli {
    /// Seed for the move picker. Random if omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many moves (plies).
    #[arg(short, long, default_value_t = 200)]
    max_moves: u32,

    /// Print the final game as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Don't log each move to stderr.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(seed);

    let mut game = Game::new();
    let mut move_count = 0;

    eprintln!("seed {seed}");
    while move_count < cli.max_moves {
        let turn = game.team_turn();
        let moves = game.legal_moves(turn);
        let Some(m) = moves.choose(&mut rng) else {
            break;
        };
        game.make_move(m)?;
        move_count += 1;
        if !cli.quiet {
            eprintln!("{move_count:>4}. {turn}: {m}");
        }
    }

    let result = match game.status() {
        GameStatus::Checkmate => format!("{} wins by checkmate", game.team_turn().opposite()),
        GameStatus::Stalemate => "draw by stalemate".to_string(),
        GameStatus::Check | GameStatus::Ongoing => "move limit reached".to_string(),
    };
    eprintln!("Game over after {move_count} moves: {result}");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&game)?);
    }
    Ok(())
}
