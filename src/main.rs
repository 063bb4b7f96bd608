#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use gridbattle::{
    cli::{run_console, StdinInput},
    init_logging, Fleet, GameSession, RandomPlayer, SharedSession, TurnMode, CLASSIC_FLEET,
    REDUCED_FLEET,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum FleetKind {
    /// Ten ships: 4, 3, 3, 2, 2, 2, 1, 1, 1, 1.
    Classic,
    /// One ship of each length.
    Reduced,
}

#[cfg(feature = "std")]
impl From<FleetKind> for Fleet {
    fn from(kind: FleetKind) -> Self {
        match kind {
            FleetKind::Classic => CLASSIC_FLEET,
            FleetKind::Reduced => REDUCED_FLEET,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer on the console.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = FleetKind::Classic)]
        fleet: FleetKind,
        #[arg(long, help = "Abandon a turn that takes longer than this many seconds")]
        turn_timeout_secs: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            fleet,
            turn_timeout_secs,
        } => {
            let rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let session = GameSession::new(fleet.into(), Box::new(RandomPlayer::new()), rng)
                .with_mode(TurnMode::Stepped);
            let shared = SharedSession::new(session);
            let mut input = StdinInput::new();
            let mut stdout = std::io::stdout();
            let timeout = turn_timeout_secs.map(Duration::from_secs);
            if run_console(&shared, &mut input, &mut stdout, timeout)
                .await?
                .is_none()
            {
                println!("Game abandoned.");
            }
        }
    }
    Ok(())
}
