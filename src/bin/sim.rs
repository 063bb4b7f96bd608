use clap::Parser;
use gridbattle::{autoplay, init_logging, Fleet};

#[derive(Parser)]
#[command(about = "Play computer-vs-computer games and print JSON reports")]
struct Args {
    /// Seed of the first game; later games use consecutive seeds.
    seed: u64,
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u64,
    /// Fleet to use: classic or reduced.
    #[arg(long, default_value = "classic")]
    fleet: String,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let fleet = Fleet::by_name(&args.fleet)
        .ok_or_else(|| anyhow::anyhow!("unknown fleet '{}'", args.fleet))?;

    for offset in 0..args.games {
        let report = autoplay(args.seed.wrapping_add(offset), fleet)
            .map_err(|e| anyhow::anyhow!(e))?;
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}
