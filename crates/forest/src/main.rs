use clap::Parser;
use forest::prelude::*;
use forest::world::loader;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Learn state values for a grid world, then watch an agent walk it.
#[derive(Parser, Debug)]
#[command(name = "forest-tiles", version)]
struct Cli {
    /// World description file.
    world_file: PathBuf,
    /// Value-iteration sweeps to run before the agent moves.
    iterations: usize,
    /// Probability that a move goes in a random direction (0 to 1).
    error_rate: f64,
    /// Seconds to pause between frames.
    #[arg(default_value_t = 0.5)]
    sleep_time: f64,
    /// Discount factor.
    #[arg(long, default_value_t = 1.0)]
    gamma: f64,
    /// Sampler seed. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Do not clear the screen between frames.
    #[arg(long)]
    no_clear: bool,
    /// Plain output without ANSI colours.
    #[arg(long)]
    no_color: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("forest_tiles=info,forest_world=info,forest_mdp=info,forest_render=warn")
    });
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<EpisodeReport, Box<dyn Error>> {
    let pause = Duration::try_from_secs_f64(cli.sleep_time)
        .map_err(|e| format!("invalid sleep time {}: {e}", cli.sleep_time))?;
    let seed = cli.seed.unwrap_or_else(rand::random);

    let grid = loader::load(&cli.world_file)?;
    let config = MdpConfig {
        gamma: cli.gamma,
        error_rate: cli.error_rate,
        seed,
    };
    let mut mdp = Mdp::new(grid, config)?;
    let config = mdp.config();
    info!(
        gamma = config.gamma,
        error_rate = config.error_rate,
        seed = config.seed,
        "solver ready"
    );

    let mut observer = TerminalObserver::stdout(RenderConfig {
        pause,
        clear: !cli.no_clear,
        color: !cli.no_color,
    });
    mdp.run_sweeps(cli.iterations, &mut observer);
    Ok(mdp.run_episode(&mut observer))
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
