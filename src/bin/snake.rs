use std::{fs, path::PathBuf, time::Duration};

use clap::Parser;
use color_eyre::{eyre::WrapErr, Result};
use log::{info, warn};
use snake_modes::{
    game::{Event, GameConfig, Mode, Simulation},
    strategies::{Greedy, Strategy},
};
use tokio::time::{interval, Instant, MissedTickBehavior};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Plays snake headlessly, steered by the greedy strategy.
#[derive(Parser)]
#[command(name = "snake", version, about)]
struct Cli {
    /// classic, walls, speed, portal or no-die
    #[arg(long, default_value = "classic")]
    mode: Mode,

    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    grid_size: Option<i64>,

    #[arg(long)]
    seed: Option<u64>,

    /// How many games to play before exiting
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Give up after this many moves; no-die and portal games only end
    /// when the board fills up
    #[arg(long)]
    max_moves: Option<u64>,

    /// Host frame rate; the game only steps once per move interval
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Print the board after every step
    #[arg(long)]
    draw: bool,

    /// Print every event as a line of JSON
    #[arg(long)]
    events: bool,
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).wrap_err_with(|| {
                format!("failed to read config from {}", path.display())
            })?;
            serde_json::from_str(&text).wrap_err_with(|| {
                format!("failed to parse config in {}", path.display())
            })?
        },
        None => GameConfig::default(),
    };

    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
        config.start.x = config.start.x.min(grid_size - 1);
        config.start.y = config.start.y.min(grid_size - 1);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate()?;
    Ok(config)
}

/// Whether a tick left a board worth printing. A game over tick has already
/// reset the game, so there's no death frame to show.
fn shows_new_frame(events: &[Event]) -> bool {
    events.iter().any(|event| matches!(event, Event::Moved { .. }))
        && !events.iter().any(Event::is_game_over)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    info!("{NAME} {VERSION} starting {} games of {}", cli.games, cli.mode);

    let mut sim = Simulation::new(config, cli.mode)?;
    let strategy = Greedy;

    let clock = Instant::now();
    let mut frames = interval(Duration::from_secs(1) / cli.fps.max(1));
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut played = 0;
    let mut moves = 0;
    sim.start(clock.elapsed())?;

    while played < cli.games {
        if cli.max_moves.is_some_and(|max| moves >= max) {
            warn!("stopping after {moves} moves");
            break;
        }

        frames.tick().await;

        let direction = strategy.get_direction(sim.game())?;
        sim.turn(direction);

        let events = sim.tick(clock.elapsed())?;
        if cli.draw && shows_new_frame(&events) {
            println!("{}", sim.game());
        }

        for event in events {
            if cli.events {
                println!("{}", serde_json::to_string(&event)?);
            }
            match event {
                Event::ScoreChanged { score, best } => {
                    info!("score {score} (best {best})");
                },
                Event::SpeedChanged { interval } => {
                    info!("speeding up to {} ms per move", interval.as_millis());
                },
                Event::GameOver { reason, score } => {
                    warn!("game over: snake {reason}, final score {score}");
                    played += 1;
                    if played < cli.games {
                        sim.start(clock.elapsed())?;
                    }
                },
                Event::Moved { .. } => moves += 1,
                _ => {},
            }
        }
    }

    info!("best score across {played} games: {}", sim.game().best_score());

    Ok(())
}
