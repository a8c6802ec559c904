//! Maxwell's Demon driver
//!
//! Builds a container, loads the reference scenario (plus optional random
//! particles), runs it and prints the final census.
//!
//! Usage:
//!     maxwell-demon
//!     maxwell-demon --headless --steps 500
//!     maxwell-demon --scatter 30 --seed 7 --pause-ms 20

use clap::Parser;

use maxwell_demon::adapters::{Canvas, SleepPacer, window};
use maxwell_demon::config::{DEFAULT_HEIGHT, DEFAULT_SCATTER, DEFAULT_STEPS, DEFAULT_WIDTH};
use maxwell_demon::core::Container;
use maxwell_demon::ports::Renderer;
use maxwell_demon::{Scenario, SimulationParams};

/// Maxwell's Demon - particles, walls and black holes
#[derive(Parser)]
#[command(name = "maxwell-demon")]
#[command(version)]
#[command(about = "Animate particles bouncing in a box full of black holes", long_about = None)]
struct Cli {
    /// Container width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    /// Container height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    /// Number of steps to run
    #[arg(short, long, default_value_t = DEFAULT_STEPS)]
    steps: u32,

    /// Pause after each step, in milliseconds [default: 10 in a window, 0 headless]
    #[arg(long)]
    pause_ms: Option<u64>,

    /// Random particles to add on top of the reference scenario
    #[arg(long, default_value_t = DEFAULT_SCATTER)]
    scatter: usize,

    /// Seed for the random particles
    #[arg(long)]
    seed: Option<u64>,

    /// Run in the terminal without opening a window
    #[arg(long)]
    headless: bool,
}

impl From<Cli> for SimulationParams {
    fn from(cli: Cli) -> Self {
        let params = SimulationParams::default()
            .with_size(cli.width, cli.height)
            .with_steps(cli.steps)
            .with_scatter(cli.scatter, cli.seed)
            .with_headless(cli.headless);
        match cli.pause_ms {
            Some(ms) => params.with_pause_ms(ms),
            None => params,
        }
    }
}

/// Same flow as the window, synchronously, with a canvas nobody looks at.
fn run_headless(params: &SimulationParams, scenario: &Scenario) {
    let mut container = Container::new();
    if !params.pause().is_zero() {
        container.set_pacer(SleepPacer(params.pause()));
    }
    let mut canvas = Canvas::new();

    container.create(params.width, params.height);
    container.make_visible();
    scenario.populate(&mut container);
    for _ in 0..params.steps {
        container.start(1);
        canvas.apply_all(container.drain_intents());
    }
    log::debug!("{} shapes on display before finish", canvas.len());

    println!("{}", container.consult());

    container.finish();
    canvas.apply_all(container.drain_intents());
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = SimulationParams::from(Cli::parse());
    let scenario = Scenario::reference().with_scatter(
        params.scatter,
        params.width,
        params.height,
        params.seed,
    );

    if params.headless {
        run_headless(&params, &scenario);
        Ok(())
    } else {
        window::run(&params, &scenario)
    }
}
