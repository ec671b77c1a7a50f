use std::thread;

use anyhow::Context;
use lifegrid::{Pos2, Simulation, StepEngine};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod console;
mod options;
mod stats;

use stats::GenerationStats;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let Some(args) = options::Args::from_env().context("invalid arguments")? else {
        return Ok(());
    };

    let engine = if args.multithreading() {
        StepEngine::parallel()
    } else {
        StepEngine::serial()
    };
    let mut sim = Simulation::new(args.size()?, engine).context("creating board")?;

    let mut rng = match args.seed()? {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    sim.seed(args.fill_mode()?, &mut rng)
        .context("seeding board")?;
    info!(
        size = sim.board().dimension(),
        alive = sim.board().alive_count(),
        parallel = engine.is_parallel(),
        "simulation seeded"
    );

    let mut console = if args.console() {
        Some(console::ConsoleRender::new().context("entering console mode")?)
    } else {
        None
    };
    let sleep = args.sleep()?;
    let stats_file = args.stats_file();

    let alive = sim.board().alive_count();
    let mut stats = if stats_file.is_some() {
        GenerationStats::with_samples(alive)
    } else {
        GenerationStats::new(alive)
    };
    'generations: for _ in 0..args.generations()? {
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                if let console::ConsoleCommand::Exit = cmd {
                    break 'generations;
                }
            }
            console.render(sim.board())?;
        }

        if stats.has_report(console.is_some()) {
            let report = stats.report();
            match console {
                Some(ref mut console) => console.set_report(report),
                None => info!("{}", report),
            }
        }

        let next = sim.step()?;
        stats.record(next.alive_count());
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    sim.terminate();
    drop(console);

    if args.print() {
        let n = sim.board().dimension();
        println!("{}", sim.board().window(Pos2::default(), Pos2::new(n, n)));
    }

    if let Some(file_name) = stats_file {
        stats
            .save(&file_name)
            .with_context(|| format!("writing stats to {file_name}"))?;
    }
    info!(generations = stats.generations(), "done");

    Ok(())
}
