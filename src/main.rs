use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use symbios_rover::{
    Model, Prompter, RandomSource, Robot, RobotName, RngSource, parse_model, parse_name,
};

/// Movement batches fed to the roster when not running interactively.
const DEMO_BATCHES: &[&[i32]] = &[
    &[1, -5, 0, -9],
    &[3, 3, 5, 6, 1, 0, 0, -7],
    &[2, 1, 0, -1, 1, 1, -4],
    &[],
    &[3, 5],
];

const DEFAULT_NAMES: [&str; 4] = ["R2D2", "C3PO", "BB8", "K2SO"];

#[derive(Parser, Debug)]
#[command(name = "symbios-rover", version, about = "Drive a roster of grid robots")]
struct Cli {
    /// Seed for every random draw; omit for an entropy-seeded run.
    #[arg(long)]
    seed: Option<u64>,
    /// Robot names, one per robot. Missing or blank names are prompted for.
    #[arg(long = "name")]
    names: Vec<String>,
    /// Robot models (0-3), paired with `--name` by position. Missing or invalid ones are prompted for.
    #[arg(long = "model")]
    models: Vec<String>,
    /// Read movement batches from stdin instead of replaying the demo batches.
    #[arg(long)]
    interactive: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::std_from_entropy(),
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let mut roster = build_roster(&cli, &mut prompter, &mut rng)?;

    if cli.interactive {
        while let Some(batch) = prompter.movements()? {
            run_batch(&mut roster, &batch, &mut rng)?;
        }
    } else {
        for batch in DEMO_BATCHES {
            run_batch(&mut roster, batch, &mut rng)?;
        }
    }
    Ok(())
}

fn build_roster<R: BufRead, W: Write>(
    cli: &Cli,
    prompter: &mut Prompter<R, W>,
    rng: &mut impl RandomSource,
) -> Result<Vec<Robot>> {
    if cli.names.is_empty() && cli.models.is_empty() {
        let mut roster = Vec::with_capacity(Model::ALL.len());
        for (name, model) in DEFAULT_NAMES.iter().zip(Model::ALL) {
            let name = RobotName::new(name).context("default robot name")?;
            roster.push(Robot::new(name, model, rng));
        }
        return Ok(roster);
    }

    let count = cli.names.len().max(cli.models.len());
    let mut roster = Vec::with_capacity(count);
    for i in 0..count {
        let name = match cli.names.get(i).map(|raw| parse_name(raw)) {
            Some(Ok(name)) => name,
            Some(Err(err)) => {
                eprintln!("*ERROR* {err}");
                prompter.name().context("reading robot name")?
            }
            None => prompter.name().context("reading robot name")?,
        };
        let model = match cli.models.get(i).map(|raw| parse_model(raw)) {
            Some(Ok(model)) => model,
            Some(Err(err)) => {
                eprintln!("*ERROR* {err}");
                prompter.model().context("reading robot model")?
            }
            None => prompter.model().context("reading robot model")?,
        };
        roster.push(Robot::new(name, model, rng));
    }
    Ok(roster)
}

fn run_batch(roster: &mut [Robot], batch: &[i32], rng: &mut impl RandomSource) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for robot in roster.iter_mut() {
        robot.travel(batch, rng);
        writeln!(stdout, "{}", robot.describe())?;
    }
    Ok(())
}
