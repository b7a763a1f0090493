use std::{error::Error, path::PathBuf};

use clap::Parser;
use fringe_quiz::{
    config::ScenarioParams,
    frontier::{FrontierEntry, Strategy},
    quiz::QuizSession,
    random::StdRngSource,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Search-frontier quiz generator
#[derive(Parser, Debug)]
#[command(name = "fringe-quiz")]
#[command(about = "Generates search-frontier quiz scenarios and their answers", long_about = None)]
struct Args {
    /// Seed for reproducible scenarios. Drawn from the OS when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of scenarios to generate
    #[arg(short, long, default_value_t = 1)]
    rounds: usize,

    /// Path to a JSON file overriding the default scenario parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every scenario as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Scenario<'a> {
    round: usize,
    strategy: Strategy,
    prompt: String,
    fringe: Vec<&'a FrontierEntry>,
    answers: Vec<usize>,
}

fn print_table(scenario: &Scenario<'_>) {
    println!("\n==========");
    println!("Round {}", scenario.round);
    println!("==========");
    println!("{:>3}  {:<10} {:>5} {:>5} {:>5}", "#", "path", "g", "h", "g+h");
    for (i, entry) in scenario.fringe.iter().enumerate() {
        println!(
            "{:>3}  {:<10} {:>5} {:>5} {:>5}",
            i,
            entry.path_symbols(),
            entry.path_cost,
            entry.heuristic,
            entry.combined_score()
        );
    }
    println!("\n{}", scenario.prompt);
    println!("Accepted answers: {:?}", scenario.answers);
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let params = match &args.config {
        Some(path) => ScenarioParams::load(path)?,
        None => ScenarioParams::default(),
    };
    let rng = match args.seed {
        Some(seed) => StdRngSource::seeded(seed),
        None => StdRngSource::from_os_rng(),
    };

    let mut session = QuizSession::new(params, rng)?;

    for round in 1..=args.rounds {
        let question = session.next_scenario()?;
        {
            let scenario = Scenario {
                round,
                strategy: question.strategy(),
                prompt: question.prompt(),
                fringe: session.store().iter().collect(),
                answers: session.answers()?,
            };
            if args.json {
                println!("{}", serde_json::to_string(&scenario)?);
                continue;
            }
            print_table(&scenario);
        }

        let expanded = session.expand()?;
        println!(
            "{} expands {} ({} entries remain)",
            question.strategy(),
            expanded.path_symbols(),
            session.store().len()
        );
    }

    session.stats().dump();
    Ok(())
}
