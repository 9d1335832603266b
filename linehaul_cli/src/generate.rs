use std::path::PathBuf;

use clap::Subcommand;
use linehaul_dispatch::json::scenario_input::JsonScenario;
use linehaul_dispatch::scenario::generator;

use crate::{file_utils, parsers};

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Write a scenario file: the demo board, or a seeded day when --date is given
    Scenario {
        #[arg(long, short = 'o')]
        out: PathBuf,

        #[arg(short, long, value_parser = parsers::parse_date)]
        date: Option<jiff::civil::Date>,

        #[arg(short, long, default_value_t = 60)]
        loads: usize,

        #[arg(short, long, default_value_t = generator::DEFAULT_SEED)]
        seed: u64,
    },
    JsonSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::Scenario {
            out,
            date,
            loads,
            seed,
        } => {
            let problem = match date {
                Some(date) => generator::daily_problem(date, loads, seed),
                None => generator::sample_scenario(),
            };

            file_utils::write_json_pretty(&out, &JsonScenario::from_problem(&problem))?;
        }
        GenerateSubcommands::JsonSchema { out } => {
            let schema = linehaul_dispatch::json::schema::generate_json_schema()?;

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(out, schema)?;
        }
    }

    Ok(())
}
