use std::path::PathBuf;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use jiff::civil::Date;
use jiff::tz::TimeZone;
use linehaul_dispatch::history::backfill::{self, BackfillParams};
use linehaul_dispatch::history::store::AssignmentHistory;
use linehaul_dispatch::scenario::generator;
use linehaul_dispatch::solver::dispatch_config::DispatchConfig;
use tracing::info;

use crate::{file_utils, parsers};

#[derive(Args)]
pub struct BackfillArgs {
    /// History file to create or extend
    #[arg(long, default_value = "data/history.json")]
    history: PathBuf,

    /// Last day of the replayed range. Defaults to yesterday (UTC).
    #[arg(short, long, value_parser = parsers::parse_date)]
    end_date: Option<Date>,

    #[arg(short, long, default_value_t = 730)]
    days: usize,

    #[arg(short, long, default_value_t = 60)]
    loads_per_day: usize,

    /// Base seed for board generation and slack draws
    #[arg(short, long, default_value_t = generator::DEFAULT_SEED)]
    seed: u64,
}

pub fn run(args: BackfillArgs) -> Result<(), anyhow::Error> {
    let end_date = match args.end_date {
        Some(date) => date,
        None => jiff::Timestamp::now()
            .to_zoned(TimeZone::UTC)
            .date()
            .yesterday()?,
    };

    let mut history: AssignmentHistory = if args.history.exists() {
        file_utils::read_json(&args.history)?
    } else {
        AssignmentHistory::new()
    };

    let mut params = BackfillParams::new(end_date);
    params.days = args.days;
    params.loads_per_day = args.loads_per_day;
    params.seed = args.seed;

    let bar = ProgressBar::new(args.days as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40}] {pos}/{len} days")
            .unwrap(),
    );

    let summary = backfill::backfill(&mut history, &DispatchConfig::default(), &params, |_| {
        bar.inc(1)
    })?;
    bar.finish_and_clear();

    file_utils::write_json_pretty(&args.history, &history)?;
    info!(
        "Backfilled {} days ending {} into {}: {} inserted, {} duplicates skipped, {} records total",
        summary.days,
        end_date,
        args.history.display(),
        summary.inserted,
        summary.duplicates,
        history.len(),
    );

    Ok(())
}
