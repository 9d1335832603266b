use jiff::civil::Date;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::info;

use crate::history::store::{AssignmentHistory, MergeOutcome};
use crate::scenario::generator;
use crate::solver::day_plan::DayPlan;
use crate::solver::dispatch_config::{ConfigError, DispatchConfig};
use crate::solver::engine;
use crate::timer_debug;

/// Parameters for regenerating a stretch of synthetic history.
#[derive(Clone, Debug)]
pub struct BackfillParams {
    pub end_date: Date,
    pub days: usize,
    pub loads_per_day: usize,
    pub seed: u64,
}

impl BackfillParams {
    /// Two years of sixty-load days, the standard demo history.
    pub fn new(end_date: Date) -> Self {
        Self {
            end_date,
            days: 730,
            loads_per_day: 60,
            seed: generator::DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BackfillSummary {
    pub days: usize,
    pub inserted: usize,
    pub duplicates: usize,
}

/// Regenerates dispatch history for the `params.days` days ending at
/// `params.end_date` and folds every planned day into `history` in date
/// order. Days are independent, so they are planned in parallel; the merge
/// stays sequential, which keeps the result identical to a day-by-day run.
/// `on_day` fires once per planned day, from worker threads.
pub fn backfill<F>(
    history: &mut AssignmentHistory,
    config: &DispatchConfig,
    params: &BackfillParams,
    on_day: F,
) -> Result<BackfillSummary, ConfigError>
where
    F: Fn(Date) + Sync,
{
    config.validate()?;

    let dates = planning_dates(params.end_date, params.days);

    let plans: Vec<DayPlan> = timer_debug!(
        "Backfill planning",
        dates
            .par_iter()
            .map(|&date| {
                let problem = generator::daily_problem(date, params.loads_per_day, params.seed);
                let mut rng = generator::engine_rng(params.seed, date);
                let plan = engine::plan_day(&problem, config, date, &mut rng);
                on_day(date);

                plan
            })
            .collect()
    );

    let mut merged = MergeOutcome::default();
    for plan in &plans {
        let outcome = history.merge_day(plan);
        merged.inserted += outcome.inserted;
        merged.duplicates += outcome.duplicates;
    }

    let summary = BackfillSummary {
        days: dates.len(),
        inserted: merged.inserted,
        duplicates: merged.duplicates,
    };

    info!(
        "Backfilled {} days: {} records inserted, {} duplicates skipped",
        summary.days, summary.inserted, summary.duplicates
    );

    Ok(summary)
}

fn planning_dates(end_date: Date, days: usize) -> Vec<Date> {
    let mut dates = Vec::with_capacity(days);

    let mut date = end_date;
    for _ in 0..days {
        dates.push(date);
        date = date.yesterday().expect("Date out of range");
    }
    dates.reverse();

    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn params() -> BackfillParams {
        let mut params = BackfillParams::new(date(2025, 8, 25));
        params.days = 5;
        params.loads_per_day = 20;
        params
    }

    #[test]
    fn fills_an_empty_history() {
        let mut history = AssignmentHistory::new();
        let summary = backfill(&mut history, &DispatchConfig::default(), &params(), |_| {})
            .expect("backfill failed");

        assert_eq!(summary.days, 5);
        assert_eq!(summary.duplicates, 0);
        assert_eq!(summary.inserted, history.len());
        assert!(!history.is_empty());

        let (first, last) = history.date_range().unwrap();
        assert!(first >= date(2025, 8, 21));
        assert!(last <= date(2025, 8, 25));
    }

    #[test]
    fn rerunning_inserts_nothing_new() {
        let mut history = AssignmentHistory::new();
        let config = DispatchConfig::default();

        let first = backfill(&mut history, &config, &params(), |_| {}).unwrap();
        let before = history.clone();

        let second = backfill(&mut history, &config, &params(), |_| {}).unwrap();
        assert_eq!(second.inserted, 0);
        assert_eq!(second.duplicates, first.inserted);
        assert_eq!(history, before);
    }

    #[test]
    fn parallel_planning_is_deterministic() {
        let config = DispatchConfig::default();

        let mut a = AssignmentHistory::new();
        backfill(&mut a, &config, &params(), |_| {}).unwrap();

        let mut b = AssignmentHistory::new();
        backfill(&mut b, &config, &params(), |_| {}).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn reports_each_planned_day() {
        let planned = AtomicUsize::new(0);
        let mut history = AssignmentHistory::new();
        backfill(&mut history, &DispatchConfig::default(), &params(), |_| {
            planned.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();

        assert_eq!(planned.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn invalid_config_aborts_before_planning() {
        let mut config = DispatchConfig::default();
        config.miles_per_gallon = 0.0;

        let mut history = AssignmentHistory::new();
        let result = backfill(&mut history, &config, &params(), |_| {});
        assert!(result.is_err());
        assert!(history.is_empty());
    }
}
