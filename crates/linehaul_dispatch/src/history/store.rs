use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use tracing::debug;

use crate::solver::assignment::Assignment;
use crate::solver::day_plan::DayPlan;

/// Identity of an assignment in the historical record. Replaying a day
/// reproduces the same keys, which is what makes merging idempotent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HistoryKey {
    pub date: Date,
    pub driver_id: String,
    pub load_id: String,
}

impl HistoryKey {
    pub fn of(assignment: &Assignment) -> Self {
        Self {
            date: assignment.date,
            driver_id: assignment.driver_id.clone(),
            load_id: assignment.load_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub inserted: usize,
    pub duplicates: usize,
}

/// Accumulated assignment records, ordered by date, then driver, then load.
/// The map key is the record identity, so folding the same plan in twice
/// leaves the store unchanged.
#[serde_as]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentHistory {
    #[serde_as(as = "Vec<(_, _)>")]
    records: BTreeMap<HistoryKey, Assignment>,
}

impl AssignmentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, key: &HistoryKey) -> bool {
        self.records.contains_key(key)
    }

    pub fn get(&self, key: &HistoryKey) -> Option<&Assignment> {
        self.records.get(key)
    }

    pub fn records(&self) -> impl Iterator<Item = (&HistoryKey, &Assignment)> {
        self.records.iter()
    }

    pub fn date_range(&self) -> Option<(Date, Date)> {
        let first = self.records.first_key_value()?.0.date;
        let last = self.records.last_key_value()?.0.date;

        Some((first, last))
    }

    /// Folds a day plan into the store. Existing records win: an incoming
    /// assignment whose key is already present is counted as a duplicate
    /// and its payload is left untouched.
    pub fn merge_day(&mut self, plan: &DayPlan) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();

        for assignment in &plan.assignments {
            match self.records.entry(HistoryKey::of(assignment)) {
                Entry::Occupied(_) => outcome.duplicates += 1,
                Entry::Vacant(entry) => {
                    entry.insert(assignment.clone());
                    outcome.inserted += 1;
                }
            }
        }

        debug!(
            "Merged day {}: {} inserted, {} duplicates skipped",
            plan.date, outcome.inserted, outcome.duplicates
        );

        outcome
    }
}
