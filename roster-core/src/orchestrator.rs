//! Mode selection and dispatch
//!
//! The orchestrator maps an [`OrderingMode`] onto the matching strategy or
//! onto the heap sort engine, runs it over the caller's sequence and reports
//! what happened. It never fetches or stores data itself except through an
//! explicit [`RecordSource`].

use crate::sorting::{
    FieldSort, HeapSortEngine, NameField, OrderingStrategy, RandomOrder,
    TimestampField,
};
use crate::{OrderingError, RecordSource, Result};
use roster_model::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, info, warn};

/// The closed set of supported orderings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OrderingMode {
    /// Ascending numeric `id`, by instrumented heap sort
    #[default]
    HeapById,
    /// `name`, A-Z
    NameAscending,
    /// `name`, Z-A
    NameDescending,
    /// `timestamp`, newest first
    TimestampDesc,
    /// Uniform random permutation
    Random,
}

impl OrderingMode {
    /// Every mode, in menu order
    pub const ALL: [OrderingMode; 5] = [
        OrderingMode::HeapById,
        OrderingMode::NameAscending,
        OrderingMode::NameDescending,
        OrderingMode::TimestampDesc,
        OrderingMode::Random,
    ];

    /// Selector string, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderingMode::HeapById => "heap_by_id",
            OrderingMode::NameAscending => "name_ascending",
            OrderingMode::NameDescending => "name_descending",
            OrderingMode::TimestampDesc => "timestamp_desc",
            OrderingMode::Random => "random",
        }
    }

    /// Heading shown above a table ordered this way
    pub fn label(&self) -> &'static str {
        match self {
            OrderingMode::HeapById => "Members (ids ordered by heap sort)",
            OrderingMode::NameAscending => "Members (alphabetical, A-Z)",
            OrderingMode::NameDescending => "Members (alphabetical, Z-A)",
            OrderingMode::TimestampDesc => {
                "Members (by timestamp, newest first)"
            }
            OrderingMode::Random => "Members (random order)",
        }
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderingMode {
    type Err = OrderingError;

    fn from_str(s: &str) -> Result<Self> {
        OrderingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| OrderingError::UnknownMode(s.to_string()))
    }
}

/// Tunables for the orchestrator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingSettings {
    /// Mode used by [`SortOrchestrator::order_default`]
    pub default_mode: OrderingMode,
    /// Fixed seed for [`OrderingMode::Random`]. Unset draws fresh entropy
    /// on every call.
    pub shuffle_seed: Option<u64>,
}

/// What a single ordering call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingOutcome {
    /// The ordering that was applied
    pub mode: OrderingMode,
    /// Number of records in the ordered sequence
    pub records: usize,
    /// Heapify invocations, for [`OrderingMode::HeapById`] only
    pub heap_steps: Option<usize>,
    /// Top-level heapify passes, for [`OrderingMode::HeapById`] only
    pub heap_passes: Option<usize>,
}

/// Selects and applies orderings
#[derive(Debug, Clone, Default)]
pub struct SortOrchestrator {
    settings: OrderingSettings,
}

impl SortOrchestrator {
    /// Orchestrator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Orchestrator with the given default mode and shuffle seed
    pub fn with_settings(settings: OrderingSettings) -> Self {
        Self { settings }
    }

    /// Current settings
    pub fn settings(&self) -> &OrderingSettings {
        &self.settings
    }

    /// The comparison or shuffle strategy behind `mode`
    ///
    /// Returns `None` for [`OrderingMode::HeapById`], which runs on the
    /// instrumented engine instead.
    pub fn strategy(
        &self,
        mode: OrderingMode,
    ) -> Option<Box<dyn OrderingStrategy>> {
        let strategy: Box<dyn OrderingStrategy> = match mode {
            OrderingMode::HeapById => return None,
            OrderingMode::NameAscending => {
                Box::new(FieldSort::new(NameField, false))
            }
            OrderingMode::NameDescending => {
                Box::new(FieldSort::new(NameField, true))
            }
            OrderingMode::TimestampDesc => {
                Box::new(FieldSort::new(TimestampField, true))
            }
            OrderingMode::Random => match self.settings.shuffle_seed {
                Some(seed) => Box::new(RandomOrder::seeded(seed)),
                None => Box::new(RandomOrder::new()),
            },
        };
        Some(strategy)
    }

    /// Reorder `records` in place under `mode`
    pub fn order(
        &self,
        records: &mut [Record],
        mode: OrderingMode,
    ) -> Result<OrderingOutcome> {
        let started = Instant::now();
        let mut outcome = OrderingOutcome {
            mode,
            records: records.len(),
            heap_steps: None,
            heap_passes: None,
        };

        let result = match self.strategy(mode) {
            Some(strategy) => strategy.apply(records),
            None => {
                let mut engine = HeapSortEngine::new();
                engine.sort(records).map(|steps| {
                    outcome.heap_steps = Some(steps);
                    outcome.heap_passes = Some(engine.pass_count());
                })
            }
        };

        if let Err(err) = result {
            warn!(
                mode = %mode,
                records = records.len(),
                error = %err,
                "ordering failed"
            );
            return Err(err);
        }

        debug!(
            mode = %mode,
            records = outcome.records,
            heap_steps = outcome.heap_steps,
            elapsed_us = started.elapsed().as_micros() as u64,
            "records ordered"
        );
        Ok(outcome)
    }

    /// Parse `mode` and order; an unknown selector fails before the
    /// sequence is touched
    pub fn order_named(
        &self,
        records: &mut [Record],
        mode: &str,
    ) -> Result<OrderingOutcome> {
        let mode = mode.parse()?;
        self.order(records, mode)
    }

    /// Order with the configured default mode
    pub fn order_default(
        &self,
        records: &mut [Record],
    ) -> Result<OrderingOutcome> {
        self.order(records, self.settings.default_mode)
    }

    /// Fetch the current records from `source` and order them
    pub fn fetch_and_order<S: RecordSource + ?Sized>(
        &self,
        source: &S,
        mode: OrderingMode,
    ) -> Result<(Vec<Record>, OrderingOutcome)> {
        let mut records = source.fetch()?;
        info!(mode = %mode, records = records.len(), "fetched records");
        let outcome = self.order(&mut records, mode)?;
        Ok((records, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::RecordBuilder;

    fn member(id: &str, name: &str, timestamp: &str) -> Record {
        RecordBuilder::new()
            .id(id)
            .name(name)
            .first_name("Test")
            .email(format!("{}@example.org", name.to_lowercase()))
            .timestamp(timestamp)
            .build()
    }

    fn sample() -> Vec<Record> {
        vec![
            member("3", "Fischer", "2024-01-01 10:00:00"),
            member("1", "Bauer", "2024-06-01 09:00:00"),
            member("2", "Wagner", "2023-12-31 23:59:59"),
        ]
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().filter_map(Record::name).collect()
    }

    #[test]
    fn mode_selectors_round_trip() {
        for mode in OrderingMode::ALL {
            assert_eq!(mode.as_str().parse::<OrderingMode>(), Ok(mode));
        }
    }

    #[test]
    fn unknown_mode_is_rejected_without_mutation() {
        let orchestrator = SortOrchestrator::new();
        let mut records = sample();
        let before = records.clone();

        let err = orchestrator
            .order_named(&mut records, "by_email")
            .unwrap_err();

        assert_eq!(err, OrderingError::UnknownMode("by_email".to_string()));
        assert_eq!(records, before);
    }

    #[test]
    fn heap_mode_reports_steps() {
        let orchestrator = SortOrchestrator::new();
        let mut records = sample();

        let outcome = orchestrator
            .order(&mut records, OrderingMode::HeapById)
            .unwrap();

        assert_eq!(names(&records), vec!["Bauer", "Wagner", "Fischer"]);
        assert_eq!(outcome.records, 3);
        assert!(outcome.heap_steps.is_some());
        assert_eq!(outcome.heap_passes, Some(1 + 2));
    }

    #[test]
    fn comparison_modes_report_no_steps() {
        let orchestrator = SortOrchestrator::new();

        let mut records = sample();
        let outcome = orchestrator
            .order(&mut records, OrderingMode::NameDescending)
            .unwrap();
        assert_eq!(names(&records), vec!["Wagner", "Fischer", "Bauer"]);
        assert_eq!(outcome.heap_steps, None);

        let mut records = sample();
        orchestrator
            .order(&mut records, OrderingMode::TimestampDesc)
            .unwrap();
        assert_eq!(names(&records), vec!["Bauer", "Fischer", "Wagner"]);
    }

    #[test]
    fn default_mode_comes_from_settings() {
        let orchestrator = SortOrchestrator::with_settings(OrderingSettings {
            default_mode: OrderingMode::NameAscending,
            shuffle_seed: None,
        });
        let mut records = sample();

        let outcome = orchestrator.order_default(&mut records).unwrap();

        assert_eq!(outcome.mode, OrderingMode::NameAscending);
        assert_eq!(names(&records), vec!["Bauer", "Fischer", "Wagner"]);
    }

    #[test]
    fn seeded_random_mode_is_repeatable() {
        let orchestrator = SortOrchestrator::with_settings(OrderingSettings {
            default_mode: OrderingMode::Random,
            shuffle_seed: Some(99),
        });
        let original: Vec<Record> = (0..16_i64)
            .map(|id| RecordBuilder::new().id(id).build())
            .collect();

        let mut a = original.clone();
        let mut b = original.clone();
        orchestrator.order_default(&mut a).unwrap();
        orchestrator.order_default(&mut b).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn fetch_and_order_pulls_from_source() {
        let orchestrator = SortOrchestrator::new();
        let source = sample();

        let (ordered, outcome) = orchestrator
            .fetch_and_order(&source, OrderingMode::NameAscending)
            .unwrap();

        assert_eq!(names(&ordered), vec!["Bauer", "Fischer", "Wagner"]);
        assert_eq!(outcome.records, 3);
        // the source itself is not reordered
        assert_eq!(names(&source), vec!["Fischer", "Bauer", "Wagner"]);
    }

    #[test]
    fn settings_deserialize_with_defaults() {
        let settings: OrderingSettings =
            serde_json::from_str(r#"{"shuffle_seed": 5}"#).unwrap();
        assert_eq!(settings.default_mode, OrderingMode::HeapById);
        assert_eq!(settings.shuffle_seed, Some(5));

        let settings: OrderingSettings =
            serde_json::from_str(r#"{"default_mode": "timestamp_desc"}"#)
                .unwrap();
        assert_eq!(settings.default_mode, OrderingMode::TimestampDesc);
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<_> =
            OrderingMode::ALL.iter().map(OrderingMode::label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), OrderingMode::ALL.len());
    }
}
