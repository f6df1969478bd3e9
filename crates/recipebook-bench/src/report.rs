use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::config::BenchConfig;

/// A timed recipe operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Operation {
    Add,
    Get,
    Delete,
}

impl Operation {
    /// All operations, in display order.
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Get, Operation::Delete];

    fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Get => "Get",
            Operation::Delete => "Delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The in-memory layout being measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Representation {
    /// Key-based map lookups.
    Map,
    /// Linear scans over a list of `(name, recipe)` pairs.
    List,
}

impl Representation {
    /// Both representations, in display order.
    pub const ALL: [Representation; 2] = [Representation::Map, Representation::List];

    fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Representation::Map => "Map",
            Representation::List => "List",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Timings from one harness run: one sample per trial for every
/// operation and representation.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchReport {
    test_count: usize,
    config: BenchConfig,
    samples: [[Vec<Duration>; 2]; 3],
}

impl BenchReport {
    pub(crate) fn new(test_count: usize, config: BenchConfig) -> Self {
        let series = || Vec::with_capacity(test_count);
        Self {
            test_count,
            config,
            samples: [
                [series(), series()],
                [series(), series()],
                [series(), series()],
            ],
        }
    }

    pub(crate) fn record(&mut self, op: Operation, repr: Representation, sample: Duration) {
        self.samples[op.index()][repr.index()].push(sample);
    }

    /// Number of trials the run was asked for.
    pub fn test_count(&self) -> usize {
        self.test_count
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Raw samples, one per trial.
    pub fn samples(&self, op: Operation, repr: Representation) -> &[Duration] {
        &self.samples[op.index()][repr.index()]
    }

    /// Sum of all samples.
    pub fn total(&self, op: Operation, repr: Representation) -> Duration {
        self.samples(op, repr).iter().sum()
    }

    /// Mean sample, or zero if there are none.
    pub fn mean(&self, op: Operation, repr: Representation) -> Duration {
        let samples = self.samples(op, repr);
        if samples.is_empty() {
            return Duration::ZERO;
        }
        self.total(op, repr).div_f64(samples.len() as f64)
    }

    /// One line per operation with the mean of each representation in
    /// milliseconds.
    pub fn average_lines(&self) -> Vec<String> {
        Operation::ALL
            .iter()
            .map(|&op| {
                format!(
                    "{op} Operation - Map: {:.6} ms, List: {:.6} ms",
                    as_millis(self.mean(op, Representation::Map)),
                    as_millis(self.mean(op, Representation::List)),
                )
            })
            .collect()
    }

    /// Flattened view for machine-readable output.
    pub fn summary(&self) -> ReportSummary {
        let rows = Operation::ALL
            .iter()
            .flat_map(|&op| {
                Representation::ALL.iter().map(move |&repr| SummaryRow {
                    operation: op,
                    representation: repr,
                    mean_ms: as_millis(self.mean(op, repr)),
                    total_s: self.total(op, repr).as_secs_f64(),
                })
            })
            .collect();
        ReportSummary {
            test_count: self.test_count,
            repeat: self.config.repeat,
            number: self.config.number,
            rows,
        }
    }
}

fn as_millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Serializable summary of a [`BenchReport`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportSummary {
    pub test_count: usize,
    pub repeat: usize,
    pub number: usize,
    pub rows: Vec<SummaryRow>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryRow {
    pub operation: Operation,
    pub representation: Representation,
    pub mean_ms: f64,
    pub total_s: f64,
}
