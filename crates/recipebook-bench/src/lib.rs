//! Benchmark harness comparing the two recipe representations.
//!
//! For each of `N` synthetic recipes the harness times add, get and delete
//! against a map-backed [`RecipeStore`](recipebook_store::RecipeStore) and
//! a [`RecipeList`](recipebook_store::RecipeList), both seeded from a copy
//! of the live recipes. The live store is only ever borrowed immutably.
//!
//! - [`TestCount`] -- validated, positive number of trials
//! - [`BenchmarkHarness`] -- `Idle -> Running -> DisplayingResults -> Idle`
//! - [`BenchReport`] -- per-operation samples, means and totals
//! - [`BarChart`] -- grouped text bar chart of the totals

pub mod chart;
pub mod config;
pub mod error;
pub mod harness;
pub mod report;
pub mod timer;

pub use chart::BarChart;
pub use config::{BenchConfig, TestCount, DEFAULT_TEST_COUNT};
pub use error::{BenchError, BenchResult};
pub use harness::{BenchmarkHarness, HarnessState};
pub use report::{BenchReport, Operation, Representation, ReportSummary};
