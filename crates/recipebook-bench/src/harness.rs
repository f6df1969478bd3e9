use std::time::Duration;

use recipebook_store::{InMemoryStorage, RecipeCollection, RecipeList, RecipeStore, StoreResult};
use recipebook_types::RecipeMap;
use tracing::{debug, info};

use crate::config::{BenchConfig, TestCount};
use crate::error::BenchResult;
use crate::report::{BenchReport, Operation, Representation};
use crate::timer::min_of_repeats;

const SAMPLE_INGREDIENTS: [&str; 2] = ["Ingredient1", "Ingredient2"];
const SAMPLE_INSTRUCTIONS: &str = "Mix well & serve hot.. or cold.";

/// Name of the synthetic recipe used in trial `i`.
pub fn sample_name(i: usize) -> String {
    format!("TestRecipe{i}")
}

/// Where the harness is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HarnessState {
    /// Waiting for a test count.
    #[default]
    Idle,
    /// Timing trials. Runs are synchronous, so this is only held inside
    /// [`BenchmarkHarness::run`] and never seen between calls.
    Running,
    /// A finished run is available from [`BenchmarkHarness::report`].
    DisplayingResults,
}

/// Runs map-vs-list timing comparisons.
///
/// A run can start from `Idle` or from `DisplayingResults` (replacing the
/// previous results). Rejected input never changes the state. A report is
/// held exactly while the state is `DisplayingResults`.
#[derive(Debug, Default)]
pub struct BenchmarkHarness {
    config: BenchConfig,
    state: HarnessState,
    report: Option<BenchReport>,
}

impl BenchmarkHarness {
    pub fn new(config: BenchConfig) -> Self {
        Self {
            config,
            state: HarnessState::Idle,
            report: None,
        }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn state(&self) -> HarnessState {
        self.state
    }

    /// Results of the last run, if they are still being displayed.
    pub fn report(&self) -> Option<&BenchReport> {
        self.report.as_ref()
    }

    /// Validate raw user input and run. Invalid input is rejected before
    /// any timing happens.
    pub fn submit(&mut self, input: &str, live: &RecipeMap) -> BenchResult<&BenchReport> {
        let count = TestCount::parse(input)?;
        self.run(live, count)
    }

    /// Time `count` trials against copies of `live`.
    pub fn run(&mut self, live: &RecipeMap, count: TestCount) -> BenchResult<&BenchReport> {
        self.state = HarnessState::Running;
        self.report = None;
        info!(test_count = count.get(), seed_recipes = live.len(), "benchmark started");

        let report = match run_trials(&self.config, live, count) {
            Ok(report) => report,
            Err(e) => {
                self.state = HarnessState::Idle;
                return Err(e);
            }
        };
        info!(test_count = count.get(), "benchmark finished");

        self.state = HarnessState::DisplayingResults;
        Ok(self.report.insert(report))
    }

    /// Close the results and return to `Idle`.
    pub fn dismiss(&mut self) -> Option<BenchReport> {
        self.state = HarnessState::Idle;
        self.report.take()
    }
}

/// Run every trial and collect the samples.
///
/// Each trial gets a fresh map store (backed by [`InMemoryStorage`]) and a
/// fresh list, both seeded from a copy of `live`.
pub fn run_trials(config: &BenchConfig, live: &RecipeMap, count: TestCount) -> BenchResult<BenchReport> {
    let ingredients: Vec<String> = SAMPLE_INGREDIENTS.iter().map(|s| s.to_string()).collect();
    let mut report = BenchReport::new(count.get(), *config);

    for i in 0..count.get() {
        let name = sample_name(i);
        let mut map = RecipeStore::open(InMemoryStorage::with_recipes(live.clone()));
        let mut list = RecipeList::from_map(live);

        let map_times = time_trial(config, &mut map, &name, &ingredients)?;
        let list_times = time_trial(config, &mut list, &name, &ingredients)?;

        for (op, (map_time, list_time)) in Operation::ALL.iter().zip(map_times.into_iter().zip(list_times)) {
            report.record(*op, Representation::Map, map_time);
            report.record(*op, Representation::List, list_time);
        }
    }

    debug!(test_count = count.get(), "collected benchmark samples");
    Ok(report)
}

/// Time add, get and delete of one sample recipe, in that order.
fn time_trial<C: RecipeCollection>(
    config: &BenchConfig,
    collection: &mut C,
    name: &str,
    ingredients: &[String],
) -> BenchResult<[Duration; 3]> {
    let add = measure(config, || collection.add(name, ingredients, SAMPLE_INSTRUCTIONS))?;
    // A zero repeat count would leave the sample absent for the get timing.
    collection.add(name, ingredients, SAMPLE_INSTRUCTIONS)?;
    let get = min_of_repeats(config, || collection.get(name).is_some());
    let delete = measure(config, || collection.delete(name))?;
    Ok([add, get, delete])
}

fn measure<F>(config: &BenchConfig, mut op: F) -> BenchResult<Duration>
where
    F: FnMut() -> StoreResult<bool>,
{
    let mut failure = None;
    let elapsed = min_of_repeats(config, || match op() {
        Ok(changed) => changed,
        Err(e) => {
            failure.get_or_insert(e);
            false
        }
    });
    match failure {
        Some(e) => Err(e.into()),
        None => Ok(elapsed),
    }
}
