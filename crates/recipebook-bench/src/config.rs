use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BenchError;

/// Test count offered when the user has not chosen one.
pub const DEFAULT_TEST_COUNT: usize = 1000;

/// Timing parameters for a single measurement.
///
/// Each measurement runs the operation `number` times back to back,
/// repeats that `repeat` times, and keeps the fastest repetition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Repetitions per measurement; the minimum is kept.
    pub repeat: usize,
    /// Calls per repetition.
    pub number: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repeat: 5,
            number: 10,
        }
    }
}

/// A validated, strictly positive number of benchmark trials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TestCount(usize);

impl TestCount {
    /// Parse user input. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, BenchError> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| BenchError::NotANumber(trimmed.to_string()))?;
        Self::try_from(value)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for TestCount {
    type Error = BenchError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(BenchError::NonPositive(value));
        }
        usize::try_from(value)
            .map(TestCount)
            .map_err(|_| BenchError::NotANumber(value.to_string()))
    }
}

impl FromStr for TestCount {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Default for TestCount {
    fn default() -> Self {
        TestCount(DEFAULT_TEST_COUNT)
    }
}

impl fmt::Display for TestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
