use std::fmt;

use crate::report::{BenchReport, Operation, Representation};

const DEFAULT_WIDTH: usize = 40;

/// One bar: a series label and its value in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub series: Representation,
    pub seconds: f64,
}

/// Bars sharing one category on the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGroup {
    pub label: String,
    pub bars: Vec<Bar>,
}

/// Grouped horizontal bar chart rendered as plain text.
///
/// ```text
/// Total Time for Operations - Map vs List
/// Add     Map  |##                  0.0012 s
///         List |==================  0.0102 s
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    title: String,
    groups: Vec<BarGroup>,
    width: usize,
}

impl BarChart {
    /// Total time per operation for both representations.
    pub fn totals(report: &BenchReport) -> Self {
        let groups = Operation::ALL
            .iter()
            .map(|&op| BarGroup {
                label: op.label().to_string(),
                bars: Representation::ALL
                    .iter()
                    .map(|&repr| Bar {
                        series: repr,
                        seconds: report.total(op, repr).as_secs_f64(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            title: "Total Time for Operations - Map vs List".to_string(),
            groups,
            width: DEFAULT_WIDTH,
        }
    }

    /// Maximum bar length in characters (at least 1).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn groups(&self) -> &[BarGroup] {
        &self.groups
    }

    fn max_value(&self) -> f64 {
        self.groups
            .iter()
            .flat_map(|g| g.bars.iter().map(|b| b.seconds))
            .fold(0.0, f64::max)
    }

    /// Length of the bar for `value`; non-zero values always get at least
    /// one cell.
    fn bar_len(&self, value: f64, max: f64) -> usize {
        if max <= 0.0 || value <= 0.0 {
            return 0;
        }
        let scaled = (value / max * self.width as f64).round() as usize;
        scaled.clamp(1, self.width)
    }

    /// Render the chart. Each line ends with a newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn fill_char(series: Representation) -> char {
    match series {
        Representation::Map => '#',
        Representation::List => '=',
    }
}

impl fmt::Display for BarChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = self.max_value();
        let label_width = self.groups.iter().map(|g| g.label.len()).max().unwrap_or(0);

        writeln!(f, "{}", self.title)?;
        for group in &self.groups {
            for (i, bar) in group.bars.iter().enumerate() {
                let label = if i == 0 { group.label.as_str() } else { "" };
                let len = self.bar_len(bar.seconds, max);
                let fill: String = std::iter::repeat(fill_char(bar.series)).take(len).collect();
                writeln!(
                    f,
                    "{label:<label_width$}  {series:<4} |{fill:<width$}  {value:.4} s",
                    series = bar.series.label(),
                    width = self.width,
                    value = bar.seconds,
                )?;
            }
        }
        writeln!(
            f,
            "Legend: {} Map operations, {} List operations",
            fill_char(Representation::Map),
            fill_char(Representation::List)
        )
    }
}
