use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::data::dataset::{Dataset, Example};

/// The toy problems the trainer ships with.
///
/// - `Xor`       — 2 inputs → 1 output: `a XOR b`
/// - `XorNor`    — 2 inputs → 2 outputs: `[a XOR b, a NOR b]`
/// - `FullAdder` — 3 inputs → 2 outputs: `[sum, carry]` of the three bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Task {
    Xor,
    XorNor,
    FullAdder,
}

impl Task {
    pub const ALL: [Task; 3] = [Task::Xor, Task::XorNor, Task::FullAdder];

    pub fn name(&self) -> &'static str {
        match self {
            Task::Xor => "xor",
            Task::XorNor => "xor-nor",
            Task::FullAdder => "full-adder",
        }
    }

    pub fn input_size(&self) -> usize {
        match self {
            Task::Xor | Task::XorNor => 2,
            Task::FullAdder => 3,
        }
    }

    pub fn output_size(&self) -> usize {
        match self {
            Task::Xor => 1,
            Task::XorNor | Task::FullAdder => 2,
        }
    }

    /// Every row of the task's truth table, in ascending input order.
    pub fn dataset(&self) -> Dataset {
        let rows: Vec<(Vec<f64>, Vec<f64>)> = match self {
            Task::Xor => vec![
                (vec![0.0, 0.0], vec![0.0]),
                (vec![0.0, 1.0], vec![1.0]),
                (vec![1.0, 0.0], vec![1.0]),
                (vec![1.0, 1.0], vec![0.0]),
            ],
            Task::XorNor => vec![
                (vec![0.0, 0.0], vec![0.0, 1.0]),
                (vec![0.0, 1.0], vec![1.0, 0.0]),
                (vec![1.0, 0.0], vec![1.0, 0.0]),
                (vec![1.0, 1.0], vec![0.0, 0.0]),
            ],
            Task::FullAdder => vec![
                (vec![0.0, 0.0, 0.0], vec![0.0, 0.0]),
                (vec![0.0, 0.0, 1.0], vec![1.0, 0.0]),
                (vec![0.0, 1.0, 0.0], vec![1.0, 0.0]),
                (vec![0.0, 1.0, 1.0], vec![0.0, 1.0]),
                (vec![1.0, 0.0, 0.0], vec![1.0, 0.0]),
                (vec![1.0, 0.0, 1.0], vec![0.0, 1.0]),
                (vec![1.0, 1.0, 0.0], vec![0.0, 1.0]),
                (vec![1.0, 1.0, 1.0], vec![1.0, 1.0]),
            ],
        };
        // Built from fixed tables, so the widths are consistent by construction.
        Dataset::new(rows.into_iter().map(Example::from).collect())
            .unwrap_or_else(|e| unreachable!("built-in dataset is malformed: {e}"))
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Task {
    type Err = String;

    fn from_str(s: &str) -> Result<Task, String> {
        Task::ALL
            .iter()
            .copied()
            .find(|task| task.name() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| {
                let names: Vec<&str> = Task::ALL.iter().map(Task::name).collect();
                format!("unknown task {s:?}, expected one of {}", names.join(", "))
            })
    }
}
