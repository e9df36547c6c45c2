use crate::data::Dataset;
use crate::error::Result;
use crate::network::Network;

/// Renders one line per example: its inputs, expected targets and the
/// network's current outputs (three decimals).
pub fn format_report(network: &Network, dataset: &Dataset) -> Result<String> {
    let mut report = String::from("Results after training:\n");
    for example in dataset.examples() {
        let output = network.predict(&example.inputs)?;
        report.push_str(&format!(
            "Input: [{}] Expected: [{}] Output: [{}]\n",
            join(&example.inputs, |x| x.to_string()),
            join(&example.targets, |x| x.to_string()),
            join(&output, |x| format!("{x:.3}")),
        ));
    }
    Ok(report)
}

fn join(values: &[f64], fmt: impl Fn(f64) -> String) -> String {
    values.iter().map(|&v| fmt(v)).collect::<Vec<_>>().join(",")
}
