/// Mean squared error between a network's outputs and the targets of one
/// example. Used only for reporting; the weight update uses the raw
/// `target - output` error.
pub fn mean_squared_error(outputs: &[f64], targets: &[f64]) -> f64 {
    let squared: f64 = outputs.iter().zip(targets)
        .map(|(o, t)| (t - o) * (t - o))
        .sum();
    squared / outputs.len() as f64
}
