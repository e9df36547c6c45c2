use std::f64::consts::E;

/// Logistic activation: 1 / (1 + e^-x).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid expressed through its own output,
/// i.e. `output` is already `sigmoid(x)`.
pub fn sigmoid_derivative(output: f64) -> f64 {
    output * (1.0 - output)
}
