use serde::{Serialize, Deserialize};
use crate::error::{ConfigError, NetworkError};

pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_WEIGHT_MIN: f64 = -5.0;
pub const DEFAULT_WEIGHT_MAX: f64 = 5.0;

/// Everything needed to build a `Network`: the layer sizes (input first,
/// output last), the fixed learning rate, and the bounds that initial weights
/// are drawn from.
///
/// Missing fields in a JSON file fall back to the defaults
/// (learning rate 0.1, weights in [-5, 5)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub layer_sizes: Vec<usize>,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_weight_min")]
    pub weight_min: f64,
    #[serde(default = "default_weight_max")]
    pub weight_max: f64,
}

fn default_learning_rate() -> f64 { DEFAULT_LEARNING_RATE }
fn default_weight_min() -> f64 { DEFAULT_WEIGHT_MIN }
fn default_weight_max() -> f64 { DEFAULT_WEIGHT_MAX }

impl NetworkSpec {
    /// Spec with the given layer sizes and default hyperparameters.
    pub fn new(layer_sizes: Vec<usize>) -> NetworkSpec {
        NetworkSpec {
            layer_sizes,
            learning_rate: DEFAULT_LEARNING_RATE,
            weight_min: DEFAULT_WEIGHT_MIN,
            weight_max: DEFAULT_WEIGHT_MAX,
        }
    }

    /// Builds `[inputs] ++ hidden ++ [outputs]`.
    pub fn from_hidden(inputs: usize, hidden: &[usize], outputs: usize) -> NetworkSpec {
        let mut layer_sizes = Vec::with_capacity(hidden.len() + 2);
        layer_sizes.push(inputs);
        layer_sizes.extend_from_slice(hidden);
        layer_sizes.push(outputs);
        NetworkSpec::new(layer_sizes)
    }

    /// Sets the fixed learning rate. The value is taken as-is: zero, negative
    /// or NaN rates are not rejected.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> NetworkSpec {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_weight_range(mut self, weight_min: f64, weight_max: f64) -> NetworkSpec {
        self.weight_min = weight_min;
        self.weight_max = weight_max;
        self
    }

    /// Checks the layer sizes and the weight range.
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.layer_sizes.len() < 2 {
            return Err(NetworkError::InvalidTopology(format!(
                "at least 2 layers are required, got {}",
                self.layer_sizes.len()
            )));
        }
        if let Some(layer) = self.layer_sizes.iter().position(|&size| size == 0) {
            return Err(NetworkError::InvalidTopology(format!("layer {layer} has no neurons")));
        }
        // Written negated so that NaN bounds are rejected too; infinite
        // bounds would make every drawn weight NaN.
        let finite = self.weight_min.is_finite() && self.weight_max.is_finite();
        if !finite || !(self.weight_min < self.weight_max) {
            return Err(NetworkError::InvalidRange { min: self.weight_min, max: self.weight_max });
        }
        Ok(())
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file and validates it.
    pub fn load_json(path: &str) -> Result<NetworkSpec, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: NetworkSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }
}

/// Parses a hidden-layer description: a layer count and a comma-separated
/// list of neuron counts, one per hidden layer.
///
/// A count of zero accepts an empty (or blank) list.
pub fn parse_hidden_layers(count: &str, neurons: &str) -> Result<Vec<usize>, ConfigError> {
    let count: usize = count
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidLayerCount(count.to_owned()))?;

    let hidden: Vec<usize> = if neurons.trim().is_empty() {
        Vec::new()
    } else {
        neurons
            .split(',')
            .map(|s| {
                let s = s.trim();
                s.parse::<usize>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| ConfigError::InvalidNeuronCount(s.to_owned()))
            })
            .collect::<Result<_, _>>()?
    };

    if hidden.len() != count {
        return Err(ConfigError::LayerCountMismatch { count, given: hidden.len() });
    }
    Ok(hidden)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_hyperparameters() {
        let spec = NetworkSpec::new(vec![2, 2, 1]);
        assert_eq!(spec.learning_rate, 0.1);
        assert_eq!(spec.weight_min, -5.0);
        assert_eq!(spec.weight_max, 5.0);
    }

    #[test]
    fn from_hidden_wraps_inputs_and_outputs() {
        let spec = NetworkSpec::from_hidden(3, &[4, 5], 2);
        assert_eq!(spec.layer_sizes, vec![3, 4, 5, 2]);
        assert_eq!(NetworkSpec::from_hidden(2, &[], 1).layer_sizes, vec![2, 1]);
    }

    #[test]
    fn single_layer_is_rejected() {
        let err = NetworkSpec::new(vec![3]).validate().unwrap_err();
        assert!(matches!(err, NetworkError::InvalidTopology(_)));
    }

    #[test]
    fn zero_sized_layer_is_rejected() {
        let err = NetworkSpec::new(vec![2, 0, 1]).validate().unwrap_err();
        assert!(matches!(err, NetworkError::InvalidTopology(_)));
    }

    #[test]
    fn inverted_or_empty_range_is_rejected() {
        for (min, max) in [
            (1.0, -1.0),
            (0.5, 0.5),
            (f64::NAN, 1.0),
            (f64::NEG_INFINITY, 5.0),
            (-5.0, f64::INFINITY),
        ] {
            let err = NetworkSpec::new(vec![2, 1])
                .with_weight_range(min, max)
                .validate()
                .unwrap_err();
            assert!(matches!(err, NetworkError::InvalidRange { .. }));
        }
    }

    #[test]
    fn learning_rate_is_not_range_checked() {
        for rate in [0.0, -0.5] {
            let spec = NetworkSpec::new(vec![2, 1]).with_learning_rate(rate);
            assert!(spec.validate().is_ok());
            assert_eq!(spec.learning_rate, rate);
        }
    }

    #[test]
    fn json_defaults_fill_missing_fields() {
        let spec: NetworkSpec = serde_json::from_str(r#"{ "layer_sizes": [3, 2] }"#).unwrap();
        assert_eq!(spec, NetworkSpec::new(vec![3, 2]));
    }

    #[test]
    fn save_and_load_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.json");
        let path = path.to_str().unwrap();

        let spec = NetworkSpec::new(vec![2, 3, 1]).with_learning_rate(0.25);
        spec.save_json(path).unwrap();
        assert_eq!(NetworkSpec::load_json(path).unwrap(), spec);
    }

    #[test]
    fn load_rejects_invalid_topology() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "layer_sizes": [4] }"#).unwrap();

        let err = NetworkSpec::load_json(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::Network(NetworkError::InvalidTopology(_))));
    }

    #[test]
    fn parses_hidden_layer_list() {
        assert_eq!(parse_hidden_layers("2", "3, 4").unwrap(), vec![3, 4]);
        assert_eq!(parse_hidden_layers(" 1 ", "5").unwrap(), vec![5]);
        assert!(parse_hidden_layers("0", "").unwrap().is_empty());
    }

    #[test]
    fn hidden_layer_errors() {
        assert!(matches!(parse_hidden_layers("-1", "2"), Err(ConfigError::InvalidLayerCount(_))));
        assert!(matches!(parse_hidden_layers("1", "x"), Err(ConfigError::InvalidNeuronCount(_))));
        assert!(matches!(parse_hidden_layers("1", "0"), Err(ConfigError::InvalidNeuronCount(_))));
        assert!(matches!(
            parse_hidden_layers("2", "3"),
            Err(ConfigError::LayerCountMismatch { count: 2, given: 1 })
        ));
    }
}
