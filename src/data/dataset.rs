use serde::{Serialize, Deserialize};
use crate::error::ConfigError;

/// One labeled training pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub inputs: Vec<f64>,
    pub targets: Vec<f64>,
}

impl Example {
    pub fn new(inputs: Vec<f64>, targets: Vec<f64>) -> Example {
        Example { inputs, targets }
    }
}

impl From<(Vec<f64>, Vec<f64>)> for Example {
    fn from((inputs, targets): (Vec<f64>, Vec<f64>)) -> Example {
        Example::new(inputs, targets)
    }
}

/// An ordered list of examples that all share the same input and target
/// widths. Order matters: training visits the examples exactly as stored.
///
/// JSON layout:
/// ```json
/// { "examples": [ { "inputs": [0, 1], "targets": [1] } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    examples: Vec<Example>,
}

impl Dataset {
    /// Wraps `examples`, rejecting empty vectors and mixed widths.
    pub fn new(examples: Vec<Example>) -> Result<Dataset, ConfigError> {
        let dataset = Dataset { examples };
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn from_pairs(pairs: Vec<(Vec<f64>, Vec<f64>)>) -> Result<Dataset, ConfigError> {
        Dataset::new(pairs.into_iter().map(Example::from).collect())
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Width of every input vector, or `None` for an empty dataset.
    pub fn input_width(&self) -> Option<usize> {
        self.examples.first().map(|e| e.inputs.len())
    }

    /// Width of every target vector, or `None` for an empty dataset.
    pub fn target_width(&self) -> Option<usize> {
        self.examples.first().map(|e| e.targets.len())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let (Some(inputs), Some(targets)) = (self.input_width(), self.target_width()) else {
            return Ok(());
        };
        if inputs == 0 || targets == 0 {
            return Err(ConfigError::InconsistentDataset(
                "inputs and targets must not be empty".into(),
            ));
        }
        for (row, example) in self.examples.iter().enumerate() {
            if example.inputs.len() != inputs || example.targets.len() != targets {
                return Err(ConfigError::InconsistentDataset(format!(
                    "row {row} has {} inputs and {} targets, expected {inputs} and {targets}",
                    example.inputs.len(),
                    example.targets.len()
                )));
            }
        }
        Ok(())
    }

    /// Serializes the dataset to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a dataset from a JSON file and checks its widths.
    pub fn load_json(path: &str) -> Result<Dataset, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let dataset: Dataset = serde_json::from_reader(reader)?;
        dataset.validate()?;
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_come_from_first_row() {
        let ds = Dataset::from_pairs(vec![
            (vec![0.0, 1.0, 1.0], vec![1.0, 0.0]),
            (vec![1.0, 1.0, 1.0], vec![1.0, 1.0]),
        ])
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.input_width(), Some(3));
        assert_eq!(ds.target_width(), Some(2));
    }

    #[test]
    fn empty_dataset_has_no_widths() {
        let ds = Dataset::new(Vec::new()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.input_width(), None);
    }

    #[test]
    fn mixed_widths_are_rejected() {
        let err = Dataset::from_pairs(vec![
            (vec![0.0, 1.0], vec![1.0]),
            (vec![1.0], vec![0.0]),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InconsistentDataset(_)));
    }

    #[test]
    fn json_layout() {
        let ds: Dataset = serde_json::from_str(
            r#"{ "examples": [ { "inputs": [0, 1], "targets": [1] } ] }"#,
        )
        .unwrap();
        assert_eq!(ds.examples(), &[Example::new(vec![0.0, 1.0], vec![1.0])]);
    }

    #[test]
    fn load_checks_widths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{ "examples": [ { "inputs": [0, 1], "targets": [1] },
                               { "inputs": [1], "targets": [1] } ] }"#,
        )
        .unwrap();
        let err = Dataset::load_json(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::InconsistentDataset(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let path = path.to_str().unwrap();
        let ds = Dataset::from_pairs(vec![(vec![0.5, 0.25], vec![1.0])]).unwrap();
        ds.save_json(path).unwrap();
        assert_eq!(Dataset::load_json(path).unwrap(), ds);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Dataset::load_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
