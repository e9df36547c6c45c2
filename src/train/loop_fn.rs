use std::time::Instant;

use log::{debug, info};

use crate::data::Example;
use crate::error::{NetworkError, Result};
use crate::loss::mean_squared_error;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` online for `config.epochs` epochs and returns the mean
/// squared error of the **last completed epoch** (0.0 when nothing ran).
///
/// Every epoch visits `examples` in the given order; each example is
/// forward-propagated and immediately backpropagated, so later examples see
/// the weights updated by earlier ones. There is no shuffling and no early
/// stop: exactly `epochs * examples.len()` updates are applied.
///
/// # Errors
/// Returns `InputSizeMismatch` or `TargetSizeMismatch` if any example does
/// not fit the network. All examples are checked before the first update, so
/// a rejected dataset leaves the weights untouched.
pub fn train_loop(
    network: &mut Network,
    examples: &[Example],
    config: &TrainConfig,
) -> Result<f64> {
    check_examples(network, examples)?;

    info!(
        "training {:?} for {} epochs over {} examples",
        network.layer_sizes(),
        config.epochs,
        examples.len()
    );

    let t_total = Instant::now();
    let mut last_error = 0.0;

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        let mean_error = run_one_epoch(network, examples)?;
        last_error = mean_error;

        if config.log_every > 0 && epoch % config.log_every == 0 {
            debug!("epoch {epoch}/{}: mean error = {mean_error:.6}", config.epochs);
        }

        if let Some(ref tx) = config.progress_tx {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                mean_error,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            // A vanished listener is not a reason to stop.
            let _ = tx.send(stats);
        }
    }

    info!(
        "training finished in {} ms, final mean error = {last_error:.6}",
        t_total.elapsed().as_millis()
    );
    Ok(last_error)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Runs one online pass over the data. Returns the mean error over all samples.
fn run_one_epoch(network: &mut Network, examples: &[Example]) -> Result<f64> {
    if examples.is_empty() {
        return Ok(0.0);
    }

    let mut total_error = 0.0;
    for example in examples {
        let activations = network.forward(&example.inputs)?;
        total_error += mean_squared_error(activations.final_layer(), &example.targets);
        network.backward(&activations, &example.targets)?;
    }

    Ok(total_error / examples.len() as f64)
}

fn check_examples(network: &Network, examples: &[Example]) -> Result<()> {
    for example in examples {
        if example.inputs.len() != network.input_size() {
            return Err(NetworkError::InputSizeMismatch {
                expected: network.input_size(),
                got: example.inputs.len(),
            });
        }
        if example.targets.len() != network.output_size() {
            return Err(NetworkError::TargetSizeMismatch {
                expected: network.output_size(),
                got: example.targets.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Task;
    use crate::network::spec::NetworkSpec;
    use rand::{rngs::StdRng, SeedableRng};
    use std::sync::mpsc;

    fn build(layer_sizes: Vec<usize>, seed: u64) -> Network {
        let mut rng = StdRng::seed_from_u64(seed);
        Network::with_rng(&NetworkSpec::new(layer_sizes), &mut rng).unwrap()
    }

    #[test]
    fn zero_epochs_leaves_weights_unchanged() {
        let mut network = build(vec![2, 1], 21);
        let before = network.weights();
        let error = train_loop(&mut network, Task::Xor.dataset().examples(), &TrainConfig::new(0)).unwrap();
        assert_eq!(error, 0.0);
        assert_eq!(network.weights(), before);
    }

    #[test]
    fn empty_dataset_is_a_no_op() {
        let mut network = build(vec![2, 2, 1], 22);
        let before = network.weights();
        train_loop(&mut network, &[], &TrainConfig::new(10)).unwrap();
        assert_eq!(network.weights(), before);
    }

    #[test]
    fn one_epoch_equals_manual_forward_backward_sequence() {
        let data = Task::Xor.dataset();
        let mut trained = build(vec![2, 2, 1], 23);
        let mut manual = trained.clone();

        train_loop(&mut trained, data.examples(), &TrainConfig::new(1)).unwrap();
        for example in data.examples() {
            let activations = manual.forward(&example.inputs).unwrap();
            manual.backward(&activations, &example.targets).unwrap();
        }

        assert_eq!(trained.weights(), manual.weights());
    }

    #[test]
    fn bad_example_anywhere_aborts_before_any_update() {
        let mut data = Task::Xor.dataset().examples().to_vec();
        data.push(Example::new(vec![1.0, 1.0], vec![0.0, 1.0]));
        let mut network = build(vec![2, 2, 1], 24);
        let before = network.weights();

        let err = train_loop(&mut network, &data, &TrainConfig::new(5)).unwrap_err();
        assert_eq!(err, NetworkError::TargetSizeMismatch { expected: 1, got: 2 });
        assert_eq!(network.weights(), before);

        data.insert(0, Example::new(vec![1.0], vec![0.0]));
        let err = network.train(&data, 5).unwrap_err();
        assert_eq!(err, NetworkError::InputSizeMismatch { expected: 2, got: 1 });
        assert_eq!(network.weights(), before);
    }

    #[test]
    fn progress_channel_receives_one_stat_per_epoch() {
        let (tx, rx) = mpsc::channel();
        let mut network = build(vec![2, 2, 1], 25);
        let config = TrainConfig::new(3).with_progress(tx);

        let last = train_loop(&mut network, Task::Xor.dataset().examples(), &config).unwrap();
        drop(config);

        let stats: Vec<EpochStats> = rx.iter().collect();
        assert_eq!(stats.iter().map(|s| s.epoch).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(stats.iter().all(|s| s.total_epochs == 3));
        assert_eq!(stats[2].mean_error, last);
    }

    #[test]
    fn dropped_receiver_does_not_cut_training_short() {
        let data = Task::Xor.dataset();
        let (tx, rx) = mpsc::channel();
        drop(rx);

        let mut with_channel = build(vec![2, 2, 1], 26);
        let mut without = with_channel.clone();
        train_loop(&mut with_channel, data.examples(), &TrainConfig::new(20).with_progress(tx)).unwrap();
        train_loop(&mut without, data.examples(), &TrainConfig::new(20)).unwrap();

        assert_eq!(with_channel.weights(), without.weights());
    }
}
