use std::time::Instant;

use crate::loss::squared_error::SquaredError;
use crate::network::error::NetworkError;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::observer::{PatternTrace, TrainObserver};
use crate::train::train_config::TrainConfig;

/// One training iteration for a single pattern: forward pass, error
/// computation, weight update. Returns the output the network produced for
/// the pattern, for reporting.
pub fn iterate(
    network: &mut Network,
    input: &[f64],
    target: &[f64],
    learning_rate: f64,
) -> Result<Vec<f64>, NetworkError> {
    let output = network.forward(input)?;
    network.backward(target)?;
    network.update(learning_rate);
    Ok(output)
}

/// Trains `network` for `config.epochs` epochs of online backpropagation and
/// returns the mean per-pattern squared error of the last completed epoch.
///
/// Every epoch visits the full pattern set in the same fixed order; weights
/// are updated after every single pattern. Shuffling, if any, is the dataset
/// loader's business and happens once, before training starts.
///
/// # Arguments
/// - `network`  — mutable reference to the network; modified in place
/// - `inputs`   — training inputs, each a `Vec<f64>` of length `nx`
/// - `targets`  — corresponding targets of length `ny`, parallel to `inputs`
/// - `config`   — epoch count and learning rate
/// - `observer` — optional progress sink, called once per pattern and once
///   per epoch
///
/// # Errors
/// `PatternCountMismatch` if the two slices disagree in length, and any
/// shape error the forward/backward passes raise for individual vectors.
/// An empty training set is a no-op and returns `Ok(0.0)`.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
    mut observer: Option<&mut dyn TrainObserver>,
) -> Result<f64, NetworkError> {
    if inputs.len() != targets.len() {
        return Err(NetworkError::PatternCountMismatch {
            inputs: inputs.len(),
            targets: targets.len(),
        });
    }
    if inputs.is_empty() {
        return Ok(0.0);
    }

    let mut last_train_loss = 0.0;
    let mut index = 0;

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        let mut total_loss = 0.0;

        for (input, target) in inputs.iter().zip(targets.iter()) {
            index += 1;
            let output = iterate(network, input, target, config.learning_rate)?;
            total_loss += SquaredError::loss(&output, target);

            if let Some(obs) = observer.as_deref_mut() {
                obs.on_pattern(&PatternTrace {
                    index,
                    input,
                    target,
                    output: &output,
                });
            }
        }

        last_train_loss = total_loss / inputs.len() as f64;

        if let Some(obs) = observer.as_deref_mut() {
            obs.on_epoch(&EpochStats {
                epoch,
                total_epochs: config.epochs,
                train_loss: last_train_loss,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            });
        }
    }

    Ok(last_train_loss)
}
