//! Drivers that learn the small boolean functions on a fixed 2×2×1 network.

use crate::network::error::NetworkError;
use crate::network::network::Network;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_loop;

type Gate = [([f64; 2], [f64; 1]); 4];

const AND_TABLE: Gate = [
    ([0.0, 0.0], [0.0]),
    ([0.0, 1.0], [0.0]),
    ([1.0, 0.0], [0.0]),
    ([1.0, 1.0], [1.0]),
];

const OR_TABLE: Gate = [
    ([0.0, 0.0], [0.0]),
    ([0.0, 1.0], [1.0]),
    ([1.0, 0.0], [1.0]),
    ([1.0, 1.0], [1.0]),
];

const XOR_TABLE: Gate = [
    ([0.0, 0.0], [0.0]),
    ([0.0, 1.0], [1.0]),
    ([1.0, 0.0], [1.0]),
    ([1.0, 1.0], [0.0]),
];

fn train_gate(table: &Gate, epochs: usize) -> Result<Network, NetworkError> {
    let mut network = Network::new(2, 2, 1)?;
    let inputs: Vec<Vec<f64>> = table.iter().map(|(i, _)| i.to_vec()).collect();
    let targets: Vec<Vec<f64>> = table.iter().map(|(_, t)| t.to_vec()).collect();
    train_loop(&mut network, &inputs, &targets, &TrainConfig::new(epochs), None)?;
    Ok(network)
}

/// Trains a 2×2×1 network on the AND truth table for `epochs` epochs.
pub fn train_and(epochs: usize) -> Result<Network, NetworkError> {
    train_gate(&AND_TABLE, epochs)
}

/// Trains a 2×2×1 network on the OR truth table for `epochs` epochs.
pub fn train_or(epochs: usize) -> Result<Network, NetworkError> {
    train_gate(&OR_TABLE, epochs)
}

/// Trains a 2×2×1 network on the XOR truth table for `epochs` epochs.
///
/// XOR is not linearly separable and two hidden units leave the network with
/// no spare capacity, so this is not guaranteed to converge within any fixed
/// epoch budget. A known limitation, kept for parity with AND/OR.
pub fn train_xor(epochs: usize) -> Result<Network, NetworkError> {
    train_gate(&XOR_TABLE, epochs)
}
