//! Mushroom-edibility pipeline: load and split the dataset, train a
//! single-hidden-layer network, score it against the held-out test set.
//!
//! Usage:
//!   sporenet <mushrooms.csv> [epochs] [hidden] [train-size] [test-size]

use std::env;
use std::path::Path;

use serde::Serialize;

use sporenet::data::dataset::build_sets;
use sporenet::data::mushroom::{test_classifier, train_classifier};
use sporenet::train::epoch_stats::EpochStats;
use sporenet::train::observer::TrainObserver;
use sporenet::train::train_config::TrainConfig;

/// Machine-readable summary printed once the run finishes.
#[derive(Debug, Serialize)]
struct RunSummary {
    dataset: String,
    inputs: usize,
    hidden: usize,
    outputs: usize,
    epochs: usize,
    learning_rate: f64,
    train_patterns: usize,
    test_patterns: usize,
    final_train_loss: f64,
    success_rate: f64,
}

/// Prints one progress line per epoch; the per-pattern trace would be far
/// too chatty at thousands of patterns per epoch.
struct EpochPrinter {
    last_loss: f64,
}

impl TrainObserver for EpochPrinter {
    fn on_epoch(&mut self, stats: &EpochStats) {
        self.last_loss = stats.train_loss;
        println!(
            "epoch {}/{}: loss = {:.6} ({} ms)",
            stats.epoch, stats.total_epochs, stats.train_loss, stats.elapsed_ms
        );
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).ok_or(
        "usage: sporenet <mushrooms.csv> [epochs] [hidden] [train-size] [test-size]",
    )?;
    let epochs = parse_arg(&args, 2, 1)?;
    let hidden = parse_arg(&args, 3, 20)?;
    let train_size = parse_arg(&args, 4, 6000)?;
    let test_size = parse_arg(&args, 5, 1000)?;

    let (train_set, test_set) = build_sets(Path::new(path), train_size, test_size)?;
    println!(
        "loaded {} training and {} test records from {}",
        train_set.len(),
        test_set.len(),
        path
    );

    let config = TrainConfig::new(epochs);
    let mut printer = EpochPrinter { last_loss: 0.0 };
    let mut network = train_classifier(&train_set, hidden, &config, Some(&mut printer))?;

    let evaluation = test_classifier(&mut network, &test_set)?;
    for (i, (prediction, sample)) in
        evaluation.predictions.iter().zip(&test_set).enumerate()
    {
        println!(
            "the network thinks mushroom {} is {}, it should be {}",
            i + 1,
            prediction,
            sample.label
        );
    }
    println!("\nSuccess rate: {:.2}%", evaluation.success_rate());

    let summary = RunSummary {
        dataset: path.clone(),
        inputs: network.nx(),
        hidden: network.nz(),
        outputs: network.ny(),
        epochs,
        learning_rate: config.learning_rate,
        train_patterns: train_set.len(),
        test_patterns: test_set.len(),
        final_train_loss: printer.last_loss,
        success_rate: evaluation.success_rate(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn parse_arg(args: &[String], index: usize, default: usize) -> Result<usize, String> {
    match args.get(index) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| format!("argument {index} ('{raw}') is not a non-negative integer")),
    }
}
