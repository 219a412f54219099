use crate::network::error::NetworkError;
use crate::network::network::Network;

/// Result of evaluating a trained network against a labeled test set.
#[derive(Debug, Clone)]
pub struct Evaluation<L> {
    /// The label the classifier chose for each test pattern, in order.
    pub predictions: Vec<L>,
    /// Number of predictions that matched the ground truth exactly.
    pub correct: usize,
    /// Number of test patterns seen.
    pub total: usize,
}

impl<L> Evaluation<L> {
    /// Exact-match accuracy as a percentage, `correct / total · 100`.
    pub fn success_rate(&self) -> f64 {
        self.correct as f64 / self.total as f64 * 100.0
    }
}

/// Runs the forward pass over every test pattern and scores the classifier.
///
/// `classify` is the translator seam: it maps a raw output vector to a
/// class label, which is compared against the ground-truth label for the
/// same pattern. No weight is touched; the network is only mutable because
/// the forward pass stores its activations in place.
///
/// # Errors
/// `EmptyTestSet` for zero patterns (the success rate would divide by
/// zero), `PatternCountMismatch` if inputs and labels disagree in length.
pub fn evaluate<L, C>(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[L],
    classify: C,
) -> Result<Evaluation<L>, NetworkError>
where
    L: PartialEq,
    C: Fn(&[f64]) -> L,
{
    if inputs.is_empty() {
        return Err(NetworkError::EmptyTestSet);
    }
    if inputs.len() != labels.len() {
        return Err(NetworkError::PatternCountMismatch {
            inputs: inputs.len(),
            targets: labels.len(),
        });
    }

    let mut predictions = Vec::with_capacity(inputs.len());
    let mut correct = 0;

    for (input, label) in inputs.iter().zip(labels.iter()) {
        let output = network.forward(input)?;
        let predicted = classify(&output);
        if predicted == *label {
            correct += 1;
        }
        predictions.push(predicted);
    }

    Ok(Evaluation {
        predictions,
        correct,
        total: inputs.len(),
    })
}

/// Index of the largest value; on ties the first such index wins.
///
/// The first-class tie-break is a deliberate, deterministic choice carried
/// over from the original classifier rule, not a statistical statement.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] {
            best = i;
        }
    }
    best
}
