pub struct SquaredError;

impl SquaredError {
    /// Sum of squared residuals over one output vector: Σ (expected − predicted)².
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(p, e)| (e - p).powi(2))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perfect_prediction_has_zero_loss() {
        assert_relative_eq!(SquaredError::loss(&[0.0, 1.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn sums_residuals_over_all_outputs() {
        assert_relative_eq!(SquaredError::loss(&[0.5, 0.0], &[1.0, 1.0]), 1.25);
    }
}
