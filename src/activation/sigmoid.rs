/// The logistic sigmoid `1 / (1 + e^(-v))`.
///
/// Sole nonlinearity of the network, applied to both hidden and output
/// units. Defined for all reals, range is the open interval (0, 1) —
/// mathematically. In f64 the function saturates: for `v` beyond roughly
/// ±36, `e^(-v)` falls below machine epsilon and the result rounds to
/// exactly 1.0 (or to 0.0 near `v ≈ -745`).
pub fn sigmoid(v: f64) -> f64 {
    1.0 / (1.0 + (-v).exp())
}

/// Derivative of `sigmoid`, expressed through the function value itself:
/// `σ'(v) = σ(v)·(1 − σ(v))`.
pub fn sigmoid_prime(v: f64) -> f64 {
    let s = sigmoid(v);
    s * (1.0 - s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Probes only |v| <= 30: past roughly ±36 the f64 result rounds to an
    // exact 0.0 or 1.0 and the open interval holds only mathematically.
    #[test]
    fn output_stays_in_open_unit_interval() {
        for v in [-30.0, -5.0, -0.1, 0.0, 0.1, 5.0, 30.0] {
            let s = sigmoid(v);
            assert!(s > 0.0 && s < 1.0, "sigmoid({v}) = {s} out of (0,1)");
        }
    }

    #[test]
    fn saturates_to_one_in_f64_far_from_zero() {
        assert_eq!(sigmoid(50.0), 1.0);
    }

    #[test]
    fn midpoint_is_one_half() {
        assert_relative_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn strictly_increasing() {
        let points = [-10.0, -2.0, -0.5, 0.0, 0.5, 2.0, 10.0];
        for pair in points.windows(2) {
            assert!(sigmoid(pair[0]) < sigmoid(pair[1]));
        }
    }

    #[test]
    fn derivative_matches_central_difference() {
        let h = 1e-5;
        for v in [-3.0, -1.0, 0.0, 0.7, 2.5] {
            let numeric = (sigmoid(v + h) - sigmoid(v - h)) / (2.0 * h);
            assert_relative_eq!(sigmoid_prime(v), numeric, epsilon = 1e-8);
        }
    }

    #[test]
    fn derivative_equals_s_times_one_minus_s() {
        for v in [-2.0, 0.0, 1.3] {
            let s = sigmoid(v);
            assert_relative_eq!(sigmoid_prime(v), s * (1.0 - s));
        }
    }
}
