use rand::Rng;

use crate::activation::sigmoid::sigmoid;
use crate::network::error::NetworkError;

/// Constant pseudo-input feeding the threshold weight of each layer.
pub const BIAS: f64 = -1.0;

/// A feed-forward network with exactly one hidden layer, trained by online
/// backpropagation.
///
/// The threshold of each unit is folded into its weight row: row `i` of
/// `wzx` has `nx + 1` entries and row `k` of `wyz` has `nz + 1`, where the
/// trailing weight multiplies the constant bias input −1. Outputs are not
/// biased, so `y` has plain length `ny`.
///
/// `x`, `z`, `y`, `dz` and `dy` are the transient state of the pattern most
/// recently presented; they are overwritten by every `forward`/`backward`
/// call and must not be read across patterns.
#[derive(Debug, Clone)]
pub struct Network {
    nx: usize,
    nz: usize,
    ny: usize,
    /// Input → hidden weights, `nz` rows of `nx + 1`.
    pub wzx: Vec<Vec<f64>>,
    /// Hidden → output weights, `ny` rows of `nz + 1`.
    pub wyz: Vec<Vec<f64>>,
    x: Vec<f64>,
    z: Vec<f64>,
    y: Vec<f64>,
    dz: Vec<f64>,
    dy: Vec<f64>,
}

impl Network {
    /// Creates an `nx`×`nz`×`ny` network with weights drawn i.i.d. uniformly
    /// from [−0.5, 0.5).
    pub fn new(nx: usize, nz: usize, ny: usize) -> Result<Network, NetworkError> {
        Network::with_rng(nx, nz, ny, &mut rand::thread_rng())
    }

    /// Like [`Network::new`] but with a caller-supplied RNG, so tests can
    /// seed the weight initialization.
    pub fn with_rng<R: Rng>(
        nx: usize,
        nz: usize,
        ny: usize,
        rng: &mut R,
    ) -> Result<Network, NetworkError> {
        if nx == 0 || nz == 0 || ny == 0 {
            return Err(NetworkError::InvalidTopology { nx, nz, ny });
        }

        let wzx = (0..nz)
            .map(|_| (0..nx + 1).map(|_| rng.gen::<f64>() - 0.5).collect())
            .collect();
        let wyz = (0..ny)
            .map(|_| (0..nz + 1).map(|_| rng.gen::<f64>() - 0.5).collect())
            .collect();

        Ok(Network::assemble(nx, nz, ny, wzx, wyz))
    }

    /// Builds a network from explicit weight matrices. The topology is
    /// inferred: `nz` from the number of `wzx` rows, `ny` from `wyz`, and
    /// `nx` from the width of the first `wzx` row minus the bias slot.
    pub fn from_weights(
        wzx: Vec<Vec<f64>>,
        wyz: Vec<Vec<f64>>,
    ) -> Result<Network, NetworkError> {
        let nz = wzx.len();
        let ny = wyz.len();
        let nx = wzx
            .first()
            .map(|row| row.len())
            .unwrap_or(0)
            .saturating_sub(1);
        if nx == 0 || nz == 0 || ny == 0 {
            return Err(NetworkError::InvalidTopology { nx, nz, ny });
        }

        for (row, weights) in wzx.iter().enumerate() {
            if weights.len() != nx + 1 {
                return Err(NetworkError::WeightShapeMismatch {
                    layer: "hidden",
                    row,
                    expected: nx + 1,
                    got: weights.len(),
                });
            }
        }
        for (row, weights) in wyz.iter().enumerate() {
            if weights.len() != nz + 1 {
                return Err(NetworkError::WeightShapeMismatch {
                    layer: "output",
                    row,
                    expected: nz + 1,
                    got: weights.len(),
                });
            }
        }

        Ok(Network::assemble(nx, nz, ny, wzx, wyz))
    }

    fn assemble(
        nx: usize,
        nz: usize,
        ny: usize,
        wzx: Vec<Vec<f64>>,
        wyz: Vec<Vec<f64>>,
    ) -> Network {
        Network {
            nx,
            nz,
            ny,
            wzx,
            wyz,
            x: Vec::with_capacity(nx + 1),
            z: Vec::with_capacity(nz + 1),
            y: Vec::with_capacity(ny),
            dz: Vec::with_capacity(nz),
            dy: Vec::with_capacity(ny),
        }
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn nz(&self) -> usize {
        self.nz
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Last input presented, with the bias value appended. Empty before the
    /// first forward pass.
    pub fn input(&self) -> &[f64] {
        &self.x
    }

    /// Last hidden activations, with the bias value appended.
    pub fn hidden(&self) -> &[f64] {
        &self.z
    }

    /// Last output activations.
    pub fn output(&self) -> &[f64] {
        &self.y
    }

    /// Last hidden-layer error signals (no bias slot).
    pub fn hidden_error(&self) -> &[f64] {
        &self.dz
    }

    /// Last output-layer error signals.
    pub fn output_error(&self) -> &[f64] {
        &self.dy
    }

    /// Forward pass: propagates `input` through both layers and returns the
    /// output activations. Stores `x`, `z` and `y` for a following
    /// [`Network::backward`] on the same pattern.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>, NetworkError> {
        if input.len() != self.nx {
            return Err(NetworkError::InputShapeMismatch {
                expected: self.nx,
                got: input.len(),
            });
        }

        self.x.clear();
        self.x.extend_from_slice(input);
        self.x.push(BIAS);

        self.z.clear();
        for weights in &self.wzx {
            self.z.push(sigmoid(dot(&self.x, weights)));
        }
        self.z.push(BIAS);

        self.y.clear();
        for weights in &self.wyz {
            self.y.push(sigmoid(dot(&self.z, weights)));
        }

        Ok(self.y.clone())
    }

    /// Backward pass: computes the output-layer and hidden-layer error
    /// signals from `target` and the activations of the forward pass just
    /// completed.
    ///
    /// Must be called immediately after [`Network::forward`] on the same
    /// pattern; the activations are not checked for staleness.
    pub fn backward(&mut self, target: &[f64]) -> Result<(), NetworkError> {
        if target.len() != self.ny {
            return Err(NetworkError::TargetShapeMismatch {
                expected: self.ny,
                got: target.len(),
            });
        }

        // Output error: sigmoid-derivative-weighted residual.
        self.dy.clear();
        for (y, t) in self.y.iter().zip(target) {
            self.dy.push(y * (1.0 - y) * (t - y));
        }

        // Hidden error: back-propagate through wyz, excluding the bias slot.
        self.dz.clear();
        for j in 0..self.nz {
            let upstream: f64 = self
                .wyz
                .iter()
                .zip(&self.dy)
                .map(|(weights, dy)| weights[j] * dy)
                .sum();
            let z = self.z[j];
            self.dz.push(z * (1.0 - z) * upstream);
        }

        Ok(())
    }

    /// Weight update: applies the correction `α·δ·activation` to every
    /// weight, using the error signals and activations of the pattern just
    /// processed. Both matrix updates read only the transient buffers, so
    /// neither disturbs the other.
    pub fn update(&mut self, learning_rate: f64) {
        for (weights, dz) in self.wzx.iter_mut().zip(&self.dz) {
            for (w, x) in weights.iter_mut().zip(&self.x) {
                *w += learning_rate * dz * x;
            }
        }
        for (weights, dy) in self.wyz.iter_mut().zip(&self.dy) {
            for (w, z) in weights.iter_mut().zip(&self.z) {
                *w += learning_rate * dy * z;
            }
        }
    }
}

fn dot(values: &[f64], weights: &[f64]) -> f64 {
    values.iter().zip(weights).map(|(v, w)| v * w).sum()
}
