//! Parity testing framework
//!
//! Runs chroma and a reference implementation over the same inputs and
//! records the largest per-component disagreement.

use anyhow::{Context, Result};

/// Absolute error statistics over a set of triples
#[derive(Debug, Clone)]
pub struct ErrorStats {
    /// Largest absolute component difference
    pub max: f64,
    /// Mean of the per-triple largest differences
    pub mean: f64,
    /// Input that produced `max`
    pub worst_input: [f64; 3],
    /// Number of samples
    pub count: usize,
}

impl ErrorStats {
    /// Check that every sample agreed within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }
}

/// Compare chroma against a reference over `inputs`
///
/// Fails on the first input chroma rejects.
pub fn compare<F, G>(inputs: &[[f64; 3]], ours: F, reference: G) -> Result<ErrorStats>
where
    F: Fn([f64; 3]) -> chroma_core::Result<[f64; 3]>,
    G: Fn([f64; 3]) -> [f64; 3],
{
    let mut stats = ErrorStats {
        max: 0.0,
        mean: 0.0,
        worst_input: [0.0; 3],
        count: inputs.len(),
    };

    let mut total = 0.0;
    for &input in inputs {
        let actual = ours(input).with_context(|| format!("chroma rejected {:?}", input))?;
        let expected = reference(input);

        let diff = (0..3)
            .map(|k| (actual[k] - expected[k]).abs())
            .fold(0.0, f64::max);
        total += diff;
        if diff > stats.max {
            stats.max = diff;
            stats.worst_input = input;
        }
    }

    if !inputs.is_empty() {
        stats.mean = total / inputs.len() as f64;
    }
    Ok(stats)
}
