//! Test utilities for forest-tiles development.
//!
//! Provides small fixture worlds ([`fixtures`]) and a [`ScriptedSampler`]
//! that replays predetermined choices so RTDP episodes can be pinned down
//! exactly.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use forest_mdp::Sampler;
use std::collections::VecDeque;

/// Replays a fixed sequence of indices.
///
/// Once the script runs out, returns the index of the heaviest weight
/// (the first one on ties), which for `error_rate = 0` is always the
/// intended action. Every call's weights are recorded.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSampler {
    script: VecDeque<usize>,
    calls: Vec<Vec<f64>>,
}

impl ScriptedSampler {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            calls: Vec::new(),
        }
    }

    /// Weights passed to each call so far, in order.
    pub fn calls(&self) -> &[Vec<f64>] {
        &self.calls
    }

    /// Scripted choices not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Sampler for ScriptedSampler {
    fn choose_weighted(&mut self, weights: &[f64]) -> usize {
        self.calls.push(weights.to_vec());
        match self.script.pop_front() {
            Some(i) => {
                assert!(
                    i < weights.len(),
                    "scripted index {i} out of range for {} weights",
                    weights.len()
                );
                i
            }
            None => heaviest(weights),
        }
    }
}

fn heaviest(weights: &[f64]) -> usize {
    let mut best = 0;
    for (i, &w) in weights.iter().enumerate() {
        if w > weights[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_then_falls_back() {
        let mut s = ScriptedSampler::new([2, 0]);
        assert_eq!(s.choose_weighted(&[1.0; 4]), 2);
        assert_eq!(s.choose_weighted(&[1.0; 4]), 0);
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.choose_weighted(&[0.1, 0.1, 0.7, 0.1]), 2);
        assert_eq!(s.choose_weighted(&[1.0, 1.0]), 0);
        assert_eq!(s.calls().len(), 4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn rejects_out_of_range_script() {
        let mut s = ScriptedSampler::new([3]);
        s.choose_weighted(&[1.0, 1.0]);
    }
}
