//! RNG module - uniform index selection
//!
//! Every random decision in the simulation (enemy turns, fruit placement) is a
//! uniform pick of an index in `0..len`. The [`RandomSource`] trait is that one
//! operation, so gameplay code can run against the OS-seeded [`SecureRng`] in the
//! binary and against a [`ScriptedRng`] in tests.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CoreError, Result};

/// Source of uniform random indices.
pub trait RandomSource {
    /// Pick an index uniformly in `0..len`.
    ///
    /// Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;
}

/// ChaCha-based generator seeded from the operating system.
#[derive(Debug, Clone)]
pub struct SecureRng {
    inner: StdRng,
}

impl SecureRng {
    /// Seed a new generator from OS entropy.
    pub fn from_os() -> Result<Self> {
        let inner = StdRng::try_from_os_rng().map_err(|e| CoreError::Entropy(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Deterministic generator for benchmarks and reproducible sessions.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SecureRng {
    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.inner.random_range(0..len)
    }
}

/// Replays a fixed list of values, each reduced modulo the requested length.
///
/// Once the script runs out it counts upwards from zero, so a caller that keeps
/// drawing until it finds an acceptable index always gets there.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    script: VecDeque<usize>,
    fallback: usize,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: values.into_iter().collect(),
            fallback: 0,
        }
    }

    /// Append more values to the end of the script.
    pub fn push(&mut self, value: usize) {
        self.script.push_back(value);
    }

    /// Values not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRng {
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self.script.pop_front() {
            Some(v) => v % len,
            None => {
                let v = self.fallback % len;
                self.fallback = self.fallback.wrapping_add(1);
                v
            }
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}
