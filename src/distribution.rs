use std::fmt;
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::Exp1;
use crate::config::MAX_VALUE;

// Input generators for the harness, benches and tests.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Uniform,
    Exponential,
    AlmostSorted,
    RootDup,
    TwoDup,
    Range,
    Sorted,
    Reversed,
}

impl InputKind {
    pub const ALL: [InputKind; 8] = [
        InputKind::Uniform,
        InputKind::Exponential,
        InputKind::AlmostSorted,
        InputKind::RootDup,
        InputKind::TwoDup,
        InputKind::Range,
        InputKind::Sorted,
        InputKind::Reversed,
    ];

    /// 1-based index as used on the command line.
    pub fn from_index(index: usize) -> Option<InputKind> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            InputKind::Uniform => "uniform",
            InputKind::Exponential => "exponential",
            InputKind::AlmostSorted => "almost sorted",
            InputKind::RootDup => "root dup",
            InputKind::TwoDup => "two dup",
            InputKind::Range => "range",
            InputKind::Sorted => "sorted",
            InputKind::Reversed => "reversed",
        }
    }

    pub fn generate(self, rng: &mut StdRng, n: usize) -> Vec<u64> {
        match self {
            InputKind::Uniform => generate_uniform(rng, n),
            InputKind::Exponential => generate_exponential(rng, n),
            InputKind::AlmostSorted => generate_almost_sorted(rng, n),
            InputKind::RootDup => generate_root_dup(n),
            InputKind::TwoDup => generate_two_dup(n),
            InputKind::Range => generate_in_range(rng, n, 1000),
            InputKind::Sorted => (0..n as u64).collect(),
            InputKind::Reversed => (0..n as u64).rev().collect(),
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// uniform in [0, MAX_VALUE]
pub fn generate_uniform(rng: &mut StdRng, n: usize) -> Vec<u64> {
    (0..n)
        .map(|_| rng.gen_range(0..=MAX_VALUE))
        .collect()
}

// exponential with mean MAX_VALUE / 16, clamped to MAX_VALUE
pub fn generate_exponential(rng: &mut StdRng, n: usize) -> Vec<u64> {
    let mean = MAX_VALUE as f64 / 16.0;
    (0..n)
        .map(|_| {
            let x: f64 = rng.sample(Exp1);
            ((x * mean) as u64).min(MAX_VALUE)
        })
        .collect()
}

// 95% sorted
pub fn generate_almost_sorted(rng: &mut StdRng, n: usize) -> Vec<u64> {
    let mut data: Vec<u64> = (0..n as u64).collect();
    if n == 0 {
        return data;
    }
    for _ in 0..(n / 20) {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        data.swap(i, j);
    }
    data
}

// A[i] = i mod floor(sqrt(n))
pub fn generate_root_dup(n: usize) -> Vec<u64> {
    let sqrt_n = ((n as f64).sqrt() as usize).max(1);
    (0..n).map(|i| (i % sqrt_n) as u64).collect()
}

// A[i] = i^2 + n/2 mod n
pub fn generate_two_dup(n: usize) -> Vec<u64> {
    (0..n as u64)
        .map(|i| i.wrapping_mul(i).wrapping_add(n as u64 / 2) % n as u64)
        .collect()
}

pub fn generate_in_range(rng: &mut StdRng, n: usize, range: u64) -> Vec<u64> {
    (0..n)
        .map(|_| rng.gen_range(0..range))
        .collect()
}
