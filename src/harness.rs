use std::fmt;
use std::time::{Duration, Instant};
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::base_case::is_partly_sorted;
use crate::distribution::InputKind;
use crate::memory::{resident_set_size, to_mib};
use crate::sort::{sort_binary_heap, sort_ternary_heap_with, Cleanup, TernaryBuild};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    BinaryHeap,
    TernaryHeap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::BinaryHeap, Algorithm::TernaryHeap];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::BinaryHeap => "normal heap sort",
            Algorithm::TernaryHeap => "improved heap sort",
        }
    }

    /// Sorts `arr`. Only the ternary sort reports a cleanup outcome.
    pub fn run(self, arr: &mut [u64], build: TernaryBuild) -> Option<Cleanup> {
        match self {
            Algorithm::BinaryHeap => {
                sort_binary_heap(arr);
                None
            }
            Algorithm::TernaryHeap => Some(sort_ternary_heap_with(arr, build)),
        }
    }

    fn slot(self) -> usize {
        match self {
            Algorithm::BinaryHeap => 0,
            Algorithm::TernaryHeap => 1,
        }
    }
}

/// One timed sort call.
#[derive(Clone, Copy, Debug)]
pub struct Measurement {
    pub duration: Duration,
    pub rss_before: Option<usize>,
    pub rss_after: Option<usize>,
    pub cleanup: Option<Cleanup>,
    pub sorted: bool,
}

impl Measurement {
    pub fn memory_mib(&self) -> Option<f64> {
        self.rss_after.map(to_mib)
    }
}

/// Times `alg` on `arr` and samples the resident set size around the call.
pub fn measure(alg: Algorithm, arr: &mut [u64], build: TernaryBuild) -> Measurement {
    let rss_before = resident_set_size();
    let start = Instant::now();
    let cleanup = alg.run(arr, build);
    let duration = start.elapsed();
    let rss_after = resident_set_size();

    let sorted = is_partly_sorted(arr, arr.len());
    if !sorted {
        error!("{} produced unsorted output (n={})", alg.label(), arr.len());
    }
    Measurement { duration, rss_before, rss_after, cleanup, sorted }
}

/// Collects measurements per algorithm across trials.
#[derive(Debug, Default)]
pub struct Results {
    measurements: [Vec<Measurement>; 2],
}

impl Results {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, alg: Algorithm, measurement: Measurement) {
        self.measurements[alg.slot()].push(measurement);
    }

    pub fn measurements(&self, alg: Algorithm) -> &[Measurement] {
        &self.measurements[alg.slot()]
    }

    /// Number of completed trials.
    pub fn len(&self) -> usize {
        self.measurements.iter().map(Vec::len).min().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn failures(&self) -> usize {
        self.measurements.iter().flatten().filter(|m| !m.sorted).count()
    }

    pub fn fallback_count(&self) -> usize {
        self.measurements(Algorithm::TernaryHeap)
            .iter()
            .filter(|m| m.cleanup == Some(Cleanup::InsertionSorted))
            .count()
    }

    pub fn mean_duration(&self, alg: Algorithm) -> Option<Duration> {
        let ms = self.measurements(alg);
        if ms.is_empty() {
            return None;
        }
        Some(ms.iter().map(|m| m.duration).sum::<Duration>() / ms.len() as u32)
    }

    /// Mean RSS after each call in MiB; samples that could not be taken are skipped.
    pub fn mean_memory_mib(&self, alg: Algorithm) -> Option<f64> {
        let samples: Vec<f64> = self.measurements(alg).iter().filter_map(Measurement::memory_mib).collect();
        if samples.is_empty() {
            return None;
        }
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}

/// Runs every algorithm on its own copy of `input` and records the results.
pub fn run_trial(results: &mut Results, input: &[u64], build: TernaryBuild) {
    for alg in Algorithm::ALL {
        let mut data = input.to_vec();
        let m = measure(alg, &mut data, build);
        debug!("{}: {:?} (cleanup: {:?})", alg.label(), m.duration, m.cleanup);
        results.push(alg, m);
    }
}

/// Runs `trials` trials on fresh inputs of `kind` drawn from one seeded rng.
pub fn run_trials(kind: InputKind, size: usize, trials: usize, seed: u64, build: TernaryBuild) -> Results {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut results = Results::new();
    for i in 0..trials {
        let input = kind.generate(&mut rng, size);
        info!("Trial {} ({}, n={})", i + 1, kind, size);
        run_trial(&mut results, &input, build);
    }
    results
}

fn fmt_mib(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>5} | {:>14} | {:>10} | {:>14} | {:>10} | {:>8}",
                 "trial", "heap (s)", "heap (MB)", "improved (s)", "impr. (MB)", "fallback")?;
        let binary = self.measurements(Algorithm::BinaryHeap);
        let ternary = self.measurements(Algorithm::TernaryHeap);
        for (i, (b, t)) in binary.iter().zip(ternary.iter()).enumerate() {
            writeln!(f, "{:>5} | {:>14.6} | {:>10} | {:>14.6} | {:>10} | {:>8}",
                     i + 1,
                     b.duration.as_secs_f64(),
                     fmt_mib(b.memory_mib()),
                     t.duration.as_secs_f64(),
                     fmt_mib(t.memory_mib()),
                     if t.cleanup == Some(Cleanup::InsertionSorted) { "yes" } else { "no" })?;
        }
        writeln!(f)?;
        for alg in Algorithm::ALL {
            let secs = self.mean_duration(alg).map(|d| d.as_secs_f64()).unwrap_or(0.0);
            writeln!(f, "Average time for {}: {} seconds", alg.label(), secs)?;
            writeln!(f, "Average memory for {}: {} MB", alg.label(), fmt_mib(self.mean_memory_mib(alg)))?;
        }
        if self.failures() > 0 {
            writeln!(f, "Unsorted outputs: {}", self.failures())?;
        }
        Ok(())
    }
}
