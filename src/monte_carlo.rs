use std::f64::consts::PI;

use rand::RngCore;

use crate::rng::{unit_double, XorShift32};

/// Quarter-circle radius, 2^32-1.
const RADIUS: u64 = u32::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    QuarterCircle,
    Coprime,
    BuffonNeedle,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::QuarterCircle, Method::Coprime, Method::BuffonNeedle];

    pub fn title(self) -> &'static str {
        match self {
            Method::QuarterCircle => {
                "Method 1: Quarter-circle inside unit square (integer arithmetic, no floats)"
            }
            Method::Coprime => "Method 2: Probability that two integers are coprime (gcd==1)",
            Method::BuffonNeedle => "Method 3: Buffon's needle (l=1, t=1)",
        }
    }

    /// Runs `trials` draws of this method and returns the number of hits.
    pub fn count(self, trials: u32, rng: &mut XorShift32) -> u64 {
        match self {
            Method::QuarterCircle => circle_count(trials, rng),
            Method::Coprime => u64::from(coprime_count(trials, rng)),
            Method::BuffonNeedle => u64::from(buffon_count(trials, rng)),
        }
    }

    /// Inverts the method's success probability into an estimate of π.
    /// A zero probability yields 0.0 rather than a division by zero. The
    /// coprime method is guarded the same way as the needle method, so a run
    /// without a single coprime pair reports 0 instead of inf.
    pub fn estimate_pi(self, p: f64) -> f64 {
        match self {
            // quarter circle covers π/4 of the square
            Method::QuarterCircle => 4.0 * p,
            // p = 6/π²
            Method::Coprime if p > 0.0 => (6.0 / p).sqrt(),
            // p = 2L/(πT) = 2/π
            Method::BuffonNeedle if p > 0.0 => 2.0 / p,
            Method::Coprime | Method::BuffonNeedle => 0.0,
        }
    }
}

/// Hits for one (method, sample size) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub method: Method,
    pub trials: u32,
    pub hits: u64,
}

impl Trial {
    pub fn run(method: Method, trials: u32, rng: &mut XorShift32) -> Self {
        let hits = method.count(trials, rng);
        Self { method, trials, hits }
    }

    pub fn probability(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.hits as f64 / f64::from(self.trials)
    }

    pub fn pi_estimate(&self) -> f64 {
        self.method.estimate_pi(self.probability())
    }
}

/// Runs every sample size through `method`, in order, on the shared generator.
pub fn run_method(method: Method, sizes: &[u32], rng: &mut XorShift32) -> Vec<Trial> {
    sizes
        .iter()
        .map(|&trials| Trial::run(method, trials, rng))
        .collect()
}

/// Whether (x, y) lies within radius 2^32-1 of the origin, boundary included.
///
/// x² + y² can reach 2 * (2^32-1)², which does not fit in u64, so y² is
/// compared against the remaining room instead. Both squares are at most
/// (2^32-1)², so neither the products nor the subtraction overflow.
#[inline]
pub fn in_quarter_circle(x: u32, y: u32) -> bool {
    let (x, y) = (u64::from(x), u64::from(y));
    y * y <= RADIUS * RADIUS - x * x
}

/// Counts points (x, y) in [0, 2^32-1]² that fall inside the quarter circle.
pub fn circle_count<R: RngCore + ?Sized>(trials: u32, rng: &mut R) -> u64 {
    let mut hits = 0u64;
    for _ in 0..trials {
        let x = rng.next_u32();
        let y = rng.next_u32();
        if in_quarter_circle(x, y) {
            hits += 1;
        }
    }
    hits
}

/// Draws two integers and forces both odd.
pub fn odd_pair<R: RngCore + ?Sized>(rng: &mut R) -> (u32, u32) {
    let a = rng.next_u32() | 1;
    let b = rng.next_u32() | 1;
    (a, b)
}

/// Counts odd pairs with gcd == 1.
///
/// Odd pairs are coprime with probability 8/π², so `sqrt(6 / p)` settles near
/// 2.72 instead of π. A run with no coprime pair gives p = 0, which
/// [`Method::estimate_pi`] maps to 0.0 just like the needle method.
pub fn coprime_count<R: RngCore + ?Sized>(trials: u32, rng: &mut R) -> u32 {
    let mut hits = 0;
    for _ in 0..trials {
        let (a, b) = odd_pair(rng);
        if gcd(a, b) == 1 {
            hits += 1;
        }
    }
    hits
}

pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Half the needle's projection across the lines, for l = 1.
#[inline]
pub fn half_projection(theta: f64) -> f64 {
    0.5 * theta.sin()
}

/// Buffon's needle with line spacing 1 and needle length 1. By symmetry only
/// y in [0, 0.5) and theta in [0, π/2) are sampled.
pub fn buffon_count<R: RngCore + ?Sized>(trials: u32, rng: &mut R) -> u32 {
    let mut crosses = 0;
    for _ in 0..trials {
        let y = unit_double(rng) * 0.5;
        let theta = unit_double(rng) * (PI / 2.0);
        if y <= half_projection(theta) {
            crosses += 1;
        }
    }
    crosses
}
