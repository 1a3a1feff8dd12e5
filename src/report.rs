use std::io::{self, Write};

use crate::monte_carlo::{run_method, Method, Trial};
use crate::rng::XorShift32;

pub const SAMPLE_SIZES: [u32; 4] = [100, 1_000, 10_000, 100_000];
pub const DEFAULT_SEED: u32 = 123_456_789;

/// Significant digits used for every float in the report.
const PRECISION: usize = 6;

/// Runs all sample sizes through method 1, then method 2, then method 3 on
/// one generator and writes the text report.
pub fn write_report<W: Write>(out: &mut W, rng: &mut XorShift32) -> io::Result<()> {
    for method in Method::ALL {
        writeln!(out, "{}", method.title())?;
        for trial in run_method(method, &SAMPLE_SIZES, rng) {
            write_row(out, &trial)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, trial: &Trial) -> io::Result<()> {
    let pi_est = format_general(trial.pi_estimate());
    match trial.method {
        Method::QuarterCircle => writeln!(
            out,
            "  N={:>6}  hits={:>8}  pi_est={}",
            trial.trials, trial.hits, pi_est
        ),
        Method::Coprime => writeln!(
            out,
            "  N={:>6}  coprime={:>6}  p={}  pi_est={}",
            trial.trials,
            trial.hits,
            format_general(trial.probability()),
            pi_est
        ),
        Method::BuffonNeedle => writeln!(
            out,
            "  N={:>6}  crosses={:>6}  p={}  pi_est={}",
            trial.trials,
            trial.hits,
            format_general(trial.probability()),
            pi_est
        ),
    }
}

/// Shortest of fixed or scientific notation with six significant digits and
/// trailing zeros removed, like a C++ stream with default float settings.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // rounding to six digits can bump the exponent (9.999999 -> 1e1)
    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
