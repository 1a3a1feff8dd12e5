mod monte_carlo;
mod report;
mod rng;

use std::io::{self, BufWriter, Write};
use std::time::Instant;

use report::DEFAULT_SEED;
use rng::XorShift32;

fn main() {
    let start = Instant::now();
    let mut rng = XorShift32::new(DEFAULT_SEED);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(err) = report::write_report(&mut out, &mut rng).and_then(|()| out.flush()) {
        eprintln!("Failed to write report: {err}");
        std::process::exit(1);
    }

    eprintln!("Seed: {} (final state {})", DEFAULT_SEED, rng.state());
    eprintln!("Total time: {}ms", start.elapsed().as_millis());
}
