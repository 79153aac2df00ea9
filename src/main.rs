use rand::rngs::StdRng;
use rand::SeedableRng;

use search_timer::bench::{BenchConfig, BenchmarkRunner, Result};
use search_timer::logging::init_logging;

fn main() -> Result<()> {
    init_logging();

    let mut rng = StdRng::from_entropy();
    let report = BenchmarkRunner::new(BenchConfig::default()).run(&mut rng)?;

    print!("{report}");

    Ok(())
}
