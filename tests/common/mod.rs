//! Common test utilities for pipeline tests

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;
use tracing_subscriber::EnvFilter;

/// Route library logs to the test writer; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Seeded CSV with a four-label `region` column and `numeric` normal columns
///
/// Roughly one numeric cell in twenty is written as `NA`.
pub fn generated_table(rows: usize, numeric: usize, seed: u64) -> String {
    const REGIONS: [&str; 4] = ["north", "south", "east", "west"];
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(50.0, 10.0).unwrap();

    let mut text = String::from("region");
    for j in 0..numeric {
        text.push_str(&format!(",x{j}"));
    }
    text.push('\n');

    for _ in 0..rows {
        text.push_str(REGIONS[rng.gen_range(0..REGIONS.len())]);
        for _ in 0..numeric {
            if rng.gen_bool(0.05) {
                text.push_str(",NA");
            } else {
                text.push_str(&format!(",{:.4}", normal.sample(&mut rng)));
            }
        }
        text.push('\n');
    }
    text
}
