//! Writes a deterministic sample accident dataset to the default data path.
//!
//! Usage: `cargo run --bin generate_sample`

use std::path::Path;

use anyhow::{Context, Result};

/// Same default the dashboard loads at startup.
const DEFAULT_DATA_PATH: &str = "data/Filtered_Accident_Causes__Alcohol_Focus_.csv";

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

/// (cause label, relative weight) – alcohol-heavy on purpose.
const CAUSES: &[(&str, u64)] = &[
    ("Alcohol", 30),
    ("Speeding", 24),
    ("Distracted Driving", 18),
    ("Weather", 12),
    ("Mechanical Failure", 8),
    ("Fatigue", 8),
];

const SEVERITIES: &[&str] = &["Minor", "Serious", "Fatal"];
const LOCATIONS: &[&str] = &["Urban", "Rural", "Highway"];

fn pick_cause(rng: &mut SimpleRng) -> &'static str {
    let total: u64 = CAUSES.iter().map(|&(_, w)| w).sum();
    let mut roll = rng.below(total);
    for &(label, weight) in CAUSES {
        if roll < weight {
            return label;
        }
        roll -= weight;
    }
    CAUSES[0].0
}

fn main() -> Result<()> {
    env_logger::init();

    let path = Path::new(DEFAULT_DATA_PATH);
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).context("creating data directory")?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["Year", "Main Cause", "Severity", "Location", "Casualties"])?;

    let mut rng = SimpleRng::new(42);
    for i in 0..300 {
        let year = 2015 + rng.below(10) as i64;
        let mut cause = pick_cause(&mut rng).to_string();
        // Sprinkle in the casing/whitespace quirks the dashboard normalizes.
        match i % 37 {
            0 => cause = cause.to_uppercase(),
            1 => cause = format!(" {cause} "),
            2 => cause.clear(),
            _ => {}
        }
        let severity = SEVERITIES[rng.below(SEVERITIES.len() as u64) as usize];
        let location = LOCATIONS[rng.below(LOCATIONS.len() as u64) as usize];
        let casualties = rng.below(5).to_string();

        writer.write_record([
            year.to_string().as_str(),
            cause.as_str(),
            severity,
            location,
            casualties.as_str(),
        ])?;
    }
    writer.flush().context("flushing CSV")?;

    log::info!("Wrote 300 sample records to {}", path.display());
    println!("Wrote 300 sample records to {}", path.display());
    Ok(())
}
