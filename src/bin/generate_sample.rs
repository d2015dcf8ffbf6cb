//! Writes `sample_billets.csv`: synthetic banknote measurements with the
//! columns the classifier expects plus a few passthrough ones.

use anyhow::{Context, Result};

/// Mean and standard deviation of each measured dimension, in mm.
struct Profile {
    diagonal: (f64, f64),
    height_left: (f64, f64),
    height_right: (f64, f64),
    margin_low: (f64, f64),
    margin_up: (f64, f64),
    length: (f64, f64),
}

const GENUINE: Profile = Profile {
    diagonal: (171.99, 0.30),
    height_left: (103.95, 0.30),
    height_right: (103.81, 0.29),
    margin_low: (4.12, 0.32),
    margin_up: (3.05, 0.19),
    length: (113.20, 0.36),
};

const FAKE: Profile = Profile {
    diagonal: (171.90, 0.31),
    height_left: (104.19, 0.22),
    height_right: (104.14, 0.27),
    margin_low: (5.22, 0.55),
    margin_up: (3.35, 0.18),
    length: (111.63, 0.62),
};

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, (mean, std_dev): (f64, f64)) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "sample_billets.csv";
    let n_rows = 60;

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "id",
        "diagonal",
        "height_left",
        "height_right",
        "margin_low",
        "margin_up",
        "length",
    ])?;

    let mut n_fake = 0;
    for i in 0..n_rows {
        // Roughly one note in three is counterfeit.
        let profile = if rng.next_f64() < 1.0 / 3.0 {
            n_fake += 1;
            &FAKE
        } else {
            &GENUINE
        };
        let dims = [
            profile.diagonal,
            profile.height_left,
            profile.height_right,
            profile.margin_low,
            profile.margin_up,
            profile.length,
        ];
        let mut record = vec![format!("B_{}", i + 1)];
        record.extend(dims.into_iter().map(|d| format!("{:.2}", rng.gauss(d))));
        writer.write_record(&record)?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {n_rows} banknotes ({n_fake} counterfeit) to {output_path}");
    Ok(())
}
