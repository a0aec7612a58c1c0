use std::fs;
use std::path::Path;

use nanotherm_schemas::observation::Observation;

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
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Nominal setpoint grid run by the rig. Flow rates and concentrations
    // are written verbatim so repeated runs land on identical grouping keys.
    let flow_rates = [1.0, 2.0, 3.0];
    let concentrations = [0.0, 0.5, 1.0, 2.0, 3.0];
    let repeats = 3;

    let ambient_temp_c = 25.0;

    let out_dir = Path::new("data");
    fs::create_dir_all(out_dir).expect("Failed to create data directory");
    let output_path = out_dir.join("experimental_results.csv");

    let mut writer = csv::Writer::from_path(&output_path).expect("Failed to create output file");

    let mut rows = 0u32;
    for &flow_rate in &flow_rates {
        for &concentration in &concentrations {
            for _ in 0..repeats {
                let inlet = 80.0 + rng.gauss(0.0, 0.3);

                // Effectiveness rises with nanoparticle loading, tapers at
                // the high end, and improves with flow rate.
                let effectiveness = 0.30 + 0.05 * concentration
                    - 0.006 * concentration * concentration
                    + 0.02 * flow_rate;
                let outlet =
                    inlet - effectiveness * (inlet - ambient_temp_c) + rng.gauss(0.0, 0.15);

                writer
                    .serialize(Observation {
                        inlet_temp_c: inlet,
                        outlet_temp_c: outlet,
                        flow_rate_l_min: flow_rate,
                        concentration_percent: concentration,
                    })
                    .expect("Failed to write record");
                rows += 1;
            }
        }
    }
    writer.flush().expect("Failed to flush output file");

    println!("Wrote {} observations to {}", rows, output_path.display());
}
