//! Write a synthetic sleep health and lifestyle survey with the dashboard's
//! schema. Usage: `generate_sample [OUTPUT.csv] [ROWS]`.

use std::error::Error;

const HEADER: [&str; 13] = [
    "Person ID",
    "Gender",
    "Age",
    "Occupation",
    "Sleep Duration",
    "Quality of Sleep",
    "Physical Activity Level",
    "Stress Level",
    "BMI Category",
    "Blood Pressure",
    "Heart Rate",
    "Daily Steps",
    "Sleep Disorder",
];

/// Occupation → (typical stress, typical sleep hours).
const OCCUPATIONS: [(&str, f64, f64); 11] = [
    ("Software Engineer", 6.0, 6.8),
    ("Doctor", 7.0, 6.9),
    ("Sales Representative", 8.0, 5.9),
    ("Teacher", 4.5, 6.7),
    ("Nurse", 6.0, 7.0),
    ("Engineer", 4.0, 8.0),
    ("Accountant", 4.5, 7.1),
    ("Scientist", 7.0, 6.0),
    ("Lawyer", 5.0, 7.4),
    ("Salesperson", 7.0, 6.4),
    ("Manager", 5.0, 6.9),
];

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
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
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

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn clamp_round(v: f64, lo: f64, hi: f64) -> f64 {
    v.clamp(lo, hi).round()
}

fn row(rng: &mut SimpleRng, id: usize) -> Vec<String> {
    let gender = if rng.next_f64() < 0.5 { "Male" } else { "Female" };
    let (occupation, base_stress, base_sleep) = OCCUPATIONS[rng.below(OCCUPATIONS.len())];

    let age = clamp_round(rng.gauss(42.0, 8.5), 27.0, 59.0);
    let stress = clamp_round(rng.gauss(base_stress, 1.0), 3.0, 8.0);
    let sleep = (rng.gauss(base_sleep - 0.15 * (stress - 5.0), 0.35).clamp(5.8, 8.5) * 10.0).round() / 10.0;
    let quality = clamp_round(4.0 + (sleep - 5.8) * 1.6 - 0.2 * (stress - 5.0), 4.0, 9.0);
    let activity = clamp_round(rng.gauss(59.0, 20.0) / 5.0, 6.0, 18.0) * 5.0;
    let heart_rate = clamp_round(rng.gauss(70.0 + stress - 5.0, 3.5), 65.0, 86.0);
    let steps = clamp_round(rng.gauss(activity * 110.0, 900.0) / 100.0, 30.0, 100.0) * 100.0;

    let bmi = ["Normal", "Normal Weight", "Overweight", "Obese"][rng.below(4)];
    let systolic = clamp_round(rng.gauss(128.0, 7.0), 115.0, 142.0);
    let diastolic = clamp_round(systolic - 44.0 + rng.gauss(0.0, 2.0), 75.0, 95.0);
    let disorder = match rng.below(10) {
        0..=5 => "None",
        6 | 7 => "Sleep Apnea",
        _ => "Insomnia",
    };

    vec![
        id.to_string(),
        gender.to_string(),
        age.to_string(),
        occupation.to_string(),
        sleep.to_string(),
        quality.to_string(),
        activity.to_string(),
        stress.to_string(),
        bmi.to_string(),
        format!("{systolic}/{diastolic}"),
        heart_rate.to_string(),
        steps.to_string(),
        disorder.to_string(),
    ]
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let output_path = args
        .next()
        .unwrap_or_else(|| "sleep_health_sample.csv".to_string());
    let rows: usize = match args.next() {
        Some(n) => n.parse()?,
        None => 374,
    };

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)?;
    writer.write_record(HEADER)?;
    for id in 1..=rows {
        writer.write_record(row(&mut rng, id))?;
    }
    writer.flush()?;

    println!("Wrote {rows} survey records to {output_path}");
    Ok(())
}
