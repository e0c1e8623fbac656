use std::env;
use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, Criterion, Throughput};

use tategaki_core::{Direction, Fragment, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchTier {
    Quick,
    Full,
}

impl BenchTier {
    pub fn from_env() -> Self {
        match env::var("TATEGAKI_BENCH_TIER").as_deref() {
            Ok("full") => Self::Full,
            _ => Self::Quick,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupWeight {
    Light,
    Heavy,
}

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub tier: BenchTier,
    pub seed: u64,
    pub sample_size_light: usize,
    pub sample_size_heavy: usize,
    pub measurement_light: Duration,
    pub measurement_heavy: Duration,
}

pub fn bench_config() -> BenchConfig {
    let tier = BenchTier::from_env();
    let seed = env::var("TATEGAKI_BENCH_SEED")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0xC0FFEE);
    let (sample_size_light, sample_size_heavy, measurement_light, measurement_heavy) = match tier {
        BenchTier::Quick => (20, 12, Duration::from_secs(3), Duration::from_secs(5)),
        BenchTier::Full => (30, 20, Duration::from_secs(5), Duration::from_secs(10)),
    };

    BenchConfig {
        tier,
        seed,
        sample_size_light,
        sample_size_heavy,
        measurement_light,
        measurement_heavy,
    }
}

pub fn configure_group<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    cfg: &BenchConfig,
    weight: GroupWeight,
) {
    match weight {
        GroupWeight::Light => {
            group.sample_size(cfg.sample_size_light);
            group.measurement_time(cfg.measurement_light);
        }
        GroupWeight::Heavy => {
            group.sample_size(cfg.sample_size_heavy);
            group.measurement_time(cfg.measurement_heavy);
        }
    }
}

pub fn bench_criterion() -> Criterion {
    Criterion::default().configure_from_args()
}

pub fn fragments_throughput(fragments: usize) -> Throughput {
    Throughput::Elements(fragments as u64)
}

#[derive(Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    pub fn gen_f64(&mut self, min: f64, max: f64) -> f64 {
        let n = self.next_u64() as f64 / u64::MAX as f64;
        min + (max - min) * n
    }
}

/// Synthetic page: vertical columns on the right half, horizontal rows on
/// the left, with jitter and a share of split detections that need merging.
pub fn synthetic_page(seed: u64, page_number: u32, count: usize) -> Page {
    let mut rng = XorShift64::new(seed ^ u64::from(page_number));
    let mut fragments = Vec::with_capacity(count + count / 4);

    for i in 0..count {
        let direction = if i % 2 == 0 {
            Direction::Vertical
        } else {
            Direction::Horizontal
        };
        let slot = (i / 2) as f64;
        let bbox = match direction {
            Direction::Vertical => {
                let x0 = 1900.0 - (slot % 20.0) * 45.0 + rng.gen_f64(0.0, 4.0);
                let y0 = 80.0 + (slot / 20.0).floor() * 420.0 + rng.gen_f64(0.0, 6.0);
                (x0, y0, x0 + 36.0, y0 + rng.gen_f64(120.0, 400.0))
            }
            Direction::Horizontal => {
                let x0 = 60.0 + (slot % 3.0) * 280.0 + rng.gen_f64(0.0, 6.0);
                let y0 = 80.0 + (slot / 3.0).floor() * 32.0 + rng.gen_f64(0.0, 4.0);
                (x0, y0, x0 + rng.gen_f64(120.0, 260.0), y0 + 24.0)
            }
        };
        let confidence = rng.gen_f64(0.5, 1.0);
        let fragment = Fragment::new(format!("f{i}"), bbox, confidence, direction);

        if i % 4 == 0 {
            let (x0, y0, x1, y1) = bbox;
            let split = Fragment::new(
                format!("f{i}-split"),
                (x0 + 1.0, y0 + 1.0, x1 - 1.0, y1 - 1.0),
                rng.gen_f64(0.5, 1.0),
                direction,
            );
            fragments.push(split);
        }
        fragments.push(fragment);
    }

    Page::new(page_number, fragments, 2000.0, 2800.0)
}
