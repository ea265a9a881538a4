/// Cycle clock report
///
/// Prints which counter this build reads, the cost of one read measured with
/// the counter itself, and a rough counter rate against the OS clock.
///
/// Run with: cargo run --release --example clock_report
use cycleclock::{CycleCounter, Native};
use std::time::{Duration, Instant};

const NUM_SAMPLES: usize = 100_000;
const RATE_WINDOW: Duration = Duration::from_millis(100);

fn main() {
    println!("=== Cycle Clock Report ===\n");
    println!("Counter: {}\n", Native::NAME);

    println!("--- Back-to-back read delta ({} samples) ---", NUM_SAMPLES);
    let mut samples = DeltaSamples::new(NUM_SAMPLES);
    for _ in 0..NUM_SAMPLES {
        samples.record();
    }
    match samples.percentiles() {
        Some(p) => print_percentiles(&p),
        None => println!("  no samples"),
    }

    println!("\n--- Counter rate over {:?} ---", RATE_WINDOW);
    let ticks_per_us = estimate_rate(RATE_WINDOW);
    println!("  {:.3} ticks/us ({:.3} MHz)", ticks_per_us, ticks_per_us);
}

/// Differences between two consecutive `now()` reads.
struct DeltaSamples {
    samples: Vec<u64>,
}

impl DeltaSamples {
    fn new(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    fn record(&mut self) {
        let start = cycleclock::now();
        let end = cycleclock::now();
        self.samples.push(end.saturating_sub(start));
    }

    fn percentiles(&mut self) -> Option<Percentiles> {
        if self.samples.is_empty() {
            return None;
        }

        self.samples.sort_unstable();

        let len = self.samples.len();
        let sum: u128 = self.samples.iter().map(|&s| s as u128).sum();

        Some(Percentiles {
            min: self.samples[0],
            max: self.samples[len - 1],
            mean: sum as f64 / len as f64,
            p50: self.percentile_at(0.50),
            p95: self.percentile_at(0.95),
            p99: self.percentile_at(0.99),
            p999: self.percentile_at(0.999),
        })
    }

    fn percentile_at(&self, p: f64) -> u64 {
        let index = (p * (self.samples.len() - 1) as f64) as usize;
        self.samples[index]
    }
}

struct Percentiles {
    min: u64,
    max: u64,
    mean: f64,
    p50: u64,
    p95: u64,
    p99: u64,
    p999: u64,
}

fn print_percentiles(p: &Percentiles) {
    println!("  Min:    {:>8} ticks", p.min);
    println!("  p50:    {:>8} ticks (median)", p.p50);
    println!("  Mean:   {:>8.2} ticks", p.mean);
    println!("  p95:    {:>8} ticks", p.p95);
    println!("  p99:    {:>8} ticks", p.p99);
    println!("  p99.9:  {:>8} ticks", p.p999);
    println!("  Max:    {:>8} ticks", p.max);
}

/// Counter ticks per microsecond of `Instant` time.
fn estimate_rate(window: Duration) -> f64 {
    let start_time = Instant::now();
    let start_ticks = cycleclock::now();

    std::thread::sleep(window);

    let end_ticks = cycleclock::now();
    let elapsed_us = start_time.elapsed().as_secs_f64() * 1_000_000.0;

    end_ticks.saturating_sub(start_ticks) as f64 / elapsed_us
}
