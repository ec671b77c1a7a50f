use std::{
    fs,
    io::{self, Write},
    path::Path,
    time::{Duration, Instant},
};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Tracks throughput and population across generations
///
/// When created with [`GenerationStats::with_samples`] every generation's
/// duration and alive count is also kept so it can be written out as csv.
pub struct GenerationStats {
    gens: u64,
    alive: usize,
    gens_in_report: u64,
    last_report: Instant,
    last_record: Instant,
    samples: Option<Vec<(u128, usize)>>,
}

impl GenerationStats {
    pub fn new(alive: usize) -> Self {
        let now = Instant::now();
        Self {
            gens: 0,
            alive,
            gens_in_report: 0,
            last_report: now,
            last_record: now,
            samples: None,
        }
    }
    pub fn with_samples(alive: usize) -> Self {
        Self {
            samples: Some(Vec::new()),
            ..Self::new(alive)
        }
    }

    pub fn record(&mut self, alive: usize) {
        let delta = self.last_record.elapsed().as_micros();
        self.last_record = Instant::now();
        if let Some(samples) = &mut self.samples {
            samples.push((delta, alive));
        }

        self.gens += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    /// Reports are due every 500ms, or on every generation when `always`
    pub fn has_report(&self, always: bool) -> bool {
        always || self.last_report.elapsed() >= REPORT_INTERVAL
    }

    pub fn report(&mut self) -> String {
        let elapsed = self.last_report.elapsed().as_secs_f64();
        let gens_per_sec = if elapsed > 0.0 {
            self.gens_in_report as f64 / elapsed
        } else {
            0.0
        };
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, alive:{}",
            gens_per_sec, self.gens, self.alive
        )
    }

    pub fn generations(&self) -> u64 {
        self.gens
    }

    /// Writes `gen,delta_t,alive` rows; a no-op when samples were not kept
    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        let Some(samples) = &self.samples else {
            return Ok(());
        };
        out.write_all(b"gen,delta_t,alive\n")?;
        for (i, (delta, alive)) in samples.iter().enumerate() {
            writeln!(out, "{},{},{}", i, delta, alive)?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = fs::File::create(path)?;
        self.write_csv(io::BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_includes_counts() {
        let mut stats = GenerationStats::new(10);
        stats.record(8);
        stats.record(6);

        let report = stats.report();
        assert!(report.ends_with("gens:2, alive:6"), "{report}");
        assert_eq!(stats.generations(), 2);
    }

    #[test]
    fn csv_rows_per_generation() {
        let mut stats = GenerationStats::with_samples(3);
        stats.record(2);
        stats.record(0);

        let mut out = Vec::new();
        stats.write_csv(&mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "gen,delta_t,alive");
        assert!(lines[1].starts_with("0,") && lines[1].ends_with(",2"));
        assert!(lines[2].starts_with("1,") && lines[2].ends_with(",0"));
    }

    #[test]
    fn no_samples_writes_nothing() {
        let mut stats = GenerationStats::new(1);
        stats.record(1);

        let mut out = Vec::new();
        stats.write_csv(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn forced_reports_are_always_due() {
        let stats = GenerationStats::new(0);

        assert!(stats.has_report(true));
    }
}
