use crate::classify::Verdict;
use crate::config::Config;
use crate::debug_println;
use crate::error::{DemoError, Result};
use crate::loops;
use nonempty::NonEmpty;
use std::fmt;
use std::io::Write;

/// The loop phases, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ascending,
    FixedCount,
    Classification,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Ascending, Phase::FixedCount, Phase::Classification];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Ascending => "ascending",
            Phase::FixedCount => "fixed-count",
            Phase::Classification => "classification",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one run of the demo produced
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub ascending: Vec<u32>,
    pub markers: Vec<&'static str>,
    pub verdicts: NonEmpty<Verdict>,
}

impl Report {
    pub fn phase_lines(&self, phase: Phase) -> Vec<String> {
        match phase {
            Phase::Ascending => self.ascending.iter().map(u32::to_string).collect(),
            Phase::FixedCount => self.markers.iter().map(|m| m.to_string()).collect(),
            Phase::Classification => self.verdicts.iter().map(Verdict::to_string).collect(),
        }
    }

    /// All console lines in output order
    pub fn lines(&self) -> Vec<String> {
        Phase::ALL
            .iter()
            .flat_map(|phase| self.phase_lines(*phase))
            .collect()
    }
}

pub struct CounterDemo {
    config: Config,
}

impl CounterDemo {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn report(&self) -> Report {
        let bound = self.config.total_iterations;
        debug_println!("[demo] running with total_iterations = {}", bound);

        debug_println!("[demo] phase: {}", Phase::Ascending);
        let ascending = loops::ascending(bound);

        debug_println!("[demo] phase: {}", Phase::FixedCount);
        let markers = loops::fixed_count(bound);

        debug_println!("[demo] phase: {}", Phase::Classification);
        let verdicts = loops::classification(bound);

        Report {
            ascending,
            markers,
            verdicts,
        }
    }

    /// Write every line of the demo to `out`, newline-terminated.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let report = self.report();

        for phase in Phase::ALL {
            for line in report.phase_lines(phase) {
                writeln!(out, "{}", line).map_err(|e| {
                    DemoError::from(e).with_note(format!("while writing the {} phase", phase))
                })?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

impl Default for CounterDemo {
    fn default() -> Self {
        Self::new()
    }
}
