/// Upper bound shared by all three loops.
pub const TOTAL_ITERATIONS: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Inclusive bound every loop counts up to, starting from 1
    pub total_iterations: u16,
}

impl Config {
    pub fn with_total_iterations(total_iterations: u16) -> Self {
        Self { total_iterations }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_iterations: TOTAL_ITERATIONS,
        }
    }
}
