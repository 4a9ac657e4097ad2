use anyhow::{ensure, Result};

/// Number of samples in one period of the table.
pub const NUM_SAMPLES: usize = 128;

/// Largest PWM duty value (8-bit counter).
pub const MAX_PWM: u32 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub num_samples: usize,   // samples per period
    pub max_amplitude: u32,   // full-scale PWM value
}

impl TableConfig {
    pub fn new(num_samples: usize, max_amplitude: u32) -> Self {
        Self {
            num_samples,
            max_amplitude,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.num_samples > 0,
            "sample count must be positive, got {}",
            self.num_samples
        );
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(NUM_SAMPLES, MAX_PWM)
    }
}
