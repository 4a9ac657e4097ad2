//! Quantized sine lookup table for driving a PWM output.
//!
//! [`SampleTable::generate`] builds one period of `num_samples` duty values in
//! `0..=max_amplitude`, see [`table::quantize`] for the formula.

use anyhow::Result;
use log::{debug, warn};
use std::io::Write;

pub mod config;
#[cfg(feature = "plot")]
pub mod plot;
pub mod spectrum;
pub mod table;
pub mod util;

pub use config::{TableConfig, MAX_PWM, NUM_SAMPLES};
pub use spectrum::{analyze, SpectrumReport};
pub use table::SampleTable;

/// Generates the table and writes it to `out`, one value per line.
///
/// Only sample lines go to `out`, diagnostics go through `log`. The spectral
/// check is advisory and never keeps the table from being written.
pub fn run<W: Write>(config: &TableConfig, out: &mut W) -> Result<SampleTable> {
    let table = SampleTable::generate(config)?;

    match analyze(table.as_slice()) {
        Ok(report) => debug!(
            "{} samples, max {}: dc {:.3}, fundamental {:.3}, thd {:.3} %",
            table.len(),
            table.max_amplitude(),
            report.dc,
            report.fundamental,
            report.thd_percent()
        ),
        Err(e) => warn!("spectral check skipped: {:#}", e),
    }

    util::write_lines(table.as_slice(), out)?;
    Ok(table)
}
