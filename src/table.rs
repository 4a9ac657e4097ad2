//! Quantized sine lookup table for PWM output.
//!
//! One full period, `num_samples` entries, each in `0..=max_amplitude`.
//! Index 0 sits at mid-scale, N/4 at the peak, 3N/4 at the trough.

use anyhow::Result;
use log::debug;
use std::ops::Index;

use crate::config::TableConfig;
use crate::util::gen_unit_sin;

/// Quantizes one unit sine value to a PWM duty in `0..=max_amplitude`.
///
/// The sine is lifted into `0.0..=1.0` before scaling and the result is
/// truncated toward zero.
#[inline(always)]
pub fn quantize(sin: f64, max_amplitude: u32) -> u32 {
    (max_amplitude as f64 * ((sin + 1.0) / 2.0)) as u32
}

/// Value of sample `index` in a table of `num_samples` entries.
///
/// `num_samples` must be non-zero.
pub fn pwm_sample(index: usize, num_samples: usize, max_amplitude: u32) -> u32 {
    let phase = (2.0 * std::f64::consts::PI * index as f64) / num_samples as f64;
    quantize(phase.sin(), max_amplitude)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleTable {
    max_amplitude: u32,
    samples: Vec<u32>,
}

impl SampleTable {
    pub fn generate(config: &TableConfig) -> Result<SampleTable> {
        config.validate()?;

        let samples: Vec<u32> = gen_unit_sin(config.num_samples)
            .into_iter()
            .map(|sin| quantize(sin, config.max_amplitude))
            .collect();

        debug!(
            "generated {} samples, max_amplitude {}",
            samples.len(),
            config.max_amplitude
        );

        Ok(SampleTable {
            max_amplitude: config.max_amplitude,
            samples,
        })
    }

    pub fn max_amplitude(&self) -> u32 {
        self.max_amplitude
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        self.samples.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.samples.iter().copied()
    }
}

impl Index<usize> for SampleTable {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.samples[index]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{MAX_PWM, NUM_SAMPLES};

    fn default_table() -> SampleTable {
        SampleTable::generate(&TableConfig::default()).unwrap()
    }

    #[test]
    fn test_len() {
        let table = default_table();
        assert_eq!(table.len(), NUM_SAMPLES);
        assert!(!table.is_empty());
        assert_eq!(table.max_amplitude(), MAX_PWM);
    }

    #[test]
    fn test_range() {
        let table = default_table();
        assert!(table.iter().all(|v| v <= MAX_PWM));
    }

    #[test]
    fn test_landmarks() {
        let table = default_table();
        // 255 * 0.5 = 127.5, truncated
        assert_eq!(table[0], 127);
        assert_eq!(table[32], 255);
        assert_eq!(table[96], 0);
        assert_eq!(table.iter().max(), Some(255));
        assert_eq!(table.iter().min(), Some(0));
    }

    #[test]
    fn test_half_period_symmetry() {
        let table = default_table();
        for i in 1..NUM_SAMPLES / 2 {
            let sum = table[i] + table[NUM_SAMPLES - i];
            assert!(sum == 254 || sum == 255, "i {}, sum {}", i, sum);
        }
    }

    #[test]
    fn test_quarter_period_symmetry() {
        let table = default_table();
        for i in 0..=NUM_SAMPLES / 4 {
            let a = table[NUM_SAMPLES / 4 - i] as i64;
            let b = table[NUM_SAMPLES / 4 + i] as i64;
            assert!((a - b).abs() <= 1, "i {}, a {}, b {}", i, a, b);
        }
    }

    #[test]
    fn test_printed_lines() {
        let table = default_table();
        let mut out = vec![];
        crate::util::write_lines(table.as_slice(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<u32> = text.lines().map(|l| l.parse().unwrap()).collect();
        assert_eq!(lines.len(), NUM_SAMPLES);
        assert!(lines.iter().all(|v| *v <= MAX_PWM));
        assert_eq!(lines, table.as_slice());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(default_table(), default_table());
    }

    #[test]
    fn test_matches_pwm_sample() {
        let table = default_table();
        for (i, v) in table.iter().enumerate() {
            assert_eq!(v, pwm_sample(i, NUM_SAMPLES, MAX_PWM));
        }
    }

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(0.0, 255), 127);
        assert_eq!(quantize(1.0, 255), 255);
        assert_eq!(quantize(-1.0, 255), 0);
        assert_eq!(quantize(0.0, 256), 128);
        assert_eq!(quantize(0.5, 0), 0);
    }

    #[test]
    fn test_zero_samples() {
        assert!(SampleTable::generate(&TableConfig::new(0, MAX_PWM)).is_err());
    }

    #[test]
    fn test_single_sample() {
        let table = SampleTable::generate(&TableConfig::new(1, MAX_PWM)).unwrap();
        assert_eq!(table.as_slice(), &[127]);
        assert_eq!(table.get(1), None);
    }

    #[test]
    fn test_zero_amplitude() {
        let table = SampleTable::generate(&TableConfig::new(NUM_SAMPLES, 0)).unwrap();
        assert!(table.iter().all(|v| v == 0));
    }
}
