use anyhow::{bail, ensure, Context, Result};
use realfft::RealFftPlanner;
use rustfft::num_complex::Complex;

// The table holds exactly one period, so bin k of the forward transform is
// harmonic k and no window is needed.
//
// samples      |s0, s1, ..., sN-1|          (N)
// spectrum     |X0, X1, ..., XN/2|          (N/2 + 1)
//
// dc           X0 / N
// amplitude    2 |Xk| / N,  Nyquist |XN/2| / N
//

#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumReport {
    pub dc: f64,
    pub fundamental: f64,
    pub harmonics: Vec<f64>, // peak amplitude per bin, harmonics[1] == fundamental
    pub thd: f64,            // ratio, not percent
}

impl SpectrumReport {
    pub fn thd_percent(&self) -> f64 {
        self.thd * 100.0
    }
}

pub fn analyze(samples: &[u32]) -> Result<SpectrumReport> {
    ensure!(!samples.is_empty(), "cannot analyze an empty table");
    let n = samples.len();

    let mut planner = RealFftPlanner::<f64>::new();
    let fft_r2c = planner.plan_fft_forward(n);
    let mut fft_in = fft_r2c.make_input_vec();
    let mut fft_out = fft_r2c.make_output_vec();

    fft_in
        .iter_mut()
        .zip(samples.iter())
        .for_each(|(f, s)| *f = *s as f64);

    fft_r2c
        .process(&mut fft_in, &mut fft_out)
        .context("forward fft of sample table")?;

    let harmonics = amplitudes(&fft_out, n);
    let dc = harmonics[0];

    let Some(&fundamental) = harmonics.get(1) else {
        bail!("table of {} samples has no fundamental bin", n);
    };
    ensure!(fundamental > 0.0, "table has no fundamental component");

    let distortion: f64 = harmonics.iter().skip(2).map(|a| a * a).sum();
    let thd = distortion.sqrt() / fundamental;

    Ok(SpectrumReport {
        dc,
        fundamental,
        harmonics,
        thd,
    })
}

fn amplitudes(spectrum: &[Complex<f64>], n: usize) -> Vec<f64> {
    spectrum
        .iter()
        .enumerate()
        .map(|(k, bin)| {
            // dc and nyquist bins have no mirrored negative frequency
            if k == 0 || 2 * k == n {
                bin.norm() / n as f64
            } else {
                2.0 * bin.norm() / n as f64
            }
        })
        .collect()
}
