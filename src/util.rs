use anyhow::Result;
use std::{f64::consts::PI, fmt::Display, io::Write};

// One period of a unit sine, sampled at len points. The phase is computed as
// (2 * pi * k) / len so that quarter points land exactly on pi / 2 multiples
// for power of two lengths.
pub fn gen_unit_sin(len: usize) -> Vec<f64> {
    (0..len)
        .map(|k| ((2.0 * PI * k as f64) / len as f64).sin())
        .collect()
}

/// Writes one value per line, in order.
pub fn write_lines<T, W>(data: &[T], out: &mut W) -> Result<()>
where
    T: Display,
    W: Write,
{
    for k in data {
        writeln!(out, "{}", k)?;
    }
    out.flush()?;
    Ok(())
}
