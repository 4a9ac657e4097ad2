//! Line plot of a sample table in a window, sample index against PWM value.

use anyhow::{anyhow, ensure, Result};
use minifb::{Key, Window, WindowOptions};
use plotters::prelude::*;

use crate::table::SampleTable;

pub const X_LABEL: &str = "Sample index";
pub const Y_LABEL: &str = "PWM value";

pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 480;

pub fn title(num_samples: usize) -> String {
    format!("{}-sample PWM sine wave", num_samples)
}

/// Draws the table into an RGB buffer of `width * height * 3` bytes.
pub fn render_plot(
    samples: &[u32],
    max_value: u32,
    (width, height): (usize, usize),
) -> Result<Vec<u8>> {
    ensure!(!samples.is_empty(), "nothing to plot");
    ensure!(
        width > 0 && height > 0,
        "plot area too small: {}x{}",
        width,
        height
    );

    let n = samples.len();
    let mut rgb = vec![0u8; width * height * 3];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width as u32, height as u32))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title(n), ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0..n, 0..max_value + 1)?;

        // the mesh is the grid
        chart
            .configure_mesh()
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .draw()?;

        chart.draw_series(LineSeries::new(
            samples.iter().enumerate().map(|(i, v)| (i, *v)),
            &BLUE,
        ))?;

        root.present()?;
    }
    Ok(rgb)
}

/// Packs RGB bytes into the 0RGB words minifb draws.
pub fn to_frame(rgb: &[u8]) -> Vec<u32> {
    rgb.chunks_exact(3)
        .map(|p| (p[0] as u32) << 16 | (p[1] as u32) << 8 | p[2] as u32)
        .collect()
}

/// Opens a window with the plot and blocks until it is closed (or Escape).
pub fn show_plot(table: &SampleTable) -> Result<()> {
    let rgb = render_plot(table.as_slice(), table.max_amplitude(), (WIDTH, HEIGHT))?;
    let frame = to_frame(&rgb);

    let mut window = Window::new(
        &title(table.len()),
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )
    .map_err(|e| anyhow!("cannot open plot window: {}", e))?;
    window.set_target_fps(30);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&frame, WIDTH, HEIGHT)
            .map_err(|e| anyhow!("plot window update: {}", e))?;
    }
    Ok(())
}
