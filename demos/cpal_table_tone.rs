use anyhow::{anyhow, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use sine_pwm_table::{SampleTable, TableConfig};
use std::time::Duration;

const TONE_HZ: f32 = 440.0;
const PLAY_TIME: Duration = Duration::from_secs(3);

fn main() -> Result<()> {
    let host = cpal::default_host();

    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow!("no output device"))?;

    println!("Output device: {}", device.name()?);

    let table = SampleTable::generate(&TableConfig::default())?;
    play(&device, &table)
}

fn play(device: &cpal::Device, table: &SampleTable) -> Result<()> {
    let default_config = device.default_output_config()?;
    let sample_rate = default_config.sample_rate().0;
    let channels = default_config.channels() as usize;

    let config = cpal::StreamConfig {
        sample_rate: cpal::SampleRate(sample_rate),
        channels: channels as u16,
        buffer_size: cpal::BufferSize::Default,
    };
    println!("Config: {:?}", config);

    let mut tone = TableTone::new(table, TONE_HZ, sample_rate as f32);
    let err_fn = |err| eprintln!("Error:{}", err);

    let stream = device.build_output_stream(
        &config,
        move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
            write_data(data, channels, &mut || tone.next_sample())
        },
        err_fn,
        None,
    )?;

    stream.play()?;

    std::thread::sleep(PLAY_TIME);
    Ok(())
}

fn write_data(output: &mut [f32], channels: usize, next_sample: &mut dyn FnMut() -> f32) {
    for frame in output.chunks_mut(channels) {
        let value = next_sample();
        for sample in frame.iter_mut() {
            *sample = value;
        }
    }
}

// Steps through the table with a fractional phase accumulator, mapping
// 0..=max to -1.0..=1.0.
pub struct TableTone {
    samples: Vec<f32>,
    phase: f32,     // in table entries
    increment: f32, // table entries per output sample
}

impl TableTone {
    pub fn new(table: &SampleTable, tone_hz: f32, sample_rate: f32) -> TableTone {
        let max = table.max_amplitude().max(1) as f32;
        let samples = table
            .iter()
            .map(|v| v as f32 / max * 2.0 - 1.0)
            .collect();
        TableTone {
            samples,
            phase: 0.0,
            increment: tone_hz * table.len() as f32 / sample_rate,
        }
    }

    pub fn next_sample(&mut self) -> f32 {
        let sample = self.samples[self.phase as usize];
        self.phase = (self.phase + self.increment) % self.samples.len() as f32;
        sample
    }
}
