use anyhow::Result;
use log::LevelFilter;
use sine_pwm_table::TableConfig;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    let stdout = std::io::stdout();
    let table = sine_pwm_table::run(&TableConfig::default(), &mut stdout.lock())?;

    #[cfg(feature = "plot")]
    sine_pwm_table::plot::show_plot(&table)?;
    #[cfg(not(feature = "plot"))]
    let _ = table;

    Ok(())
}
