use std::time::Duration;

use clap::Parser;

use rwmem_sniff::{
    Sniffer, SnifferConfig,
    app::{App, Watch},
};

/// Poll the value at ADDRESS and chart it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(allow_hyphen_values = true)]
    address: String,

    /// Milliseconds between readings
    #[arg(short, long, default_value_t = 10)]
    interval_ms: u64,

    /// Readings kept for the chart
    #[arg(short = 'n', long, default_value_t = 256)]
    history: usize,
}

fn main() -> color_eyre::Result<()> {
    let args = Args::parse();
    let sniffer = Sniffer::new(SnifferConfig::from_env());
    let watch = Watch::new(sniffer, args.address, args.history);

    color_eyre::install()?;
    ratatui::run(|t| App::new(watch, Duration::from_millis(args.interval_ms)).run(t))?;
    Ok(())
}
