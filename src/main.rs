mod app;
mod color;
mod config;
mod data;
mod figure;
mod pipeline;
mod stats;
mod ui;

use config::PlotConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = PlotConfig::default();
    pipeline::run(&config).inspect_err(|e| log::error!("{e:#}"))
}
