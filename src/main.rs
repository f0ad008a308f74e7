mod app;
mod chart;
mod cli;
mod color;
mod data;
mod export;
mod output;
mod state;
mod style;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};

use chart::{title_for, ChartOptions, ChartSpec};
use cli::Args;
use data::loader::load_speedup_data;
use output::OutputTarget;
use style::Style;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let cwd = std::env::current_dir().context("reading the working directory")?;
    if let Err(e) = cli::ensure_project_root(&cwd) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    run(&args, &cwd)
}

fn run(args: &Args, cwd: &Path) -> Result<()> {
    let data_dir = cwd.join(&args.data_dir);
    let (functions, dataset) = load_speedup_data(&data_dir, &args.filter(), &args.baseline)?;
    debug!("Plotting functions {functions:?}");
    if dataset.is_empty() {
        warn!("No rows left after filtering, the chart will be empty");
    }

    let spec = ChartSpec::build(
        &dataset,
        ChartOptions {
            title: title_for(&args.include),
            style: Style::dark(),
            bar_labels: args.bar_labels,
        },
    );

    let target = OutputTarget::from_savepath(args.savepath.as_deref(), cwd);
    output::emit(spec, &target)
}
