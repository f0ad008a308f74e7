use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use crate::data::filter::SeriesFilter;

/// Result directory used when neither `--data-dir` nor the environment name one.
pub const DEFAULT_DATA_DIR: &str = "plots/data";

/// Plot benchmark speedups per parallelism level, grouped by optimization.
#[derive(Debug, Parser)]
#[command(name = "speedup-plot", version, about)]
pub struct Args {
    /// Only plot these functions. The first one names the chart.
    #[arg(short, long, num_args = 1.., value_name = "NAME")]
    pub include: Vec<String>,

    /// Leave these functions out.
    #[arg(short, long, num_args = 1.., value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Save the chart to this path (relative to the working directory)
    /// instead of opening a window.
    #[arg(short, long, value_name = "PATH")]
    pub savepath: Option<PathBuf>,

    /// Print the value above every bar.
    #[arg(long)]
    pub bar_labels: bool,

    /// Optimization label the other measurements are compared against.
    #[arg(long, default_value = "baseline", value_name = "LABEL")]
    pub baseline: String,

    /// Directory holding the result files.
    #[arg(long, env = "SPEEDUP_PLOT_DATA_DIR", default_value = DEFAULT_DATA_DIR, value_name = "DIR")]
    pub data_dir: PathBuf,
}

impl Args {
    pub fn filter(&self) -> SeriesFilter {
        SeriesFilter::new(self.include.clone(), self.exclude.clone())
    }
}

#[derive(Debug, Error)]
#[error("please run this script from the project root")]
pub struct NotProjectRoot;

/// The tool only runs from the root of a git checkout.
pub fn ensure_project_root(dir: &Path) -> Result<(), NotProjectRoot> {
    if dir.join(".git").exists() {
        Ok(())
    } else {
        Err(NotProjectRoot)
    }
}
