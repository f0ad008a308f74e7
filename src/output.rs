use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::chart::ChartSpec;
use crate::{app, export};

/// Where the finished chart goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Interactive window, blocks until closed.
    Window,
    File(PathBuf),
}

impl OutputTarget {
    /// A save path is taken relative to `cwd`; without one the chart is shown.
    pub fn from_savepath(savepath: Option<&Path>, cwd: &Path) -> Self {
        match savepath {
            Some(path) => OutputTarget::File(cwd.join(path)),
            None => OutputTarget::Window,
        }
    }
}

pub fn emit(spec: ChartSpec, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::File(path) => export::save_chart(&spec, path),
        OutputTarget::Window => app::show(spec),
    }
}
