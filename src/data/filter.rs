use super::model::Measurement;

// ---------------------------------------------------------------------------
// Series filter: which functions take part in the chart
// ---------------------------------------------------------------------------

/// Include / exclude lists of function names. Matching is exact.
///
/// * `include` empty → every function is a candidate
/// * `include` non-empty → only listed functions are candidates
/// * a function listed in `exclude` never passes, even if included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl SeriesFilter {
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self { include, exclude }
    }

    /// Whether measurements of `function` pass the filter.
    pub fn admits(&self, function: &str) -> bool {
        if self.exclude.iter().any(|e| e == function) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|i| i == function)
    }

    /// Keep only the measurements whose function passes.
    pub fn apply(&self, measurements: Vec<Measurement>) -> Vec<Measurement> {
        measurements
            .into_iter()
            .filter(|m| self.admits(&m.function))
            .collect()
    }
}
