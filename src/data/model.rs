use std::cmp::Ordering;
use std::fmt;

// ---------------------------------------------------------------------------
// Parallelism – the x-axis category of a measurement
// ---------------------------------------------------------------------------

/// Degree of parallel work units for a measurement.
///
/// Result files usually carry a core count, but free-form labels such as
/// `"2x4"` are kept verbatim so they still get their own bar group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Parallelism {
    Numeric(u32),
    Label(String),
}

// -- Numeric values order numerically and sort before labels --

impl PartialOrd for Parallelism {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Parallelism {
    fn cmp(&self, other: &Self) -> Ordering {
        use Parallelism::*;
        match (self, other) {
            (Numeric(a), Numeric(b)) => a.cmp(b),
            (Numeric(_), Label(_)) => Ordering::Less,
            (Label(_), Numeric(_)) => Ordering::Greater,
            (Label(a), Label(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for Parallelism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parallelism::Numeric(n) => write!(f, "{n}"),
            Parallelism::Label(s) => write!(f, "{s}"),
        }
    }
}

impl Parallelism {
    /// Interpret a text cell. Integral values (including `"4.0"`) become
    /// [`Parallelism::Numeric`], anything else is kept as a label.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Ok(n) = s.parse::<u32>() {
            return Parallelism::Numeric(n);
        }
        if let Ok(f) = s.parse::<f64>() {
            if f.fract() == 0.0 && f >= 0.0 && f <= u32::MAX as f64 {
                return Parallelism::Numeric(f as u32);
            }
        }
        Parallelism::Label(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Measurement – one raw row of a result file
// ---------------------------------------------------------------------------

/// What a result row reports for its configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Raw cycle count; turned into a speedup against the baseline.
    Cycles(f64),
    /// Already a speedup ratio.
    Speedup(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub function: String,
    pub optimization: String,
    pub parallelism: Parallelism,
    pub metric: Metric,
}

// ---------------------------------------------------------------------------
// SpeedupRow / SpeedupDataset – what the chart is built from
// ---------------------------------------------------------------------------

/// One row of the plotted table.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupRow {
    pub function: String,
    pub parallelism: Parallelism,
    pub speedup: f64,
    pub optimization: String,
}

/// The loaded, filtered dataset.
#[derive(Debug, Clone, Default)]
pub struct SpeedupDataset {
    /// Function (series) names present in `rows`, in first-appearance order.
    pub functions: Vec<String>,
    pub rows: Vec<SpeedupRow>,
}

impl SpeedupDataset {
    pub fn from_rows(rows: Vec<SpeedupRow>) -> Self {
        let mut functions: Vec<String> = Vec::new();
        for row in &rows {
            if !functions.contains(&row.function) {
                functions.push(row.function.clone());
            }
        }
        SpeedupDataset { functions, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
