/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet   (one directory)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse files → Vec<Measurement>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  include / exclude by function name
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ SpeedupDataset │  cycles → speedup against the baseline
///   └────────────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
