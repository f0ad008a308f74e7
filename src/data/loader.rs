use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arrow::array::{
    Array, ArrayRef, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray,
    StringArray, UInt32Array, UInt64Array,
};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use log::{debug, info, warn};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::filter::SeriesFilter;
use super::model::{Measurement, Metric, Parallelism, SpeedupDataset, SpeedupRow};

const COLUMNS: [&str; 5] = ["function", "optimization", "parallelism", "cycles", "speedup"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

/// Why a single result row was rejected.
#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("missing '{0}' value")]
    MissingColumn(&'static str),
    #[error("'{column}': '{value}' is not a number")]
    NotANumber { column: &'static str, value: String },
    #[error("cycles must be positive, got {0}")]
    NonPositiveCycles(f64),
    #[error("speedup must not be negative, got {0}")]
    NegativeSpeedup(f64),
    #[error("row has neither 'cycles' nor 'speedup'")]
    MissingMetric,
    #[error("'{column}' has unsupported column type {data_type:?}")]
    UnsupportedType {
        column: &'static str,
        data_type: DataType,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every result file in `dir`, keep the series admitted by `filter`
/// and turn cycle counts into speedups against `baseline`.
///
/// Returns the surviving function names alongside the dataset.
pub fn load_speedup_data(
    dir: &Path,
    filter: &SeriesFilter,
    baseline: &str,
) -> Result<(Vec<String>, SpeedupDataset)> {
    let files = result_files(dir)?;
    let mut measurements = Vec::new();
    for path in &files {
        let mut loaded =
            load_file(path).with_context(|| format!("loading {}", path.display()))?;
        debug!("{}: {} measurements", path.display(), loaded.len());
        measurements.append(&mut loaded);
    }

    let total = measurements.len();
    let measurements = filter.apply(measurements);
    let dataset = SpeedupDataset::from_rows(compute_speedups(&measurements, baseline));

    info!(
        "Loaded {total} measurements from {} files, {} rows after filtering ({:?})",
        files.len(),
        dataset.len(),
        dataset.functions
    );
    Ok((dataset.functions.clone(), dataset))
}

/// Load the measurements of a single result file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row; `function`, `optimization`, `parallelism`,
///   and `cycles` or `speedup`
/// * `.json`    – `[{ "function": ..., "optimization": ..., ... }, ...]`
/// * `.parquet` – flat columns with the same names
pub fn load_file(path: &Path) -> Result<Vec<Measurement>> {
    match extension(path).as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

/// Turn measurements into plotted rows.
///
/// A cycle count becomes `baseline cycles / cycles`, where the baseline is
/// the mean of the `baseline` rows with the same function and parallelism.
/// Rows without such a baseline are dropped.
pub fn compute_speedups(measurements: &[Measurement], baseline: &str) -> Vec<SpeedupRow> {
    let mut baselines: HashMap<(&str, &Parallelism), (f64, usize)> = HashMap::new();
    for m in measurements.iter().filter(|m| m.optimization == baseline) {
        if let Metric::Cycles(cycles) = m.metric {
            let entry = baselines
                .entry((m.function.as_str(), &m.parallelism))
                .or_insert((0.0, 0));
            entry.0 += cycles;
            entry.1 += 1;
        }
    }

    let mut skipped = 0usize;
    let rows: Vec<SpeedupRow> = measurements
        .iter()
        .filter_map(|m| {
            let speedup = match m.metric {
                Metric::Speedup(s) => s,
                Metric::Cycles(cycles) => {
                    match baselines.get(&(m.function.as_str(), &m.parallelism)) {
                        Some(&(sum, n)) => (sum / n as f64) / cycles,
                        None => {
                            skipped += 1;
                            return None;
                        }
                    }
                }
            };
            Some(SpeedupRow {
                function: m.function.clone(),
                parallelism: m.parallelism.clone(),
                speedup,
                optimization: m.optimization.clone(),
            })
        })
        .collect();

    if skipped > 0 {
        warn!("Skipped {skipped} measurements without a '{baseline}' row to compare against");
    }
    rows
}

// ---------------------------------------------------------------------------
// Directory listing
// ---------------------------------------------------------------------------

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

fn is_result_file(path: &Path) -> bool {
    matches!(extension(path).as_str(), "csv" | "json" | "parquet" | "pq")
}

/// Supported files directly inside `dir`, sorted by name.
fn result_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("reading data directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("listing {}", dir.display()))?
            .path();
        if path.is_file() && is_result_file(&path) {
            files.push(path);
        } else {
            debug!("Skipping {}", path.display());
        }
    }
    files.sort();
    Ok(files)
}

// ---------------------------------------------------------------------------
// Row assembly shared by all formats
// ---------------------------------------------------------------------------

/// A single cell as read from any of the formats.
#[derive(Debug, Clone)]
enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn into_text(self) -> String {
        match self {
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) => n.to_string(),
        }
    }

    fn to_number(&self, column: &'static str) -> Result<f64, RowError> {
        match self {
            Cell::Number(n) => Ok(*n),
            Cell::Text(s) => s.trim().parse::<f64>().map_err(|_| RowError::NotANumber {
                column,
                value: s.clone(),
            }),
        }
    }
}

fn measurement_from_cells(
    mut cell: impl FnMut(&'static str) -> Option<Cell>,
) -> Result<Measurement, RowError> {
    let mut text = |column: &'static str| {
        cell(column)
            .map(Cell::into_text)
            .ok_or(RowError::MissingColumn(column))
    };
    let function = text("function")?;
    let optimization = text("optimization")?;
    let parallelism = Parallelism::parse(&text("parallelism")?);

    let metric = match (cell("cycles"), cell("speedup")) {
        (Some(c), _) => {
            let cycles = c.to_number("cycles")?;
            if !(cycles > 0.0) {
                return Err(RowError::NonPositiveCycles(cycles));
            }
            Metric::Cycles(cycles)
        }
        (None, Some(s)) => {
            let speedup = s.to_number("speedup")?;
            if !(speedup >= 0.0) {
                return Err(RowError::NegativeSpeedup(speedup));
            }
            Metric::Speedup(speedup)
        }
        (None, None) => return Err(RowError::MissingMetric),
    };

    Ok(Measurement {
        function,
        optimization,
        parallelism,
        metric,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one measurement per record.
/// Empty cells count as missing; unknown columns are ignored.
fn load_csv(path: &Path) -> Result<Vec<Measurement>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();
    let index: HashMap<&'static str, usize> = COLUMNS
        .iter()
        .filter_map(|&name| Some((name, headers.iter().position(|h| h.trim() == name)?)))
        .collect();

    let mut measurements = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let m = measurement_from_cells(|column| {
            let value = record.get(*index.get(column)?)?;
            (!value.trim().is_empty()).then(|| Cell::Text(value.to_string()))
        })
        .with_context(|| format!("CSV row {row_no}"))?;
        measurements.push(m);
    }
    Ok(measurements)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "function": "sigmoid", "optimization": "ssr", "parallelism": 4, "cycles": 1520 },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<Measurement>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let obj = rec
                .as_object()
                .with_context(|| format!("Row {i} is not a JSON object"))?;
            measurement_from_cells(|column| json_cell(obj.get(column)?))
                .with_context(|| format!("Row {i}"))
        })
        .collect()
}

fn json_cell(val: &JsonValue) -> Option<Cell> {
    match val {
        JsonValue::Null => None,
        JsonValue::String(s) if s.trim().is_empty() => None,
        JsonValue::String(s) => Some(Cell::Text(s.clone())),
        JsonValue::Number(n) => n.as_f64().map(Cell::Number),
        other => Some(Cell::Text(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per field.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Vec<Measurement>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut measurements = Vec::new();
    let mut offset = 0;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();
        let mut columns: HashMap<&'static str, ArrayRef> = HashMap::new();
        for &name in &COLUMNS {
            if let Ok(index) = schema.index_of(name) {
                columns.insert(name, readable_column(name, batch.column(index))?);
            }
        }

        for row in 0..batch.num_rows() {
            let m = measurement_from_cells(|column| parquet_cell(columns.get(column)?, row))
                .with_context(|| format!("Row {}", offset + row))?;
            measurements.push(m);
        }
        offset += batch.num_rows();
    }

    Ok(measurements)
}

/// Bring a column into one of the plain types `parquet_cell` reads.
///
/// Dictionary-encoded columns (pandas categoricals) and string views are
/// cast to their plain form; anything else unknown is rejected.
fn readable_column(name: &'static str, col: &ArrayRef) -> Result<ArrayRef> {
    let target = match col.data_type() {
        DataType::Utf8
        | DataType::LargeUtf8
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt32
        | DataType::UInt64
        | DataType::Float32
        | DataType::Float64 => return Ok(col.clone()),
        DataType::Utf8View => DataType::Utf8,
        DataType::Dictionary(_, value) => match value.as_ref() {
            DataType::Utf8View => DataType::Utf8,
            plain => plain.clone(),
        },
        other => {
            return Err(RowError::UnsupportedType {
                column: name,
                data_type: other.clone(),
            }
            .into())
        }
    };
    let converted =
        cast(col, &target).with_context(|| format!("casting '{name}' to {target:?}"))?;
    // Dictionary values may themselves be of an unsupported type.
    readable_column(name, &converted)
}

/// Extract a single cell from an Arrow column at a given row.
fn parquet_cell(col: &ArrayRef, row: usize) -> Option<Cell> {
    if col.is_null(row) {
        return None;
    }
    let any = col.as_any();
    let cell = match col.data_type() {
        DataType::Utf8 => Cell::Text(any.downcast_ref::<StringArray>()?.value(row).to_string()),
        DataType::LargeUtf8 => {
            Cell::Text(any.downcast_ref::<LargeStringArray>()?.value(row).to_string())
        }
        DataType::Int32 => Cell::Number(any.downcast_ref::<Int32Array>()?.value(row) as f64),
        DataType::Int64 => Cell::Number(any.downcast_ref::<Int64Array>()?.value(row) as f64),
        DataType::UInt32 => Cell::Number(any.downcast_ref::<UInt32Array>()?.value(row) as f64),
        DataType::UInt64 => Cell::Number(any.downcast_ref::<UInt64Array>()?.value(row) as f64),
        DataType::Float32 => Cell::Number(any.downcast_ref::<Float32Array>()?.value(row) as f64),
        DataType::Float64 => Cell::Number(any.downcast_ref::<Float64Array>()?.value(row)),
        // `readable_column` has already rejected every other type.
        _ => return None,
    };
    Some(cell)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use arrow::array::{BooleanArray, DictionaryArray};
    use arrow::datatypes::{Field, Int32Type, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    use super::*;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    fn speedup_of(ds: &SpeedupDataset, function: &str, opt: &str, par: u32) -> f64 {
        ds.rows
            .iter()
            .find(|r| {
                r.function == function
                    && r.optimization == opt
                    && r.parallelism == Parallelism::Numeric(par)
            })
            .map(|r| r.speedup)
            .unwrap()
    }

    const SIGMOID_CSV: &str = "\
function,optimization,parallelism,cycles
sigmoid,baseline,1,1000
sigmoid,ssr,1,500
sigmoid,baseline,2,600
sigmoid,ssr,2,200
";

    #[test]
    fn csv_cycles_become_speedups_against_baseline() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "sigmoid.csv", SIGMOID_CSV);

        let (functions, ds) =
            load_speedup_data(dir.path(), &SeriesFilter::default(), "baseline").unwrap();

        assert_eq!(functions, ["sigmoid"]);
        assert_eq!(ds.len(), 4);
        assert_eq!(speedup_of(&ds, "sigmoid", "baseline", 1), 1.0);
        assert_eq!(speedup_of(&ds, "sigmoid", "ssr", 1), 2.0);
        assert_eq!(speedup_of(&ds, "sigmoid", "ssr", 2), 3.0);
    }

    #[test]
    fn filters_are_applied_while_loading() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "sigmoid.csv", SIGMOID_CSV);
        write(
            dir.path(),
            "sin.json",
            r#"[
                {"function": "sin", "optimization": "baseline", "parallelism": 1, "cycles": 900},
                {"function": "sin", "optimization": "ssr", "parallelism": 1, "cycles": 300}
            ]"#,
        );

        let only_sin = SeriesFilter::new(vec!["sin".into()], vec![]);
        let (functions, ds) = load_speedup_data(dir.path(), &only_sin, "baseline").unwrap();
        assert_eq!(functions, ["sin"]);
        assert!(ds.rows.iter().all(|r| r.function == "sin"));
        assert_eq!(speedup_of(&ds, "sin", "ssr", 1), 3.0);

        let no_sin = SeriesFilter::new(vec![], vec!["sin".into()]);
        let (functions, ds) = load_speedup_data(dir.path(), &no_sin, "baseline").unwrap();
        assert_eq!(functions, ["sigmoid"]);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn files_are_read_in_name_order_and_others_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "b.csv",
            "function,optimization,parallelism,speedup\nsin,ssr,1,2.5\n",
        );
        write(
            dir.path(),
            "a.csv",
            "function,optimization,parallelism,speedup\nsigmoid,ssr,1,1.5\n",
        );
        write(dir.path(), "notes.txt", "not a result file");

        let (functions, ds) =
            load_speedup_data(dir.path(), &SeriesFilter::default(), "baseline").unwrap();
        assert_eq!(functions, ["sigmoid", "sin"]);
        assert_eq!(ds.rows[0].speedup, 1.5);
        assert_eq!(ds.rows[1].speedup, 2.5);
    }

    #[test]
    fn rows_without_baseline_are_dropped() {
        let measurements = vec![
            Measurement {
                function: "sin".into(),
                optimization: "ssr".into(),
                parallelism: Parallelism::Numeric(4),
                metric: Metric::Cycles(100.0),
            },
            Measurement {
                function: "sin".into(),
                optimization: "frep".into(),
                parallelism: Parallelism::Numeric(4),
                metric: Metric::Speedup(1.7),
            },
        ];
        let rows = compute_speedups(&measurements, "baseline");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].optimization, "frep");
        assert_eq!(rows[0].speedup, 1.7);
    }

    #[test]
    fn repeated_baseline_rows_are_averaged() {
        let m = |opt: &str, cycles: f64| Measurement {
            function: "sin".into(),
            optimization: opt.into(),
            parallelism: Parallelism::Numeric(1),
            metric: Metric::Cycles(cycles),
        };
        let rows = compute_speedups(
            &[m("baseline", 800.0), m("baseline", 1200.0), m("ssr", 250.0)],
            "baseline",
        );
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].speedup, 4.0);
    }

    #[test]
    fn custom_baseline_label() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "sin.csv",
            "function,optimization,parallelism,cycles\nsin,naive,1,300\nsin,ssr,1,100\n",
        );
        let (_, ds) = load_speedup_data(dir.path(), &SeriesFilter::default(), "naive").unwrap();
        assert_eq!(speedup_of(&ds, "sin", "ssr", 1), 3.0);
    }

    #[test]
    fn malformed_rows_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "bad.csv",
            "function,optimization,parallelism,cycles\nsin,ssr,1,lots\n",
        );
        let err = load_speedup_data(dir.path(), &SeriesFilter::default(), "baseline")
            .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("bad.csv"), "{message}");
        assert!(message.contains("not a number"), "{message}");
    }

    #[test]
    fn row_validation() {
        let cells = |cycles: Option<&str>, speedup: Option<&str>| {
            let cycles = cycles.map(|s| Cell::Text(s.into()));
            let speedup = speedup.map(|s| Cell::Text(s.into()));
            measurement_from_cells(move |column| match column {
                "function" => Some(Cell::Text("sin".into())),
                "optimization" => Some(Cell::Text("ssr".into())),
                "parallelism" => Some(Cell::Number(2.0)),
                "cycles" => cycles.clone(),
                "speedup" => speedup.clone(),
                _ => None,
            })
        };
        assert_eq!(cells(Some("0"), None), Err(RowError::NonPositiveCycles(0.0)));
        assert_eq!(cells(None, Some("-1")), Err(RowError::NegativeSpeedup(-1.0)));
        assert_eq!(cells(None, None), Err(RowError::MissingMetric));
        let ok = cells(Some("12"), None).unwrap();
        assert_eq!(ok.parallelism, Parallelism::Numeric(2));
        assert_eq!(ok.metric, Metric::Cycles(12.0));

        let missing = measurement_from_cells(|_| None);
        assert_eq!(missing, Err(RowError::MissingColumn("function")));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_speedup_data(
            &dir.path().join("nope"),
            &SeriesFilter::default(),
            "baseline",
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("reading data directory"));
    }

    #[test]
    fn unsupported_extension() {
        let err = load_file(Path::new("results.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }

    fn write_parquet(dir: &Path, name: &str, columns: Vec<(&str, ArrayRef)>) {
        let fields: Vec<Field> = columns
            .iter()
            .map(|(name, col)| Field::new(*name, col.data_type().clone(), false))
            .collect();
        let schema = Arc::new(Schema::new(fields));
        let batch =
            RecordBatch::try_new(schema.clone(), columns.into_iter().map(|(_, c)| c).collect())
                .unwrap();
        let file = fs::File::create(dir.join(name)).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
    }

    fn utf8(values: [&str; 2]) -> ArrayRef {
        Arc::new(StringArray::from(values.to_vec()))
    }

    #[test]
    fn parquet_results_load() {
        let dir = tempfile::tempdir().unwrap();
        write_parquet(
            dir.path(),
            "exp.parquet",
            vec![
                ("function", utf8(["exp", "exp"])),
                ("optimization", utf8(["baseline", "frep"])),
                ("parallelism", Arc::new(Int64Array::from(vec![8, 8]))),
                ("cycles", Arc::new(Float64Array::from(vec![1000.0, 125.0]))),
            ],
        );

        let (functions, ds) =
            load_speedup_data(dir.path(), &SeriesFilter::default(), "baseline").unwrap();
        assert_eq!(functions, ["exp"]);
        assert_eq!(speedup_of(&ds, "exp", "frep", 8), 8.0);
    }

    #[test]
    fn parquet_column_types() {
        let dictionary = |values: [&str; 2]| -> ArrayRef {
            Arc::new(values.into_iter().collect::<DictionaryArray<Int32Type>>())
        };
        let cases: Vec<(&str, ArrayRef, ArrayRef, ArrayRef, ArrayRef)> = vec![
            (
                "large utf8 names",
                Arc::new(LargeStringArray::from(vec!["exp", "exp"])),
                Arc::new(LargeStringArray::from(vec!["baseline", "frep"])),
                Arc::new(Int64Array::from(vec![8, 8])),
                Arc::new(Float64Array::from(vec![1000.0, 125.0])),
            ),
            (
                "dictionary names",
                dictionary(["exp", "exp"]),
                dictionary(["baseline", "frep"]),
                Arc::new(Int64Array::from(vec![8, 8])),
                Arc::new(Float64Array::from(vec![1000.0, 125.0])),
            ),
            (
                "int32 parallelism",
                utf8(["exp", "exp"]),
                utf8(["baseline", "frep"]),
                Arc::new(Int32Array::from(vec![8, 8])),
                Arc::new(Float64Array::from(vec![1000.0, 125.0])),
            ),
            (
                "uint32 parallelism",
                utf8(["exp", "exp"]),
                utf8(["baseline", "frep"]),
                Arc::new(UInt32Array::from(vec![8, 8])),
                Arc::new(Float64Array::from(vec![1000.0, 125.0])),
            ),
            (
                "uint64 parallelism and cycles",
                utf8(["exp", "exp"]),
                utf8(["baseline", "frep"]),
                Arc::new(UInt64Array::from(vec![8, 8])),
                Arc::new(UInt64Array::from(vec![1000, 125])),
            ),
            (
                "float32 cycles",
                utf8(["exp", "exp"]),
                utf8(["baseline", "frep"]),
                Arc::new(Int64Array::from(vec![8, 8])),
                Arc::new(Float32Array::from(vec![1000.0, 125.0])),
            ),
        ];

        for (case, function, optimization, parallelism, cycles) in cases {
            let dir = tempfile::tempdir().unwrap();
            write_parquet(
                dir.path(),
                "exp.parquet",
                vec![
                    ("function", function),
                    ("optimization", optimization),
                    ("parallelism", parallelism),
                    ("cycles", cycles),
                ],
            );

            let only_exp = SeriesFilter::new(vec!["exp".into()], vec![]);
            let (functions, ds) = load_speedup_data(dir.path(), &only_exp, "baseline")
                .unwrap_or_else(|e| panic!("{case}: {e:#}"));
            assert_eq!(functions, ["exp"], "{case}");
            assert_eq!(ds.len(), 2, "{case}");
            assert_eq!(speedup_of(&ds, "exp", "frep", 8), 8.0, "{case}");
        }
    }

    #[test]
    fn parquet_unsupported_column_type_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_parquet(
            dir.path(),
            "exp.parquet",
            vec![
                ("function", utf8(["exp", "exp"])),
                ("optimization", utf8(["baseline", "frep"])),
                ("parallelism", Arc::new(Int64Array::from(vec![8, 8]))),
                ("cycles", Arc::new(BooleanArray::from(vec![true, false]))),
            ],
        );

        let err = load_speedup_data(dir.path(), &SeriesFilter::default(), "baseline")
            .unwrap_err();
        let row_error = err.chain().find_map(|e| e.downcast_ref::<RowError>());
        assert_eq!(
            row_error,
            Some(&RowError::UnsupportedType {
                column: "cycles",
                data_type: DataType::Boolean,
            })
        );
        assert!(format!("{err:#}").contains("exp.parquet"));
    }
}
