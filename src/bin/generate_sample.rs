use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use clap::Parser;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// Write a synthetic benchmark result set for speedup-plot.
#[derive(Debug, Parser)]
struct Args {
    /// Directory to write the result files into.
    #[arg(default_value = "plots/data")]
    out_dir: PathBuf,
}

#[derive(Debug, Serialize)]
struct Record<'a> {
    function: &'a str,
    optimization: &'a str,
    parallelism: u32,
    cycles: u64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform jitter in `[1 - amount, 1 + amount)`.
    fn jitter(&mut self, amount: f64) -> f64 {
        1.0 + amount * (2.0 * self.next_f64() - 1.0)
    }
}

const PARALLELISM: [u32; 4] = [1, 2, 4, 8];

/// (function, single-core baseline cycles per element)
const FUNCTIONS: [(&str, f64); 3] = [("sigmoid", 412.0), ("sin", 268.0), ("exp", 190.0)];

/// Cycles of `optimization` relative to the baseline at a parallelism level.
fn cost_factor(optimization: &str, parallelism: u32) -> f64 {
    let scale = (parallelism as f64).log2();
    match optimization {
        "ssr" => 1.0 / (1.6 + 0.15 * scale),
        "frep" => 1.0 / (2.2 + 0.35 * scale),
        _ => 1.0,
    }
}

fn measurements<'a>(function: &'a str, per_element: f64, rng: &mut SimpleRng) -> Vec<Record<'a>> {
    let mut records = Vec::new();
    for &par in &PARALLELISM {
        let elements = 1024.0 / par as f64;
        for optimization in ["baseline", "ssr", "frep"] {
            let cycles = per_element * elements * cost_factor(optimization, par) * rng.jitter(0.03);
            records.push(Record {
                function,
                optimization,
                parallelism: par,
                cycles: cycles.round() as u64,
            });
        }
    }
    records
}

fn main() -> Result<()> {
    let args = Args::parse();
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let mut written = 0;

    // CSV for every function but the last, which goes to parquet.
    let (parquet_fn, csv_fns) = FUNCTIONS.split_last().context("no functions configured")?;

    for &(function, per_element) in csv_fns {
        let path = args.out_dir.join(format!("{function}.csv"));
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        for record in measurements(function, per_element, &mut rng) {
            writer.serialize(record)?;
            written += 1;
        }
        writer.flush()?;
    }

    let (function, per_element) = *parquet_fn;
    let records = measurements(function, per_element, &mut rng);
    let schema = Arc::new(Schema::new(vec![
        Field::new("function", DataType::Utf8, false),
        Field::new("optimization", DataType::Utf8, false),
        Field::new("parallelism", DataType::Int64, false),
        Field::new("cycles", DataType::Int64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(vec![function; records.len()])),
            Arc::new(StringArray::from(
                records.iter().map(|r| r.optimization).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                records.iter().map(|r| r.parallelism as i64).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                records.iter().map(|r| r.cycles as i64).collect::<Vec<_>>(),
            )),
        ],
    )?;
    let path = args.out_dir.join(format!("{function}.parquet"));
    let file = std::fs::File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    written += records.len();

    println!(
        "Wrote {written} measurements for {} functions to {}",
        FUNCTIONS.len(),
        args.out_dir.display()
    );
    Ok(())
}
