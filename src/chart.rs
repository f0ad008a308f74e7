use crate::color::{hue_palette, Rgb};
use crate::data::model::{Parallelism, SpeedupDataset, SpeedupRow};
use crate::style::Style;

/// Share of a category slot covered by its bars.
const GROUP_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Chart description
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub title: String,
    pub style: Style,
    /// Draw the numeric value above each bar.
    pub bar_labels: bool,
}

/// One hue (optimization) with its value for every category.
#[derive(Debug, Clone, PartialEq)]
pub struct HueGroup {
    pub label: String,
    pub color: Rgb,
    /// Indexed like [`ChartSpec::categories`]; `None` where there is no data.
    pub values: Vec<Option<f64>>,
}

/// A bar positioned on the categorical x axis. Category `i` is centred on `x = i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedBar {
    pub group: usize,
    pub category: usize,
    pub center: f64,
    pub width: f64,
    pub value: f64,
}

/// Everything needed to draw the grouped speedup bar chart, independent of
/// the backend drawing it.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub style: Style,
    pub bar_labels: bool,
    pub categories: Vec<Parallelism>,
    pub groups: Vec<HueGroup>,
    /// The rows the bars were aggregated from.
    pub rows: Vec<SpeedupRow>,
}

/// `"<first include> Speedup Plot"`, or `"Speedup Plot"` without includes.
pub fn title_for(include: &[String]) -> String {
    match include.first() {
        Some(first) => format!("{first} Speedup Plot"),
        None => "Speedup Plot".to_string(),
    }
}

impl ChartSpec {
    /// Aggregate `dataset` into bars: x = parallelism, hue = optimization,
    /// height = mean speedup of the matching rows.
    pub fn build(dataset: &SpeedupDataset, options: ChartOptions) -> Self {
        let mut categories: Vec<Parallelism> = Vec::new();
        let mut labels: Vec<String> = Vec::new();
        for row in &dataset.rows {
            if !categories.contains(&row.parallelism) {
                categories.push(row.parallelism.clone());
            }
            if !labels.contains(&row.optimization) {
                labels.push(row.optimization.clone());
            }
        }
        categories.sort();

        let colors = hue_palette(labels.len());
        let groups = labels
            .into_iter()
            .zip(colors)
            .map(|(label, color)| {
                let values = categories
                    .iter()
                    .map(|category| {
                        mean(
                            dataset
                                .rows
                                .iter()
                                .filter(|r| r.optimization == label && &r.parallelism == category)
                                .map(|r| r.speedup),
                        )
                    })
                    .collect();
                HueGroup {
                    label,
                    color,
                    values,
                }
            })
            .collect();

        ChartSpec {
            title: options.title,
            x_label: "parallelism",
            y_label: "speedup",
            style: options.style,
            bar_labels: options.bar_labels,
            categories,
            groups,
            rows: dataset.rows.clone(),
        }
    }

    /// All bars that have data, with their position on the x axis.
    pub fn bars(&self) -> Vec<PlacedBar> {
        let n = self.groups.len().max(1) as f64;
        let width = GROUP_WIDTH / n;
        self.groups
            .iter()
            .enumerate()
            .flat_map(|(g, group)| {
                group
                    .values
                    .iter()
                    .enumerate()
                    .filter_map(move |(c, value)| {
                        Some(PlacedBar {
                            group: g,
                            category: c,
                            center: c as f64 - GROUP_WIDTH / 2.0 + width * (g as f64 + 0.5),
                            width,
                            value: (*value)?,
                        })
                    })
            })
            .collect()
    }

    /// Top of the y axis: 10% headroom above the tallest bar.
    pub fn y_max(&self) -> f64 {
        let tallest = self.bars().iter().map(|b| b.value).fold(0.0, f64::max);
        if tallest > 0.0 {
            tallest * 1.1
        } else {
            1.0
        }
    }

    /// Category label for an x coordinate, if it sits on a category centre.
    pub fn category_label(&self, x: f64) -> Option<String> {
        self.categories
            .get(category_index(x)?)
            .map(|c| c.to_string())
    }
}

/// Index of the category centred on `x`, if `x` is (close to) an integer.
pub fn category_index(x: f64) -> Option<usize> {
    let i = x.round();
    ((x - i).abs() <= 1e-6 && i >= 0.0).then_some(i as usize)
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}
