use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use image::{imageops, RgbImage};
use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::chart::ChartSpec;
use crate::color::to_plotters;

// ---------------------------------------------------------------------------
// Figure geometry
// ---------------------------------------------------------------------------

/// Figure size in inches.
pub const FIGURE_INCHES: (f64, f64) = (6.4, 4.8);
pub const DPI: f64 = 300.0;
/// Blank border kept around the drawn content.
pub const PAD_INCHES: f64 = 0.1;

fn px(inches: f64) -> u32 {
    (inches * DPI).round() as u32
}

/// Pixel length usable as a plotters size.
fn size(inches: f64) -> i32 {
    px(inches) as i32
}

/// Font size in pixels for a size given in points.
fn pt(points: f64) -> f64 {
    points * DPI / 72.0
}

/// Output size in pixels.
pub fn figure_size() -> (u32, u32) {
    (px(FIGURE_INCHES.0), px(FIGURE_INCHES.1))
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write the chart to `path`. `.svg` gives a vector file on the full
/// figure canvas. Every other extension goes through the raster path, is
/// cropped to the drawn content plus the padding and is encoded as PNG
/// (with its DPI recorded) or by `image`.
pub fn save_chart(spec: &ChartSpec, path: &Path) -> Result<()> {
    let dims = figure_size();

    if has_extension(path, "svg") {
        let root = SVGBackend::new(path, dims).into_drawing_area();
        draw_chart(&root, spec)?;
        root.present()
            .with_context(|| format!("writing {}", path.display()))?;
    } else {
        let (width, height) = dims;
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, dims).into_drawing_area();
            draw_chart(&root, spec)?;
            root.present().context("rasterizing chart")?;
        }
        let canvas = RgbImage::from_raw(width, height, buffer)
            .context("chart buffer does not match the figure size")?;
        let bg = spec.style.figure_background;
        let cropped = tight_crop(&canvas, image::Rgb([bg.red, bg.green, bg.blue]), px(PAD_INCHES));
        debug!(
            "cropped {}x{} canvas to {}x{}",
            width,
            height,
            cropped.width(),
            cropped.height()
        );
        if has_extension(path, "png") {
            write_png(&cropped, path)?;
        } else {
            cropped
                .save(path)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }

    info!("Saved \"{}\" to {}", spec.title, path.display());
    Ok(())
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Crop `canvas` to the pixels that differ from `background`, keeping
/// `pad` pixels of border where the canvas has room for them.
fn tight_crop(canvas: &RgbImage, background: image::Rgb<u8>, pad: u32) -> RgbImage {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in canvas.enumerate_pixels() {
        if *pixel == background {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    let Some((x0, y0, x1, y1)) = bounds else {
        return canvas.clone();
    };
    let left = x0.saturating_sub(pad);
    let top = y0.saturating_sub(pad);
    let right = (x1 + 1 + pad).min(canvas.width());
    let bottom = (y1 + 1 + pad).min(canvas.height());
    imageops::crop_imm(canvas, left, top, right - left, bottom - top).to_image()
}

/// PNG pixel density in the unit the pHYs chunk uses.
fn pixels_per_meter() -> u32 {
    (DPI / 0.0254).round() as u32
}

fn write_png(img: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), img.width(), img.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: pixels_per_meter(),
        yppu: pixels_per_meter(),
        unit: png::Unit::Meter,
    }));
    let mut writer = encoder
        .write_header()
        .with_context(|| format!("writing {}", path.display()))?;
    writer
        .write_image_data(img.as_raw())
        .with_context(|| format!("writing {}", path.display()))?;
    writer.finish().context("finishing PNG stream")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

fn draw_chart<DB>(root: &DrawingArea<DB, Shift>, spec: &ChartSpec) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let style = &spec.style;
    let text_color = to_plotters(style.text);
    let axes_background = to_plotters(style.axes_background);

    root.fill(&to_plotters(style.figure_background))?;

    let n_categories = spec.categories.len().max(1);
    let mut chart = ChartBuilder::on(root)
        .caption(
            &spec.title,
            ("sans-serif", pt(12.0)).into_font().color(&text_color),
        )
        .margin(size(PAD_INCHES))
        .x_label_area_size(size(0.5))
        .y_label_area_size(size(0.6))
        .build_cartesian_2d(-0.5..(n_categories as f64 - 0.5), 0f64..spec.y_max())?;

    chart.plotting_area().fill(&axes_background)?;

    // Ticks fall on the integer category centres; everything else stays blank.
    let x_formatter = |x: &f64| spec.category_label(*x).unwrap_or_default();
    let y_formatter = |y: &f64| format!("{y:.1}");
    let mut mesh = chart.configure_mesh();
    mesh.x_labels(n_categories)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .x_desc(spec.x_label)
        .y_desc(spec.y_label)
        .axis_style(&axes_background)
        .label_style(("sans-serif", pt(10.0)).into_font().color(&text_color))
        .axis_desc_style(("sans-serif", pt(11.0)).into_font().color(&text_color));
    if !style.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    let bars = spec.bars();
    for (g, group) in spec.groups.iter().enumerate() {
        let color = to_plotters(group.color);
        chart
            .draw_series(bars.iter().filter(|b| b.group == g).map(|b| {
                Rectangle::new(
                    [
                        (b.center - b.width / 2.0, 0.0),
                        (b.center + b.width / 2.0, b.value),
                    ],
                    color.filled(),
                )
            }))?
            .label(group.label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 15), (x + 40, y + 15)], color.filled()));
    }

    if spec.bar_labels {
        let label_style = ("sans-serif", pt(8.0))
            .into_font()
            .color(&text_color)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(bars.iter().map(|b| {
            Text::new(
                format!("{:.2}", b.value),
                (b.center, b.value),
                label_style.clone(),
            )
        }))?;
    }

    if !spec.groups.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .legend_area_size(size(0.2))
            .background_style(&to_plotters(style.figure_background).mix(0.8))
            .border_style(&axes_background)
            .label_font(("sans-serif", pt(10.0)).into_font().color(&text_color))
            .draw()?;
    }

    Ok(())
}
