//! SVG comparison chart of derived vs. ground-truth curvature.
//!
//! Geometry (scaled polylines, tick positions) is computed here; the askama
//! template only lays out static markup around the precomputed values.

use crate::error::ReportError;
use askama::Template;
use ec_kinematics::DerivedSample;
use std::path::Path;
use tracing::info;

/// Chart dimensions and title.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            width: 960,
            height: 420,
            title: "Roadway Curvature Profile".to_string(),
        }
    }
}

/// One axis tick: pixel position plus label text.
struct Tick {
    pos: String,
    label: String,
}

#[derive(Template)]
#[template(path = "chart.svg", escape = "html")]
struct ChartTemplate {
    width: u32,
    height: u32,
    title: String,
    x_label: String,
    y_label: String,
    plot_left: String,
    plot_right: String,
    plot_top: String,
    plot_bottom: String,
    mid_x: String,
    mid_y: String,
    feature_points: String,
    truth_points: String,
    x_ticks: Vec<Tick>,
    y_ticks: Vec<Tick>,
}

const MARGIN_LEFT: f64 = 72.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 44.0;
const MARGIN_BOTTOM: f64 = 52.0;

/// Render the comparison chart as an SVG document.
///
/// Both series are plotted against the row index: the derived
/// `curvature_feature` as a solid line, the ground-truth `curvature` dashed.
pub fn render_chart(rows: &[DerivedSample], options: &ChartOptions) -> Result<String, ReportError> {
    let plot_left = MARGIN_LEFT;
    let plot_right = options.width as f64 - MARGIN_RIGHT;
    let plot_top = MARGIN_TOP;
    let plot_bottom = options.height as f64 - MARGIN_BOTTOM;

    let (y_min, y_max) = value_range(rows);
    let n = rows.len();

    let x_of = |i: usize| -> f64 {
        let span = (n.saturating_sub(1)).max(1) as f64;
        plot_left + (i as f64 / span) * (plot_right - plot_left)
    };
    let y_of = |v: f64| -> f64 {
        plot_bottom - (v - y_min) / (y_max - y_min) * (plot_bottom - plot_top)
    };

    let feature_points = polyline(rows.iter().map(|r| r.curvature_feature), &x_of, &y_of);
    let truth_points = polyline(rows.iter().map(|r| r.curvature), &x_of, &y_of);

    let y_ticks = (0..=4)
        .map(|i| {
            let v = y_min + (y_max - y_min) * (i as f64 / 4.0);
            Tick {
                pos: px(y_of(v)),
                label: format_value(v, y_max - y_min),
            }
        })
        .collect();

    let mut x_ticks: Vec<Tick> = Vec::new();
    for i in 0..=5usize {
        let idx = i * n.saturating_sub(1) / 5;
        let label = idx.to_string();
        if x_ticks.last().is_some_and(|t: &Tick| t.label == label) {
            continue;
        }
        x_ticks.push(Tick {
            pos: px(x_of(idx)),
            label,
        });
    }

    let template = ChartTemplate {
        width: options.width,
        height: options.height,
        title: options.title.clone(),
        x_label: "Time Step Index (approx. 10 Hz)".to_string(),
        y_label: "Curvature (rad/m)".to_string(),
        plot_left: px(plot_left),
        plot_right: px(plot_right),
        plot_top: px(plot_top),
        plot_bottom: px(plot_bottom),
        mid_x: px((plot_left + plot_right) / 2.0),
        mid_y: px((plot_top + plot_bottom) / 2.0),
        feature_points,
        truth_points,
        x_ticks,
        y_ticks,
    };
    Ok(template.render()?)
}

/// Render and write the chart, logging the destination.
pub fn save_chart(
    path: &Path,
    rows: &[DerivedSample],
    options: &ChartOptions,
) -> Result<(), ReportError> {
    let svg = render_chart(rows, options)?;
    std::fs::write(path, svg)?;
    info!(path = %path.display(), "comparison chart written");
    Ok(())
}

/// Combined finite value range of both series, padded so lines do not touch
/// the plot border. A degenerate (flat) range is widened symmetrically.
fn value_range(rows: &[DerivedSample]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in rows {
        for v in [row.curvature_feature, row.curvature] {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
    }
    if min > max {
        // No finite values at all.
        return (-1.0, 1.0);
    }
    let span = max - min;
    if span < 1e-12 {
        (min - 1.0, max + 1.0)
    } else {
        (min - 0.05 * span, max + 0.05 * span)
    }
}

fn polyline(
    values: impl Iterator<Item = f64>,
    x_of: &impl Fn(usize) -> f64,
    y_of: &impl Fn(f64) -> f64,
) -> String {
    let mut out = String::new();
    for (i, v) in values.enumerate() {
        if !v.is_finite() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!("{},{}", px(x_of(i)), px(y_of(v))));
    }
    out
}

fn px(v: f64) -> String {
    format!("{:.1}", v)
}

/// Tick labels keep enough precision for the plotted range.
fn format_value(v: f64, span: f64) -> String {
    if span >= 10.0 {
        format!("{:.1}", v)
    } else if span >= 0.1 {
        format!("{:.3}", v)
    } else {
        format!("{:.4}", v)
    }
}
