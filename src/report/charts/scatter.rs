//! Scatter plots of paired numeric columns

use std::path::Path;

use plotters::prelude::*;

use super::{palette_color, CHART_SIZE, FONT};
use crate::pipeline::{EdaError, Result};

/// One point cloud; unlabelled series get no legend entry
#[derive(Debug, Clone)]
pub struct ScatterSeriesData {
    pub label: Option<String>,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeriesData>,
}

/// Axis bounds padded by 5% of the span, never empty
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (lo - pad, hi + pad)
}

/// Draw every series as semi-transparent dots.
pub fn render_scatter_chart(chart: &ScatterChart, output_path: &Path) -> Result<()> {
    let points = chart.series.iter().flat_map(|s| s.points.iter());
    let Some((x_lo, x_hi, y_lo, y_hi)) = points.fold(None, |acc: Option<(f64, f64, f64, f64)>, (x, y)| {
        Some(match acc {
            None => (*x, *x, *y, *y),
            Some((a, b, c, d)) => (x.min(a), x.max(b), y.min(c), y.max(d)),
        })
    }) else {
        return Err(EdaError::chart(&chart.title, "no points to draw"));
    };

    let err = |e: &dyn std::fmt::Display| EdaError::chart(&chart.title, e);
    let (x_lo, x_hi) = padded(x_lo, x_hi);
    let (y_lo, y_hi) = padded(y_lo, y_hi);

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, (FONT, 32))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(|e| err(&e))?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .label_style((FONT, 18))
        .draw()
        .map_err(|e| err(&e))?;

    let mut has_legend = false;
    for (i, series) in chart.series.iter().enumerate() {
        let color = palette_color(i);
        let anno = ctx
            .draw_series(
                series
                    .points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, color.mix(0.5).filled())),
            )
            .map_err(|e| err(&e))?;

        if let Some(label) = &series.label {
            has_legend = true;
            anno.label(label.as_str())
                .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
        }
    }

    if has_legend {
        ctx.configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((FONT, 18))
            .draw()
            .map_err(|e| err(&e))?;
    }

    root.present().map_err(|e| err(&e))?;
    Ok(())
}
