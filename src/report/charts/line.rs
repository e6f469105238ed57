//! Multi-series line chart over years

use std::path::Path;

use plotters::prelude::*;

use super::{palette_color, CHART_SIZE, FONT};
use crate::pipeline::{EdaError, Result};

/// One labelled line, points ordered by year
#[derive(Debug, Clone)]
pub struct LineSeriesData {
    pub label: String,
    pub points: Vec<(i32, f64)>,
}

#[derive(Debug, Clone)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<LineSeriesData>,
}

/// Draw one line per series with a legend on the right.
pub fn render_line_chart(chart: &LineChart, output_path: &Path) -> Result<()> {
    let points = chart.series.iter().flat_map(|s| s.points.iter());
    let Some((x_min, x_max, y_max)) = points.fold(None, |acc: Option<(i32, i32, f64)>, (x, y)| {
        Some(match acc {
            None => (*x, *x, *y),
            Some((lo, hi, top)) => (lo.min(*x), hi.max(*x), top.max(*y)),
        })
    }) else {
        return Err(EdaError::chart(&chart.title, "no points to draw"));
    };

    let err = |e: &dyn std::fmt::Display| EdaError::chart(&chart.title, e);

    // A single year still needs a non-empty axis
    let x_max = if x_max == x_min { x_min + 1 } else { x_max };
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, (FONT, 32))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| err(&e))?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .x_label_formatter(&|year: &i32| year.to_string())
        .label_style((FONT, 18))
        .draw()
        .map_err(|e| err(&e))?;

    for (i, series) in chart.series.iter().enumerate() {
        let color = palette_color(i);
        ctx.draw_series(LineSeries::new(
            series.points.iter().copied(),
            color.stroke_width(2),
        ))
        .map_err(|e| err(&e))?
        .label(series.label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, 14))
        .draw()
        .map_err(|e| err(&e))?;

    root.present().map_err(|e| err(&e))?;
    Ok(())
}
