//! Vertical and horizontal bar charts over labelled values

use std::path::Path;

use plotters::prelude::*;

use super::{palette_color, CHART_SIZE, FONT, PALETTE};
use crate::pipeline::{EdaError, Result};

/// Labelled bars in display order
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
    /// Colour each bar from the palette instead of a single colour
    pub multicolor: bool,
}

impl BarChart {
    fn validate(&self) -> Result<()> {
        if self.bars.is_empty() {
            return Err(EdaError::chart(&self.title, "no bars to draw"));
        }
        if let Some((label, _)) = self.bars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EdaError::chart(
                &self.title,
                format!("bar '{}' has a non-finite value", label),
            ));
        }
        Ok(())
    }

    /// Upper bound of the value axis with 10% headroom
    fn value_max(&self) -> f64 {
        let max = self.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        if max > 0.0 {
            max * 1.1
        } else {
            1.0
        }
    }

    fn color(&self, index: usize) -> RGBColor {
        if self.multicolor {
            palette_color(index)
        } else {
            PALETTE[0]
        }
    }

    fn label_of(&self, value: &SegmentValue<usize>) -> String {
        match value {
            SegmentValue::CenterOf(i) => self
                .bars
                .get(*i)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }
}

/// Draw a vertical bar chart, one bar per entry from left to right.
pub fn render_bar_chart(chart: &BarChart, output_path: &Path) -> Result<()> {
    chart.validate()?;
    let err = |e: &dyn std::fmt::Display| EdaError::chart(&chart.title, e);

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let n = chart.bars.len();
    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, (FONT, 32))
        .margin(20)
        .x_label_area_size(if n > 20 { 80 } else { 60 })
        .y_label_area_size(80)
        .build_cartesian_2d((0..n).into_segmented(), 0.0..chart.value_max())
        .map_err(|e| err(&e))?;

    let formatter = |v: &SegmentValue<usize>| chart.label_of(v);
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&formatter)
        .x_label_style(
            (FONT, if n > 20 { 12 } else { 18 })
                .into_font()
                .transform(if n > 20 {
                    FontTransform::Rotate90
                } else {
                    FontTransform::None
                }),
        )
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()
        .map_err(|e| err(&e))?;

    ctx.draw_series(chart.bars.iter().enumerate().map(|(i, (_, value))| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), *value),
            ],
            chart.color(i).filled(),
        );
        bar.set_margin(0, 0, 4, 4);
        bar
    }))
    .map_err(|e| err(&e))?;

    root.present().map_err(|e| err(&e))?;
    Ok(())
}

/// Draw a horizontal bar chart with the first entry at the top.
pub fn render_horizontal_bar_chart(chart: &BarChart, output_path: &Path) -> Result<()> {
    chart.validate()?;
    let err = |e: &dyn std::fmt::Display| EdaError::chart(&chart.title, e);

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let n = chart.bars.len();
    // Row k from the bottom holds bar n - 1 - k
    let row_of = |i: usize| n - 1 - i;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, (FONT, 32))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(260)
        .build_cartesian_2d(0.0..chart.value_max(), (0..n).into_segmented())
        .map_err(|e| err(&e))?;

    let formatter = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(k) if *k < n => chart.label_of(&SegmentValue::CenterOf(row_of(*k))),
        _ => String::new(),
    };
    ctx.configure_mesh()
        .disable_y_mesh()
        .y_labels(n)
        .y_label_formatter(&formatter)
        .label_style((FONT, 18))
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()
        .map_err(|e| err(&e))?;

    ctx.draw_series(chart.bars.iter().enumerate().map(|(i, (_, value))| {
        let row = row_of(i);
        let mut bar = Rectangle::new(
            [
                (0.0, SegmentValue::Exact(row)),
                (*value, SegmentValue::Exact(row + 1)),
            ],
            chart.color(i).filled(),
        );
        bar.set_margin(4, 4, 0, 0);
        bar
    }))
    .map_err(|e| err(&e))?;

    root.present().map_err(|e| err(&e))?;
    Ok(())
}
