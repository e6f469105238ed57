//! Annotated correlation heatmap

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{CHART_SIZE, FONT};
use crate::pipeline::{CorrelationMatrix, EdaError, Result};

const COOL: (f64, f64, f64) = (59.0, 76.0, 192.0);
const NEUTRAL: (f64, f64, f64) = (221.0, 221.0, 221.0);
const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);
const UNDEFINED: RGBColor = RGBColor(245, 245, 245);

/// Diverging blue-grey-red colour for a coefficient in [-1, 1].
///
/// NaN maps to a near-white cell.
pub fn coolwarm(value: f64) -> RGBColor {
    if value.is_nan() {
        return UNDEFINED;
    }
    let v = value.clamp(-1.0, 1.0);
    let (from, to, t) = if v < 0.0 {
        (COOL, NEUTRAL, v + 1.0)
    } else {
        (NEUTRAL, WARM, v)
    };
    let lerp = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

/// Draw the matrix as coloured cells with two-decimal annotations.
///
/// The first column of the matrix is the top row and the leftmost column.
pub fn render_heatmap(title: &str, matrix: &CorrelationMatrix, output_path: &Path) -> Result<()> {
    if matrix.is_empty() {
        return Err(EdaError::chart(title, "correlation matrix is empty"));
    }
    let err = |e: &dyn std::fmt::Display| EdaError::chart(title, e);

    let n = matrix.len();
    // Row k from the bottom holds matrix row n - 1 - k
    let row_of = |i: usize| n - 1 - i;
    let name = |i: usize| matrix.columns.get(i).cloned().unwrap_or_default();

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(title, (FONT, 32))
        .margin(20)
        .x_label_area_size(120)
        .y_label_area_size(160)
        .build_cartesian_2d((0..n).into_segmented(), (0..n).into_segmented())
        .map_err(|e| err(&e))?;

    let x_formatter = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(j) if *j < n => name(*j),
        _ => String::new(),
    };
    let y_formatter = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(k) if *k < n => name(row_of(*k)),
        _ => String::new(),
    };
    ctx.configure_mesh()
        .disable_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .x_label_style((FONT, 14).into_font().transform(FontTransform::Rotate90))
        .y_label_style((FONT, 14))
        .draw()
        .map_err(|e| err(&e))?;

    let cells: Vec<(usize, usize, f64)> = (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .map(|(i, j)| (i, j, matrix.values[i][j]))
        .collect();

    ctx.draw_series(cells.iter().map(|&(i, j, value)| {
        let row = row_of(i);
        Rectangle::new(
            [
                (SegmentValue::Exact(j), SegmentValue::Exact(row)),
                (SegmentValue::Exact(j + 1), SegmentValue::Exact(row + 1)),
            ],
            coolwarm(value).filled(),
        )
    }))
    .map_err(|e| err(&e))?;

    let annotation = (FONT, 16)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    ctx.draw_series(cells.iter().map(|&(i, j, value)| {
        let text = if value.is_nan() {
            "nan".to_string()
        } else {
            format!("{:.2}", value)
        };
        Text::new(
            text,
            (SegmentValue::CenterOf(j), SegmentValue::CenterOf(row_of(i))),
            annotation.clone(),
        )
    }))
    .map_err(|e| err(&e))?;

    root.present().map_err(|e| err(&e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coolwarm_endpoints() {
        assert_eq!(coolwarm(-1.0).rgb(), (59, 76, 192));
        assert_eq!(coolwarm(0.0).rgb(), (221, 221, 221));
        assert_eq!(coolwarm(1.0).rgb(), (180, 4, 38));
    }

    #[test]
    fn test_coolwarm_clamps_and_handles_nan() {
        assert_eq!(coolwarm(3.0).rgb(), coolwarm(1.0).rgb());
        assert_eq!(coolwarm(f64::NAN).rgb(), UNDEFINED.rgb());
    }

    #[test]
    fn test_empty_matrix_is_rejected() {
        let matrix = CorrelationMatrix {
            columns: Vec::new(),
            values: Vec::new(),
        };
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("vgeda_empty_heatmap.png");
        let result = render_heatmap("Empty", &matrix, &path);
        assert!(matches!(result, Err(EdaError::Chart { .. })));
        assert!(!path.exists());
    }
}
