//! Kernel density estimate chart

use std::path::Path;

use plotters::prelude::*;
use statrs::distribution::{Continuous, Normal};
use statrs::statistics::Statistics;

use super::{palette_color, CHART_SIZE, FONT};
use crate::pipeline::{EdaError, Result};

/// Number of evaluation points of each density curve
pub const KDE_GRID_SIZE: usize = 200;

/// Grid extends this many bandwidths beyond the data range
const KDE_CUT: f64 = 3.0;

/// Overlaid density curves of several samples
#[derive(Debug, Clone)]
pub struct DensityChart {
    pub title: String,
    pub x_label: String,
    /// (legend label, raw sample)
    pub series: Vec<(String, Vec<f64>)>,
}

/// Gaussian kernel density estimate with Scott's rule bandwidth.
///
/// Bandwidth is `std * n^(-1/5)` (sample standard deviation). The curve is
/// evaluated on [`KDE_GRID_SIZE`] points spanning three bandwidths past the
/// data range. Samples with fewer than two values or zero spread have no
/// density and yield an empty curve.
pub fn gaussian_kde(values: &[f64]) -> Vec<(f64, f64)> {
    let n = values.len();
    if n < 2 {
        return Vec::new();
    }

    let std = values.iter().std_dev();
    let bandwidth = std * (n as f64).powf(-0.2);
    if !bandwidth.is_finite() || bandwidth <= 0.0 {
        return Vec::new();
    }

    let kernel = match Normal::new(0.0, 1.0) {
        Ok(kernel) => kernel,
        Err(_) => return Vec::new(),
    };

    let min = values.iter().copied().fold(f64::INFINITY, f64::min) - KDE_CUT * bandwidth;
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max) + KDE_CUT * bandwidth;
    let step = (max - min) / (KDE_GRID_SIZE - 1) as f64;
    let norm = n as f64 * bandwidth;

    (0..KDE_GRID_SIZE)
        .map(|i| {
            let x = min + step * i as f64;
            let density = values
                .iter()
                .map(|v| kernel.pdf((x - v) / bandwidth))
                .sum::<f64>()
                / norm;
            (x, density)
        })
        .collect()
}

/// Draw filled density curves for every series with a defined density.
pub fn render_density_chart(chart: &DensityChart, output_path: &Path) -> Result<()> {
    let curves: Vec<(&str, Vec<(f64, f64)>)> = chart
        .series
        .iter()
        .map(|(label, values)| (label.as_str(), gaussian_kde(values)))
        .filter(|(_, curve)| !curve.is_empty())
        .collect();

    if curves.is_empty() {
        return Err(EdaError::chart(&chart.title, "no series has a defined density"));
    }

    let err = |e: &dyn std::fmt::Display| EdaError::chart(&chart.title, e);

    let points = curves.iter().flat_map(|(_, curve)| curve.iter());
    let (x_min, x_max, y_max) = points.fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0f64),
        |(lo, hi, top), (x, y)| (lo.min(*x), hi.max(*x), top.max(*y)),
    );

    let root = BitMapBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, (FONT, 32))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max * 1.1)
        .map_err(|e| err(&e))?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc("Density")
        .y_label_formatter(&|y: &f64| format!("{:.3}", y))
        .label_style((FONT, 18))
        .draw()
        .map_err(|e| err(&e))?;

    for (i, (label, curve)) in curves.iter().enumerate() {
        let color = palette_color(i);
        ctx.draw_series(
            AreaSeries::new(curve.iter().copied(), 0.0, color.mix(0.3)).border_style(color),
        )
        .map_err(|e| err(&e))?
        .label(*label)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
    }

    ctx.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, 18))
        .draw()
        .map_err(|e| err(&e))?;

    root.present().map_err(|e| err(&e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kde_integrates_to_about_one() {
        let values: Vec<f64> = (0..100).map(|i| (i % 17) as f64 * 3.0 + 20.0).collect();
        let curve = gaussian_kde(&values);

        assert_eq!(curve.len(), KDE_GRID_SIZE);
        let step = curve[1].0 - curve[0].0;
        let area: f64 = curve.iter().map(|(_, y)| y * step).sum();
        assert!((area - 1.0).abs() < 0.02, "area was {}", area);
    }

    #[test]
    fn test_kde_grid_extends_past_data() {
        let values = [10.0, 20.0, 30.0, 40.0];
        let curve = gaussian_kde(&values);
        assert!(curve.first().unwrap().0 < 10.0);
        assert!(curve.last().unwrap().0 > 40.0);
    }

    #[test]
    fn test_kde_degenerate_samples_are_empty() {
        assert!(gaussian_kde(&[]).is_empty());
        assert!(gaussian_kde(&[5.0]).is_empty());
        assert!(gaussian_kde(&[5.0, 5.0, 5.0]).is_empty());
    }
}
