use std::error::Error;

use plotters::prelude::*;
use quicksort::generator::Distribution;

const CHART_WIDTH: u32 = 960;
const CHART_HEIGHT: u32 = 640;

/// Renders one time-vs-size chart with a series per pivot mode.
/// `det` and `rnd` hold average seconds, one entry per size.
pub fn render_distribution_chart(
    dist: Distribution,
    sizes: &[usize],
    det: &[f64],
    rnd: &[f64],
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = sizes.iter().copied().max().unwrap_or(1) as f64;
    let y_top = det
        .iter()
        .chain(rnd)
        .fold(0.0_f64, |acc, &v| acc.max(v));
    // Keep the axis non-degenerate when every timing rounds to zero.
    let y_max = if y_top > 0.0 { y_top * 1.15 } else { 1e-6 };

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Quicksort running time, {} input", dist.label()),
            ("sans-serif", 28),
        )
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..x_max * 1.05, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("array size")
        .y_desc("time (seconds)")
        .draw()?;

    chart
        .draw_series(
            LineSeries::new(
                sizes.iter().zip(det).map(|(&s, &t)| (s as f64, t)),
                BLUE.stroke_width(2),
            )
            .point_size(4),
        )?
        .label("deterministic (median-of-three)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(
            LineSeries::new(
                sizes.iter().zip(rnd).map(|(&s, &t)| (s as f64, t)),
                RED.stroke_width(2),
            )
            .point_size(4),
        )?
        .label("randomized")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
