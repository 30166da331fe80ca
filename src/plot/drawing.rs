//! Figure rendering with plotters.
//!
//! [`draw`] is generic over the drawing backend; [`plot`] and [`plot_with`]
//! pick an SVG or bitmap file backend from the output path.

use std::ops::Range;
use std::path::Path;

use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{DrawResult, PlotConfig};
use crate::tsplib::Point;

/// Renders `solution` and `trajectory` to `path` with the default config.
///
/// The backend follows the file extension: `.svg` writes SVG, anything
/// else a bitmap image.
pub fn plot<P: AsRef<Path>>(
    solution: &[Point],
    trajectory: &[f64],
    title: &str,
    path: P,
) -> DrawResult<()> {
    plot_with(solution, trajectory, title, path, &PlotConfig::default())
}

/// Renders `solution` and `trajectory` to `path`.
pub fn plot_with<P: AsRef<Path>>(
    solution: &[Point],
    trajectory: &[f64],
    title: &str,
    path: P,
    config: &PlotConfig,
) -> DrawResult<()> {
    config.validate()?;

    let path = path.as_ref();
    let size = (config.width, config.height);
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw(&root, solution, trajectory, title, config)?;
        root.present()?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw(&root, solution, trajectory, title, config)?;
        root.present()?;
    }

    debug!(
        "plotted {} points and {} scores to '{}'",
        solution.len(),
        trajectory.len(),
        path.display()
    );

    Ok(())
}

/// Draws the figure on any drawing area.
pub fn draw<DB>(
    root: &DrawingArea<DB, Shift>,
    solution: &[Point],
    trajectory: &[f64],
    title: &str,
    config: &PlotConfig,
) -> DrawResult<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let body = root.titled(title, ("sans-serif", f64::from(config.title_size)))?;

    let (width, _) = body.dim_in_pixel();
    let (left, right) = body.split_horizontally(width / 2);

    draw_solution(&left, solution, config)?;
    draw_trajectory(&right, trajectory)?;

    Ok(())
}

fn draw_solution<DB>(
    area: &DrawingArea<DB, Shift>,
    solution: &[Point],
    config: &PlotConfig,
) -> DrawResult<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let path = closed_path(solution, config.swap_axes);

    let x_range = padded_range(path.iter().map(|&(x, _)| x));
    let y_range = padded_range(path.iter().map(|&(_, y)| y));

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart.configure_mesh().draw()?;

    chart.draw_series(DashedLineSeries::new(
        path.clone(),
        6,
        4,
        BLUE.stroke_width(1),
    ))?;
    chart.draw_series(
        path.iter()
            .map(|&point| Circle::new(point, 3, BLUE.filled())),
    )?;

    Ok(())
}

fn draw_trajectory<DB>(area: &DrawingArea<DB, Shift>, trajectory: &[f64]) -> DrawResult<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let series = trajectory_series(trajectory);

    let x_end = trajectory.len().saturating_sub(1).max(1) as f64;
    let y_range = padded_range(trajectory.iter().copied());

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_end, y_range)?;

    chart.configure_mesh().draw()?;

    chart.draw_series(LineSeries::new(series, &RED))?;

    Ok(())
}

/// Coordinates of `solution` in order, with the first point repeated at
/// the end to close the loop. `swap_axes` yields `(y, x)` pairs.
///
/// # Examples
///
/// ```
/// use u_hillclimb::plot::closed_path;
/// use u_hillclimb::tsplib::Point;
///
/// let tour = [Point::new(1, 0.0, 0.0), Point::new(2, 1.0, 2.0)];
/// assert_eq!(
///     closed_path(&tour, false),
///     vec![(0.0, 0.0), (1.0, 2.0), (0.0, 0.0)]
/// );
/// ```
pub fn closed_path(solution: &[Point], swap_axes: bool) -> Vec<(f64, f64)> {
    let coords = |p: &Point| if swap_axes { (p.y, p.x) } else { (p.x, p.y) };

    solution
        .iter()
        .chain(solution.first())
        .map(coords)
        .collect()
}

/// Trajectory as `(step, score)` pairs.
pub fn trajectory_series(trajectory: &[f64]) -> Vec<(f64, f64)> {
    trajectory
        .iter()
        .enumerate()
        .map(|(step, &score)| (step as f64, score))
        .collect()
}

/// Range covering `values` with a 5% margin; degenerate spans are widened
/// so the chart always has a non-empty extent. Non-finite values are
/// ignored.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return 0.0..1.0;
    }

    let span = max - min;
    let margin = if span > 0.0 {
        span * 0.05
    } else {
        min.abs().max(1.0) * 0.05
    };

    (min - margin)..(max + margin)
}
