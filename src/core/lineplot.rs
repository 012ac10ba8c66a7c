//! Line plots rasterized into static images

use std::fmt;
use std::sync::OnceLock;

use image::{Rgba, RgbaImage};
use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::drawing::IntoDrawingArea;
use plotters::element::Circle;
use plotters::series::LineSeries;
use plotters::style::{register_font, Color, FontStyle, RGBColor, WHITE};

use super::chart::{Mark, Panel, Series, XValue};
use super::error::{CookbookError, Result};
use super::frame::DataFrame;

const LINE: RGBColor = RGBColor(31, 119, 180);
const GRID: RGBColor = RGBColor(234, 234, 242);

const MIN_SIDE: u32 = 80;
const MARGIN: u32 = 12;
const X_LABEL_AREA: u32 = 40;
const Y_LABEL_AREA: u32 = 52;
const MARKER_RADIUS: i32 = 3;

static PLOT_FONT: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Line of mean `y` per distinct `x`, sorted by `x`
pub fn lineplot(frame: &DataFrame, x: &str, y: &str) -> Result<Panel> {
    let xs = &frame.column(x)?.cells;
    let ys = &frame.column(y)?.cells;

    let mut groups: Vec<(f64, f64, usize)> = Vec::new();
    for (xc, yc) in xs.iter().zip(ys) {
        let (Some(xv), Some(yv)) = (xc.as_f64(), yc.as_f64()) else {
            if xc.is_missing() || yc.is_missing() {
                continue;
            }
            return Err(CookbookError::Render(format!(
                "line plot needs numeric {} and {}",
                x, y
            )));
        };
        match groups.iter_mut().find(|(gx, _, _)| *gx == xv) {
            Some((_, sum, n)) => {
                *sum += yv;
                *n += 1;
            }
            None => groups.push((xv, yv, 1)),
        }
    }
    groups.sort_by(|a, b| a.0.total_cmp(&b.0));

    let points = groups
        .into_iter()
        .map(|(gx, sum, n)| (XValue::Number(gx), sum / n as f64))
        .collect();

    Ok(Panel::new([0.0, 1.0])
        .with_axis_titles(x, y)
        .with_series(Series::new(y, Mark::Line, points)))
}

/// Register the embedded UI font under the family plotters asks for
fn register_plot_font() -> Result<()> {
    PLOT_FONT
        .get_or_init(|| {
            register_font(
                "sans-serif",
                FontStyle::Normal,
                epaint_default_fonts::UBUNTU_LIGHT,
            )
            .map_err(|_| "plot font: invalid font data".to_string())
        })
        .clone()
        .map_err(CookbookError::Render)
}

fn render_error(e: impl fmt::Display) -> CookbookError {
    CookbookError::Render(e.to_string())
}

/// Draw the line series of `panel` onto a `width` x `height` image,
/// with tick labels and axis titles
pub fn rasterize(panel: &Panel, width: u32, height: u32) -> Result<RgbaImage> {
    if width < MIN_SIDE || height < MIN_SIDE {
        return Err(CookbookError::Render(format!(
            "canvas {}x{} is too small",
            width, height
        )));
    }
    let (x_lo, x_hi) = padded(panel.x_numeric_range().ok_or_else(|| {
        CookbookError::Render("line plot needs a numeric x axis".to_string())
    })?);
    let (y_lo, y_hi) = padded(panel.y_range());
    register_plot_font()?;

    let mut rgb = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(rgb.as_mut_slice(), (width, height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .light_line_style(GRID.stroke_width(1))
            .x_desc(panel.x_title.as_str())
            .y_desc(panel.y_title.as_str())
            .draw()
            .map_err(render_error)?;

        for series in panel.series.iter().filter(|s| s.mark == Mark::Line) {
            let points = numeric_points(series);
            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    LINE.stroke_width(2),
                ))
                .map_err(render_error)?;
            chart
                .draw_series(
                    points
                        .iter()
                        .map(|&p| Circle::new(p, MARKER_RADIUS, LINE.filled())),
                )
                .map_err(render_error)?;
        }

        root.present().map_err(render_error)?;
    }

    Ok(RgbaImage::from_fn(width, height, |x, y| {
        let i = (y as usize * width as usize + x as usize) * 3;
        Rgba([rgb[i], rgb[i + 1], rgb[i + 2], 255])
    }))
}

fn numeric_points(series: &Series) -> Vec<(f64, f64)> {
    series
        .points
        .iter()
        .filter_map(|(x, y)| match x {
            XValue::Number(v) => Some((*v, *y)),
            XValue::Category(_) => None,
        })
        .collect()
}

/// Widen a range by 5% on each side, or by 1 when it is a single value
fn padded((lo, hi): (f64, f64)) -> (f64, f64) {
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frame::Column;

    fn sample() -> DataFrame {
        DataFrame::new(vec![
            Column::ints("x", &[1, 2, 3]),
            Column::ints("y", &[10, 30, 70]),
        ])
        .unwrap()
    }

    #[test]
    fn test_lineplot_sorts_and_averages() {
        let frame = DataFrame::new(vec![
            Column::ints("x", &[2, 1, 2]),
            Column::ints("y", &[10, 5, 30]),
        ])
        .unwrap();
        let panel = lineplot(&frame, "x", "y").unwrap();
        assert_eq!(
            panel.series[0].points,
            vec![(XValue::Number(1.0), 5.0), (XValue::Number(2.0), 20.0)]
        );
        assert_eq!(panel.x_title, "x");
        assert_eq!(panel.y_title, "y");
    }

    #[test]
    fn test_lineplot_rejects_text() {
        let frame = DataFrame::new(vec![
            Column::texts("x", &["a"]),
            Column::ints("y", &[1]),
        ])
        .unwrap();
        assert!(matches!(
            lineplot(&frame, "x", "y"),
            Err(CookbookError::Render(_))
        ));
    }

    const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const MARKER: Rgba<u8> = Rgba([31, 119, 180, 255]);

    #[test]
    fn test_rasterize_draws_markers_on_background() {
        let panel = lineplot(&sample(), "x", "y").unwrap();
        let img = rasterize(&panel, 320, 240).unwrap();

        assert_eq!(img.dimensions(), (320, 240));
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        assert!(img.pixels().filter(|p| **p == MARKER).count() > 20);
    }

    #[test]
    fn test_rasterize_labels_axes() {
        let panel = lineplot(&sample(), "x", "y").unwrap();
        let img = rasterize(&panel, 320, 240).unwrap();

        // Tick labels and the y title sit left of the plot area
        let y_area_inked = (MARGIN..MARGIN + Y_LABEL_AREA - 4)
            .flat_map(|x| (MARGIN..240 - MARGIN - X_LABEL_AREA).map(move |y| (x, y)))
            .filter(|&(x, y)| *img.get_pixel(x, y) != BACKGROUND)
            .count();
        assert!(y_area_inked > 20);

        // Same below it for the x axis
        let x_band = 240 - MARGIN - X_LABEL_AREA + 4..240 - MARGIN;
        let x_area_inked = (MARGIN + Y_LABEL_AREA + 4..320 - MARGIN)
            .flat_map(|x| x_band.clone().map(move |y| (x, y)))
            .filter(|&(x, y)| *img.get_pixel(x, y) != BACKGROUND)
            .count();
        assert!(x_area_inked > 20);
    }

    #[test]
    fn test_rasterize_single_point() {
        let frame =
            DataFrame::new(vec![Column::ints("x", &[4]), Column::ints("y", &[9])]).unwrap();
        let panel = lineplot(&frame, "x", "y").unwrap();
        assert!(rasterize(&panel, 200, 150).is_ok());
    }

    #[test]
    fn test_rasterize_is_deterministic() {
        let panel = lineplot(&sample(), "x", "y").unwrap();
        assert_eq!(
            rasterize(&panel, 200, 150).unwrap(),
            rasterize(&panel, 200, 150).unwrap()
        );
    }

    #[test]
    fn test_rasterize_rejects_tiny_canvas() {
        let panel = lineplot(&sample(), "x", "y").unwrap();
        assert!(rasterize(&panel, 40, 40).is_err());
    }
}
