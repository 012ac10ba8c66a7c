//! Chart descriptions, independent of how they are drawn

use super::error::{CookbookError, Result};
use super::frame::{Cell, DataFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Bar,
    Line,
}

/// A value on the horizontal axis
#[derive(Debug, Clone, PartialEq)]
pub enum XValue {
    Category(String),
    Number(f64),
}

impl XValue {
    fn from_cell(cell: &Cell) -> Self {
        match cell.as_f64() {
            Some(v) => Self::Number(v),
            None => Self::Category(cell.to_string()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Category(s) => s.clone(),
            Self::Number(v) => format!("{}", v),
        }
    }
}

/// One trace of data
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub mark: Mark,
    pub points: Vec<(XValue, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>, mark: Mark, points: Vec<(XValue, f64)>) -> Self {
        Self {
            name: name.into(),
            mark,
            points,
        }
    }

    /// Numeric x/y pairs
    pub fn numeric(name: impl Into<String>, mark: Mark, xs: &[f64], ys: &[f64]) -> Self {
        let points = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| (XValue::Number(x), y))
            .collect();
        Self::new(name, mark, points)
    }

    /// Categorical x labels with numeric heights
    pub fn categorical(name: impl Into<String>, mark: Mark, xs: &[&str], ys: &[f64]) -> Self {
        let points = xs
            .iter()
            .zip(ys)
            .map(|(x, &y)| (XValue::Category((*x).to_string()), y))
            .collect();
        Self::new(name, mark, points)
    }
}

/// One set of axes placed within the chart's horizontal extent
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: Option<String>,
    pub x_title: String,
    pub y_title: String,
    /// Horizontal fraction of the chart width, `[start, end]` in 0.0..=1.0
    pub domain: [f32; 2],
    pub series: Vec<Series>,
}

impl Panel {
    pub fn new(domain: [f32; 2]) -> Self {
        Self {
            title: None,
            x_title: String::new(),
            y_title: String::new(),
            domain,
            series: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_title = x.into();
        self.y_title = y.into();
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Vertical extent covering every point; bars always include zero
    pub fn y_range(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for series in &self.series {
            for (_, y) in &series.points {
                lo = lo.min(*y);
                hi = hi.max(*y);
            }
            if series.mark == Mark::Bar {
                lo = lo.min(0.0);
                hi = hi.max(0.0);
            }
        }
        if !lo.is_finite() {
            return (0.0, 1.0);
        }
        if lo == hi {
            return (lo - 1.0, hi + 1.0);
        }
        (lo, hi)
    }

    /// Horizontal extent when every x value is numeric
    pub fn x_numeric_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for (x, _) in self.series.iter().flat_map(|s| &s.points) {
            match x {
                XValue::Number(v) => {
                    lo = lo.min(*v);
                    hi = hi.max(*v);
                }
                XValue::Category(_) => return None,
            }
        }
        if !lo.is_finite() {
            None
        } else if lo == hi {
            Some((lo - 1.0, hi + 1.0))
        } else {
            Some((lo, hi))
        }
    }

    /// Distinct categorical x labels in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for (x, _) in self.series.iter().flat_map(|s| &s.points) {
            let label = x.label();
            if !out.contains(&label) {
                out.push(label);
            }
        }
        out
    }
}

/// A complete chart: one or more panels laid out side by side
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: Option<String>,
    pub width: f32,
    pub height: f32,
    pub panels: Vec<Panel>,
}

impl Chart {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            title: None,
            width,
            height,
            panels: Vec::new(),
        }
    }

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }
}

/// Bar chart of `y` against `x`, split into one panel per distinct `facet` value
pub fn facet_bar(
    frame: &DataFrame,
    x: &str,
    y: &str,
    facet: &str,
    panel_width: f32,
    panel_height: f32,
) -> Result<Chart> {
    let facets = frame.column(facet)?.unique();
    // Touch the other columns up front so a bad name fails before any grouping.
    frame.column(x)?;
    frame.column(y)?;

    let n = facets.len().max(1);
    let mut chart = Chart::new(panel_width * n as f32, panel_height);
    chart.title = Some(facet.to_string());

    for (i, value) in facets.into_iter().enumerate() {
        let group = frame.filter_eq(facet, value)?;
        let xs = &group.column(x)?.cells;
        let ys = &group.column(y)?.cells;

        let points = xs
            .iter()
            .zip(ys)
            .map(|(xc, yc)| {
                yc.as_f64()
                    .map(|v| (XValue::from_cell(xc), v))
                    .ok_or_else(|| {
                        CookbookError::Render(format!("non-numeric value {} in {}", yc, y))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let start = i as f32 / n as f32;
        let end = (i + 1) as f32 / n as f32;
        chart.panels.push(
            Panel::new([start, end])
                .with_title(value.to_string())
                .with_axis_titles(x, y)
                .with_series(Series::new(y, Mark::Bar, points)),
        );
    }

    Ok(chart)
}
