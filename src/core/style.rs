//! Per-cell styling of tables

use super::frame::{Cell, DataFrame};

/// Plain RGB color, independent of the UI toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(220, 38, 38);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Relative luminance in 0.0..=1.0
    pub fn luminance(self) -> f32 {
        (0.2126 * self.0 as f32 + 0.7152 * self.1 as f32 + 0.0722 * self.2 as f32) / 255.0
    }

    /// Black or white, whichever reads better on top of `self`
    pub fn contrasting(self) -> Rgb {
        if self.luminance() > 0.5 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

/// Style overrides for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub background: Option<Rgb>,
    pub color: Option<Rgb>,
}

impl CellStyle {
    pub fn background(color: Rgb) -> Self {
        Self {
            background: Some(color),
            color: None,
        }
    }

    /// Text color to use, falling back to contrast with the background
    pub fn text_color(&self) -> Option<Rgb> {
        self.color.or(self.background.map(Rgb::contrasting))
    }
}

/// A table together with a style for every cell
#[derive(Debug, Clone, PartialEq)]
pub struct StyledTable {
    pub frame: DataFrame,
    /// `styles[column][row]`
    pub styles: Vec<Vec<CellStyle>>,
    /// Decimal places for float cells
    pub precision: usize,
}

impl StyledTable {
    /// An unstyled rendering of `frame`
    pub fn plain(frame: DataFrame) -> Self {
        let styles = frame
            .columns()
            .iter()
            .map(|c| vec![CellStyle::default(); c.cells.len()])
            .collect();
        Self {
            frame,
            styles,
            precision: 6,
        }
    }

    /// Style every cell with `f`
    pub fn applymap(frame: DataFrame, f: impl Fn(&Cell) -> CellStyle) -> Self {
        let styles = frame
            .columns()
            .iter()
            .map(|c| c.cells.iter().map(&f).collect())
            .collect();
        Self {
            frame,
            styles,
            precision: 6,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn style(&self, column: usize, row: usize) -> CellStyle {
        self.styles
            .get(column)
            .and_then(|c| c.get(row))
            .copied()
            .unwrap_or_default()
    }

    /// Formatted text of a cell
    pub fn text(&self, column: usize, row: usize) -> String {
        self.frame
            .columns()
            .get(column)
            .and_then(|c| c.cells.get(row))
            .map(|cell| format!("{:.*}", self.precision, cell))
            .unwrap_or_default()
    }
}

/// Negative numbers on red, everything else on black
pub fn color_negative(cell: &Cell) -> CellStyle {
    match cell.as_f64() {
        Some(v) if v < 0.0 => CellStyle::background(Rgb::RED),
        _ => CellStyle::background(Rgb::BLACK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frame::Column;

    #[test]
    fn test_color_negative_marks_only_negative_cells() {
        let frame = DataFrame::new(vec![Column::new(
            "v",
            vec![Cell::Float(-1.5), Cell::Float(0.0), Cell::Float(2.0)],
        )])
        .unwrap();
        let styled = StyledTable::applymap(frame, color_negative);

        assert_eq!(styled.style(0, 0).background, Some(Rgb::RED));
        assert_eq!(styled.style(0, 1).background, Some(Rgb::BLACK));
        assert_eq!(styled.style(0, 2).background, Some(Rgb::BLACK));
    }

    #[test]
    fn test_text_color_contrasts_background() {
        assert_eq!(
            CellStyle::background(Rgb::BLACK).text_color(),
            Some(Rgb::WHITE)
        );
        assert_eq!(
            CellStyle::background(Rgb::WHITE).text_color(),
            Some(Rgb::BLACK)
        );
        assert_eq!(CellStyle::default().text_color(), None);
    }

    #[test]
    fn test_text_uses_precision() {
        let frame =
            DataFrame::new(vec![Column::new("v", vec![Cell::Float(0.123_456_789)])]).unwrap();
        let styled = StyledTable::plain(frame);
        assert_eq!(styled.text(0, 0), "0.123457");
        assert_eq!(styled.clone().with_precision(2).text(0, 0), "0.12");
        assert_eq!(styled.text(3, 0), "");
    }
}
