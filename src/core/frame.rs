//! Small column-oriented tables used as sample data by the recipes

use std::fmt;
use std::io::Read;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

use super::error::{CookbookError, Result};

/// Fields read as missing values
const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_na(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || NA_TOKENS.contains(&trimmed)
}

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Numeric view of the cell, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) | Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Infer a cell from a raw CSV field
    fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if is_na(trimmed) {
            Self::Missing
        } else if let Ok(v) = trimmed.parse::<i64>() {
            Self::Int(v)
        } else if let Ok(v) = trimmed.parse::<f64>() {
            // inf reads as missing too
            if v.is_finite() {
                Self::Float(v)
            } else {
                Self::Missing
            }
        } else {
            Self::Text(raw.to_string())
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{:.6}", v),
            },
            Self::Text(s) => f.write_str(s),
            Self::Missing => f.write_str("NaN"),
        }
    }
}

/// Element type of a column after inference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Int,
    Float,
    Text,
}

/// A named column of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn ints(name: impl Into<String>, values: &[i64]) -> Self {
        Self::new(name, values.iter().copied().map(Cell::Int).collect())
    }

    pub fn texts(name: impl Into<String>, values: &[&str]) -> Self {
        Self::new(name, values.iter().map(|v| Cell::text(*v)).collect())
    }

    /// Narrowest kind that holds every non-missing cell
    pub fn kind(&self) -> ColumnKind {
        let mut kind = ColumnKind::Int;
        for cell in &self.cells {
            match cell {
                Cell::Int(_) | Cell::Missing => {}
                Cell::Float(_) => kind = ColumnKind::Float,
                Cell::Text(_) => return ColumnKind::Text,
            }
        }
        kind
    }

    /// Distinct values in first-seen order
    pub fn unique(&self) -> Vec<&Cell> {
        let mut seen: Vec<&Cell> = Vec::new();
        for cell in &self.cells {
            if !seen.contains(&cell) {
                seen.push(cell);
            }
        }
        seen
    }
}

/// An in-memory table with positional row labels
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataFrame {
    columns: Vec<Column>,
    index: Vec<usize>,
}

impl DataFrame {
    /// Build a table from equally sized columns
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let rows = columns.first().map_or(0, |c| c.cells.len());
        if let Some(bad) = columns.iter().find(|c| c.cells.len() != rows) {
            return Err(CookbookError::ShapeMismatch {
                column: bad.name.clone(),
                expected: rows,
                found: bad.cells.len(),
            });
        }
        Ok(Self {
            columns,
            index: (0..rows).collect(),
        })
    }

    /// A `rows` x `cols` table of standard-normal samples named `col 0`, `col 1`, ...
    pub fn random_normal(rows: usize, cols: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = vec![Vec::with_capacity(rows); cols];
        // Row-major draw order so a given seed fills the table left to right.
        for _ in 0..rows {
            for column in data.iter_mut() {
                let v: f64 = StandardNormal.sample(&mut rng);
                column.push(Cell::Float(v));
            }
        }

        Self {
            columns: data
                .into_iter()
                .enumerate()
                .map(|(i, cells)| Column::new(format!("col {}", i), cells))
                .collect(),
            index: (0..rows).collect(),
        }
    }

    /// Read a CSV document with a header row, inferring column kinds
    pub fn read_csv<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in reader.records() {
            let record = record?;
            for (column, field) in raw.iter_mut().zip(record.iter()) {
                column.push(field.to_string());
            }
        }

        let columns = headers
            .into_iter()
            .zip(raw)
            .map(|(name, fields)| Column::new(name, infer_cells(&fields)))
            .collect();
        Self::new(columns)
    }

    pub fn height(&self) -> usize {
        self.index.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Row labels
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CookbookError::UnknownColumn(name.to_string()))
    }

    /// Select rows by label, in the order given
    pub fn loc(&self, labels: &[usize]) -> Result<Self> {
        let positions = labels
            .iter()
            .map(|label| {
                self.index
                    .iter()
                    .position(|l| l == label)
                    .ok_or(CookbookError::RowOutOfRange {
                        index: *label,
                        rows: self.height(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let columns = self
            .columns
            .iter()
            .map(|c| {
                Column::new(
                    c.name.clone(),
                    positions.iter().map(|&p| c.cells[p].clone()).collect(),
                )
            })
            .collect();

        Ok(Self {
            columns,
            index: labels.to_vec(),
        })
    }

    /// Rows whose `column` cell equals `value`
    pub fn filter_eq(&self, column: &str, value: &Cell) -> Result<Self> {
        let col = self.column(column)?;
        let labels: Vec<usize> = col
            .cells
            .iter()
            .zip(&self.index)
            .filter(|(cell, _)| *cell == value)
            .map(|(_, label)| *label)
            .collect();
        self.loc(&labels)
    }
}

/// Turn raw fields into cells sharing one inferred kind
fn infer_cells(fields: &[String]) -> Vec<Cell> {
    let parsed: Vec<Cell> = fields.iter().map(|f| Cell::parse(f)).collect();
    let probe = Column::new("", parsed);
    match probe.kind() {
        ColumnKind::Int => probe.cells,
        ColumnKind::Float => probe
            .cells
            .into_iter()
            .map(|c| match c {
                Cell::Int(v) => Cell::Float(v as f64),
                other => other,
            })
            .collect(),
        ColumnKind::Text => fields
            .iter()
            .map(|f| {
                if is_na(f) {
                    Cell::Missing
                } else {
                    Cell::Text(f.clone())
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events() -> DataFrame {
        DataFrame::new(vec![
            Column::texts(
                "date",
                &["2019-08-01", "2019-08-01", "2019-08-02", "2019-08-02"],
            ),
            Column::texts("users", &["Sara", "James", "Sara", "James"]),
            Column::texts("events", &["3", "2", "5", "1"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_loc_keeps_requested_rows_and_column_order() {
        let df = events();
        let picked = df.loc(&[0, 2]).unwrap();

        assert_eq!(picked.height(), 2);
        assert_eq!(picked.index(), &[0, 2]);
        assert_eq!(picked.column_names(), vec!["date", "users", "events"]);
        for (picked_col, col) in picked.columns().iter().zip(df.columns()) {
            assert_eq!(picked_col.cells, vec![col.cells[0].clone(), col.cells[2].clone()]);
        }
    }

    #[test]
    fn test_loc_follows_selection_order() {
        let picked = events().loc(&[3, 1]).unwrap();
        assert_eq!(picked.index(), &[3, 1]);
        assert_eq!(picked.column("events").unwrap().cells[0], Cell::text("1"));
    }

    #[test]
    fn test_loc_rejects_unknown_label() {
        let err = events().loc(&[7]).unwrap_err();
        assert!(matches!(
            err,
            CookbookError::RowOutOfRange { index: 7, rows: 4 }
        ));
    }

    #[test]
    fn test_new_rejects_ragged_columns() {
        let err = DataFrame::new(vec![
            Column::ints("a", &[1, 2]),
            Column::ints("b", &[1]),
        ])
        .unwrap_err();
        assert!(matches!(err, CookbookError::ShapeMismatch { found: 1, .. }));
    }

    #[test]
    fn test_random_normal_is_seeded() {
        let a = DataFrame::random_normal(3, 5, 42);
        let b = DataFrame::random_normal(3, 5, 42);
        let c = DataFrame::random_normal(3, 5, 43);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.height(), 3);
        assert_eq!(
            a.column_names(),
            vec!["col 0", "col 1", "col 2", "col 3", "col 4"]
        );
    }

    #[test]
    fn test_read_csv_infers_kinds() {
        let csv = "name,count,cost\nowl,3,1.5\nhawk,,2\ngull,7,\n";
        let df = DataFrame::read_csv(csv.as_bytes()).unwrap();

        assert_eq!(df.height(), 3);
        assert_eq!(df.column("name").unwrap().kind(), ColumnKind::Text);
        assert_eq!(df.column("count").unwrap().kind(), ColumnKind::Int);
        assert_eq!(df.column("cost").unwrap().kind(), ColumnKind::Float);
        assert_eq!(df.column("count").unwrap().cells[1], Cell::Missing);
        assert_eq!(df.column("cost").unwrap().cells[1], Cell::Float(2.0));
    }

    #[test]
    fn test_read_csv_treats_na_tokens_as_missing() {
        let csv = "v,w\n1,gull\nNaN,NA\n3,owl\ninf,null\n";
        let df = DataFrame::read_csv(csv.as_bytes()).unwrap();

        let v = df.column("v").unwrap();
        assert_eq!(v.kind(), ColumnKind::Int);
        assert_eq!(
            v.cells,
            vec![Cell::Int(1), Cell::Missing, Cell::Int(3), Cell::Missing]
        );
        let w = df.column("w").unwrap();
        assert_eq!(w.cells[1], Cell::Missing);
        assert_eq!(w.cells[3], Cell::Missing);
    }

    #[test]
    fn test_text_column_keeps_numeric_looking_fields_as_text() {
        let csv = "code\nA1\n42\n";
        let df = DataFrame::read_csv(csv.as_bytes()).unwrap();
        assert_eq!(df.column("code").unwrap().cells[1], Cell::text("42"));
    }

    #[test]
    fn test_filter_eq_and_unique() {
        let df = events();
        let sara = df.filter_eq("users", &Cell::text("Sara")).unwrap();
        assert_eq!(sara.index(), &[0, 2]);

        let dates = df.column("date").unwrap().unique();
        assert_eq!(dates.len(), 2);
        assert_eq!(*dates[0], Cell::text("2019-08-01"));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Float(-0.5).to_string(), "-0.500000");
        assert_eq!(format!("{:.2}", Cell::Float(1.0)), "1.00");
        assert_eq!(Cell::Int(4).to_string(), "4");
        assert_eq!(Cell::Missing.to_string(), "NaN");
    }
}
