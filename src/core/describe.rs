//! Summary statistics for a single column

use super::frame::{Cell, Column, ColumnKind};

/// Labelled summary of one column, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub column: String,
    pub entries: Vec<(&'static str, Cell)>,
}

impl Summary {
    pub fn get(&self, label: &str) -> Option<&Cell> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, cell)| cell)
    }
}

/// Summarize a column: count/mean/std/quartiles for numbers,
/// count/unique/top/freq for text. Missing cells are skipped.
pub fn describe(column: &Column) -> Summary {
    let entries = match column.kind() {
        ColumnKind::Int | ColumnKind::Float => describe_numeric(column),
        ColumnKind::Text => describe_text(column),
    };
    Summary {
        column: column.name.clone(),
        entries,
    }
}

fn describe_numeric(column: &Column) -> Vec<(&'static str, Cell)> {
    let mut values: Vec<f64> = column
        .cells
        .iter()
        .filter_map(Cell::as_f64)
        .filter(|v| v.is_finite())
        .collect();
    values.sort_by(|a, b| a.total_cmp(b));

    let n = values.len();
    let stat = |v: Option<f64>| v.map_or(Cell::Missing, Cell::Float);

    let mean = (n > 0).then(|| values.iter().sum::<f64>() / n as f64);
    let std = mean.filter(|_| n > 1).map(|m| {
        let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    });

    vec![
        ("count", Cell::Float(n as f64)),
        ("mean", stat(mean)),
        ("std", stat(std)),
        ("min", stat(values.first().copied())),
        ("25%", stat(quantile(&values, 0.25))),
        ("50%", stat(quantile(&values, 0.5))),
        ("75%", stat(quantile(&values, 0.75))),
        ("max", stat(values.last().copied())),
    ]
}

fn describe_text(column: &Column) -> Vec<(&'static str, Cell)> {
    // (value, count) in first-seen order so ties resolve to the earliest value
    let mut counts: Vec<(&str, i64)> = Vec::new();
    let mut total = 0i64;
    for cell in &column.cells {
        if let Cell::Text(s) = cell {
            total += 1;
            match counts.iter_mut().find(|(v, _)| *v == s.as_str()) {
                Some((_, c)) => *c += 1,
                None => counts.push((s.as_str(), 1)),
            }
        }
    }

    let mut top: Option<(&str, i64)> = None;
    for &(value, count) in &counts {
        if top.map_or(true, |(_, best)| count > best) {
            top = Some((value, count));
        }
    }

    vec![
        ("count", Cell::Int(total)),
        ("unique", Cell::Int(counts.len() as i64)),
        ("top", top.map_or(Cell::Missing, |(v, _)| Cell::text(v))),
        ("freq", top.map_or(Cell::Missing, |(_, c)| Cell::Int(c))),
    ]
}

/// Linear-interpolated quantile of sorted values
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frame::DataFrame;

    fn float(summary: &Summary, label: &str) -> f64 {
        summary.get(label).and_then(Cell::as_f64).unwrap()
    }

    #[test]
    fn test_numeric_summary() {
        let column = Column::ints("speed", &[1, 2, 3, 4]);
        let summary = describe(&column);

        assert_eq!(summary.column, "speed");
        assert_eq!(float(&summary, "count"), 4.0);
        assert_eq!(float(&summary, "mean"), 2.5);
        assert!((float(&summary, "std") - 1.290_994).abs() < 1e-6);
        assert_eq!(float(&summary, "min"), 1.0);
        assert_eq!(float(&summary, "25%"), 1.75);
        assert_eq!(float(&summary, "50%"), 2.5);
        assert_eq!(float(&summary, "75%"), 3.25);
        assert_eq!(float(&summary, "max"), 4.0);
    }

    #[test]
    fn test_numeric_summary_skips_missing() {
        let column = Column::new(
            "cost",
            vec![Cell::Float(10.0), Cell::Missing, Cell::Float(30.0)],
        );
        let summary = describe(&column);
        assert_eq!(float(&summary, "count"), 2.0);
        assert_eq!(float(&summary, "mean"), 20.0);
    }

    #[test]
    fn test_nan_fields_are_not_counted() {
        let frame = DataFrame::read_csv("v\n1\nNaN\n3\n".as_bytes()).unwrap();
        let summary = describe(frame.column("v").unwrap());
        assert_eq!(float(&summary, "count"), 2.0);
        assert_eq!(float(&summary, "mean"), 2.0);
        assert_eq!(float(&summary, "max"), 3.0);

        let built = Column::new("w", vec![Cell::Float(f64::NAN), Cell::Float(4.0)]);
        let summary = describe(&built);
        assert_eq!(float(&summary, "count"), 1.0);
        assert_eq!(float(&summary, "min"), 4.0);
    }

    #[test]
    fn test_single_value_has_no_std() {
        let summary = describe(&Column::new("x", vec![Cell::Float(5.0)]));
        assert_eq!(summary.get("std"), Some(&Cell::Missing));
        assert_eq!(float(&summary, "50%"), 5.0);
    }

    #[test]
    fn test_text_summary() {
        let column = Column::new(
            "size",
            vec![
                Cell::text("Small"),
                Cell::text("Medium"),
                Cell::Missing,
                Cell::text("Small"),
            ],
        );
        let summary = describe(&column);

        assert_eq!(summary.get("count"), Some(&Cell::Int(3)));
        assert_eq!(summary.get("unique"), Some(&Cell::Int(2)));
        assert_eq!(summary.get("top"), Some(&Cell::text("Small")));
        assert_eq!(summary.get("freq"), Some(&Cell::Int(2)));
    }

    #[test]
    fn test_text_tie_prefers_first_seen() {
        let summary = describe(&Column::texts("s", &["b", "a", "a", "b"]));
        assert_eq!(summary.get("top"), Some(&Cell::text("b")));
    }
}
