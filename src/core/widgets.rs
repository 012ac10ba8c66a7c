//! Toolkit-independent widget values

use std::borrow::Cow;

/// Shown for selectbox keys that have no entry in the label map
pub const NO_LABEL: &str = "(no label)";

/// A two-ended numeric range inside fixed bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSelection {
    min: f64,
    max: f64,
    lo: f64,
    hi: f64,
}

impl RangeSelection {
    /// Bounds are reordered if given backwards; the initial value is clamped
    pub fn new(min: f64, max: f64, value: (f64, f64)) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let mut range = Self {
            min,
            max,
            lo: min,
            hi: max,
        };
        let (a, b) = if value.0 <= value.1 {
            value
        } else {
            (value.1, value.0)
        };
        range.set_hi(b);
        range.set_lo(a);
        range
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn value(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    /// Move the lower handle; it never passes the upper one
    pub fn set_lo(&mut self, lo: f64) {
        if lo.is_nan() {
            return;
        }
        self.lo = lo.clamp(self.min, self.hi);
    }

    /// Move the upper handle; it never passes the lower one
    pub fn set_hi(&mut self, hi: f64) {
        if hi.is_nan() {
            return;
        }
        self.hi = hi.clamp(self.lo, self.max);
    }

    /// Fraction of the bounds at which `v` sits
    pub fn fraction(&self, v: f64) -> f64 {
        if self.max == self.min {
            0.0
        } else {
            (v - self.min) / (self.max - self.min)
        }
    }

    /// Inverse of [`fraction`](Self::fraction)
    pub fn at_fraction(&self, t: f64) -> f64 {
        self.min + t.clamp(0.0, 1.0) * (self.max - self.min)
    }
}

/// Multiple choice over a fixed domain, remembering pick order
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelect<T> {
    options: Vec<T>,
    selected: Vec<T>,
}

impl<T: Clone + PartialEq> MultiSelect<T> {
    pub fn new(options: Vec<T>) -> Self {
        Self {
            options,
            selected: Vec::new(),
        }
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn selected(&self) -> &[T] {
        &self.selected
    }

    /// Add `option` to the end of the selection or remove it.
    /// Values outside the domain are ignored.
    pub fn toggle(&mut self, option: &T) {
        if !self.options.contains(option) {
            return;
        }
        match self.selected.iter().position(|s| s == option) {
            Some(i) => {
                self.selected.remove(i);
            }
            None => self.selected.push(option.clone()),
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Replace the domain, dropping selections no longer offered
    pub fn set_options(&mut self, options: Vec<T>) {
        self.selected.retain(|s| options.contains(s));
        self.options = options;
    }
}

/// Single choice with a caller-supplied display label per option
#[derive(Debug, Clone, PartialEq)]
pub struct SelectBox<T> {
    options: Vec<T>,
    index: usize,
}

impl<T> SelectBox<T> {
    pub fn new(options: Vec<T>) -> Self {
        Self { options, index: 0 }
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Currently chosen option; `None` only when there are no options
    pub fn value(&self) -> Option<&T> {
        self.options.get(self.index)
    }

    /// Select by position; out-of-range positions are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.index = index;
        }
    }

    /// Display labels for every option
    pub fn labels<'a, F>(&'a self, format: F) -> Vec<Cow<'a, str>>
    where
        F: Fn(&'a T) -> Cow<'a, str>,
    {
        self.options.iter().map(format).collect()
    }
}

impl<T: PartialEq> SelectBox<T> {
    /// Replace the options, keeping the current value when it is still offered
    pub fn set_options(&mut self, options: Vec<T>) {
        let index = self
            .value()
            .and_then(|current| options.iter().position(|o| o == current))
            .unwrap_or(0);
        self.options = options;
        self.index = index;
    }
}

/// Key to display-label dictionary
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelMap {
    entries: Vec<(String, String)>,
}

impl LabelMap {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Mapped label, or [`NO_LABEL`] for unknown keys
    pub fn label(&self, key: &str) -> Cow<'_, str> {
        match self.get(key) {
            Some(v) => Cow::Borrowed(v),
            None => Cow::Borrowed(NO_LABEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_defaults() {
        let range = RangeSelection::new(0.0, 100.0, (25.0, 75.0));
        assert_eq!(range.bounds(), (0.0, 100.0));
        assert_eq!(range.value(), (25.0, 75.0));
    }

    #[test]
    fn test_range_handles_stay_ordered_and_bounded() {
        let mut range = RangeSelection::new(0.0, 100.0, (25.0, 75.0));
        let moves = [
            (true, -10.0),
            (false, 150.0),
            (true, 90.0),
            (false, 5.0),
            (true, f64::NAN),
            (false, 60.0),
            (true, 60.0),
            (false, -1.0),
        ];
        for (lower, v) in moves {
            if lower {
                range.set_lo(v);
            } else {
                range.set_hi(v);
            }
            let (lo, hi) = range.value();
            assert!(0.0 <= lo && lo <= hi && hi <= 100.0, "{:?}", range);
        }
    }

    #[test]
    fn test_range_clamps_initial_value() {
        let range = RangeSelection::new(100.0, 0.0, (120.0, -5.0));
        assert_eq!(range.bounds(), (0.0, 100.0));
        assert_eq!(range.value(), (0.0, 100.0));
    }

    #[test]
    fn test_range_fraction_round_trips() {
        let range = RangeSelection::new(0.0, 100.0, (25.0, 75.0));
        assert_eq!(range.fraction(25.0), 0.25);
        assert_eq!(range.at_fraction(0.75), 75.0);
        assert_eq!(range.at_fraction(2.0), 100.0);
    }

    #[test]
    fn test_multiselect_keeps_pick_order() {
        let mut rows = MultiSelect::new(vec![0usize, 1, 2, 3]);
        rows.toggle(&2);
        rows.toggle(&0);
        rows.toggle(&9);
        assert_eq!(rows.selected(), &[2, 0]);

        rows.toggle(&2);
        assert_eq!(rows.selected(), &[0]);
    }

    #[test]
    fn test_multiselect_set_options_drops_stale() {
        let mut rows = MultiSelect::new(vec![0usize, 1, 2, 3]);
        rows.toggle(&3);
        rows.toggle(&1);
        rows.set_options(vec![0, 1]);
        assert_eq!(rows.selected(), &[1]);
    }

    #[test]
    fn test_selectbox_labels_through_map() {
        let display = ["male", "female"];
        let mut gender = SelectBox::new(vec![0usize, 1]);
        assert_eq!(
            gender.labels(|i| Cow::Borrowed(display[*i])),
            vec!["male", "female"]
        );

        gender.select(1);
        assert_eq!(gender.value(), Some(&1));
        gender.select(5);
        assert_eq!(gender.value(), Some(&1));
    }

    #[test]
    fn test_label_map_placeholder_for_unknown_key() {
        let map = LabelMap::new(&[("Cost Total $", "Cost (Total) ($)")]);
        assert_eq!(map.label("Cost Total $"), "Cost (Total) ($)");
        assert_eq!(map.label("Remarks"), NO_LABEL);
        assert_eq!(map.get("Remarks"), None);
    }

    #[test]
    fn test_selectbox_set_options_keeps_value() {
        let mut columns = SelectBox::new(vec!["a".to_string(), "b".to_string()]);
        columns.select(1);
        columns.set_options(vec!["c".to_string(), "b".to_string()]);
        assert_eq!(columns.value().map(String::as_str), Some("b"));

        columns.set_options(vec!["x".to_string()]);
        assert_eq!(columns.index(), 0);
    }
}
