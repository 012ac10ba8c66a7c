//! Reference datasets and their memoized loading

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::error::{CookbookError, Result};
use super::frame::DataFrame;
use super::widgets::LabelMap;

/// FAA wildlife strike sample shipped with the binary
pub const BIRDSTRIKES_CSV: &str = include_str!("../../assets/birdstrikes.csv");

/// Display labels for the bird-strike columns
pub fn birdstrike_labels() -> LabelMap {
    LabelMap::new(&[
        ("Airport Name", "Airport Name"),
        ("Aircraft Make Model", "Aircraft Make & Model"),
        ("Effect Amount of damage", "Effect: Amount of Damage"),
        ("Flight Date", "Flight Date"),
        ("Aircraft Airline Operator", "Airline Operator"),
        ("Origin State", "Origin State"),
        ("Phase of flight", "When (Phase of Flight)"),
        ("Wildlife Size", "Wildlife Size"),
        ("Wildlife Species", "Wildlife Species"),
        ("Time of day", "When (Time of Day)"),
        ("Cost Other", "Cost (Other)"),
        ("Cost Repair", "Cost (Repair)"),
        ("Cost Total $", "Cost (Total) ($)"),
        ("Speed IAS in knots", "Speed (in Knots)"),
    ])
}

/// Where a dataset comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DatasetSource {
    #[default]
    Bundled,
    File(PathBuf),
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str("birdstrikes.csv (bundled)"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl DatasetSource {
    /// Read and parse the dataset, bypassing any cache
    pub fn load(&self) -> Result<DataFrame> {
        match self {
            Self::Bundled => DataFrame::read_csv(BIRDSTRIKES_CSV.as_bytes()),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| CookbookError::DatasetIo {
                    path: path.clone(),
                    source,
                })?;
                DataFrame::read_csv(file)
            }
        }
    }
}

/// Outcome of a load, kept so failures are not retried every frame
type Loaded = std::result::Result<Arc<DataFrame>, Arc<CookbookError>>;

/// Memoizes dataset loads per source
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<DatasetSource, Loaded>,
    loads: usize,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached dataset for `source`, loading it on first use
    pub fn get_or_load(&mut self, source: &DatasetSource) -> Loaded {
        if let Some(entry) = self.entries.get(source) {
            return entry.clone();
        }

        self.loads += 1;
        let loaded = match source.load() {
            Ok(frame) => {
                info!(
                    "Loaded dataset {} ({} rows, {} columns)",
                    source,
                    frame.height(),
                    frame.width()
                );
                Ok(Arc::new(frame))
            }
            Err(e) => {
                warn!("Failed to load dataset {}: {}", source, e);
                Err(Arc::new(e))
            }
        };
        self.entries.insert(source.clone(), loaded.clone());
        loaded
    }

    /// Forget a cached entry so the next request reloads it
    pub fn invalidate(&mut self, source: &DatasetSource) {
        if self.entries.remove(source).is_some() {
            debug!("Invalidated cached dataset {}", source);
        }
    }

    /// Drop every entry whose source fails `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&DatasetSource) -> bool) {
        let before = self.entries.len();
        self.entries.retain(|source, _| keep(source));
        let dropped = before - self.entries.len();
        if dropped > 0 {
            debug!("Evicted {} cached dataset(s)", dropped);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, source: &DatasetSource) -> bool {
        self.entries.contains_key(source)
    }

    /// Number of loads actually performed
    pub fn loads(&self) -> usize {
        self.loads
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::core::frame::ColumnKind;

    #[test]
    fn test_bundled_dataset_has_labelled_columns() {
        let frame = DatasetSource::Bundled.load().unwrap();
        let labels = birdstrike_labels();

        assert_eq!(frame.width(), 14);
        assert!(frame.height() > 0);
        for name in frame.column_names() {
            assert!(labels.get(name).is_some(), "no label for {}", name);
        }
        assert_eq!(
            frame.column("Speed IAS in knots").unwrap().kind(),
            ColumnKind::Int
        );
        assert_eq!(
            frame.column("Wildlife Species").unwrap().kind(),
            ColumnKind::Text
        );
    }

    #[test]
    fn test_cache_loads_once_per_source() {
        let mut cache = DatasetCache::new();
        let first = cache.get_or_load(&DatasetSource::Bundled).unwrap();
        let second = cache.get_or_load(&DatasetSource::Bundled).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.loads(), 1);

        cache.invalidate(&DatasetSource::Bundled);
        cache.get_or_load(&DatasetSource::Bundled).unwrap();
        assert_eq!(cache.loads(), 2);
    }

    #[test]
    fn test_cache_reads_files_and_remembers_failures() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "species,count").unwrap();
        writeln!(file, "gull,4").unwrap();
        let source = DatasetSource::File(file.path().to_path_buf());

        let mut cache = DatasetCache::new();
        let frame = cache.get_or_load(&source).unwrap();
        assert_eq!(frame.column_names(), vec!["species", "count"]);

        let missing = DatasetSource::File(PathBuf::from("/nonexistent/strikes.csv"));
        let err = cache.get_or_load(&missing).unwrap_err();
        assert!(matches!(*err, CookbookError::DatasetIo { .. }));
        cache.get_or_load(&missing).unwrap_err();
        assert_eq!(cache.loads(), 2);
    }
}
