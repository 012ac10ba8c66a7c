//! Widget values and cached data that survive between render passes

use std::path::PathBuf;

use tracing::debug;

use super::dataset::{DatasetCache, DatasetSource};
use super::page::{WidgetEvent, WidgetId};
use super::settings::Settings;
use super::widgets::{MultiSelect, RangeSelection, SelectBox};
use super::wordcloud::WordCloudOptions;

const MAX_RECENT_DATASETS: usize = 10;

pub struct Session {
    pub seed: u64,
    pub wordcloud: WordCloudOptions,
    pub plot_size: (u32, u32),
    pub range: RangeSelection,
    pub rows: MultiSelect<usize>,
    pub gender: SelectBox<usize>,
    pub column: SelectBox<String>,
    pub dataset: DatasetSource,
    pub recent_datasets: Vec<PathBuf>,
    pub datasets: DatasetCache,
}

impl Session {
    pub fn new(settings: &Settings, recent_datasets: Vec<PathBuf>) -> Self {
        Self {
            seed: settings.random_seed,
            wordcloud: settings.wordcloud_options(),
            plot_size: (settings.plot_width, settings.plot_height),
            range: RangeSelection::new(0.0, 100.0, (25.0, 75.0)),
            rows: MultiSelect::new(Vec::new()),
            gender: SelectBox::new(vec![0, 1]),
            column: SelectBox::new(Vec::new()),
            dataset: settings
                .dataset_path
                .clone()
                .map_or(DatasetSource::Bundled, DatasetSource::File),
            recent_datasets,
            datasets: DatasetCache::new(),
        }
    }

    /// Apply a widget interaction. Returns true when the dataset choice changed.
    pub fn apply(&mut self, event: WidgetEvent) -> bool {
        debug!("Widget event: {:?}", event);
        match event {
            WidgetEvent::SetRangeLow(v) => self.range.set_lo(v),
            WidgetEvent::SetRangeHigh(v) => self.range.set_hi(v),
            WidgetEvent::ToggleOption { id, option } => {
                if id == WidgetId::Rows {
                    self.rows.toggle(&option);
                }
            }
            WidgetEvent::ClearOptions(id) => {
                if id == WidgetId::Rows {
                    self.rows.clear();
                }
            }
            WidgetEvent::Select { id, index } => match id {
                WidgetId::Gender => self.gender.select(index),
                WidgetId::DescribeColumn => self.column.select(index),
                WidgetId::ValueRange | WidgetId::Rows => {}
            },
            WidgetEvent::OpenDataset(path) => {
                self.recent_datasets.retain(|p| p != &path);
                self.recent_datasets.insert(0, path.clone());
                self.recent_datasets.truncate(MAX_RECENT_DATASETS);
                self.dataset = DatasetSource::File(path);
                self.prune_datasets();
                return true;
            }
            WidgetEvent::UseBundledDataset => {
                self.dataset = DatasetSource::Bundled;
                self.prune_datasets();
                return true;
            }
            WidgetEvent::ReloadDataset => {
                let source = self.dataset.clone();
                self.datasets.invalidate(&source);
            }
        }
        false
    }

    /// Keep parsed datasets only for the bundled file, the current choice
    /// and the recent list
    fn prune_datasets(&mut self) {
        let current = &self.dataset;
        let recent = &self.recent_datasets;
        self.datasets.retain(|source| match source {
            DatasetSource::Bundled => true,
            DatasetSource::File(path) => source == current || recent.contains(path),
        });
    }

    /// Dataset path to persist, if a file is in use
    pub fn dataset_path(&self) -> Option<PathBuf> {
        match &self.dataset {
            DatasetSource::Bundled => None,
            DatasetSource::File(path) => Some(path.clone()),
        }
    }
}
