//! Display artifacts produced by a recipe in one render pass

use std::path::PathBuf;

use image::RgbaImage;

use super::chart::Chart;
use super::dataset::DatasetSource;
use super::describe::Summary;
use super::recipe::Recipe;
use super::style::StyledTable;
use super::widgets::RangeSelection;
use super::wordcloud::WordCloud;

/// A run of paragraph content
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Code(String),
    Link { text: String, url: String },
}

impl Inline {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Interactive widgets whose values live in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetId {
    ValueRange,
    Rows,
    Gender,
    DescribeColumn,
}

/// One rendered element of a page
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph(Vec<Inline>),
    Bullets(Vec<Vec<Inline>>),
    /// Source shown alongside its output
    Code(String),
    Table {
        caption: Option<String>,
        table: StyledTable,
    },
    Chart(Chart),
    Image {
        caption: String,
        image: RgbaImage,
    },
    WordCloud(WordCloud),
    Summary(Summary),
    /// An echoed value, optionally prefixed by a label
    Value {
        label: Option<String>,
        value: String,
    },
    Error(String),
    RangeSlider {
        id: WidgetId,
        label: String,
        range: RangeSelection,
    },
    MultiSelect {
        id: WidgetId,
        label: String,
        options: Vec<(usize, String)>,
        selected: Vec<usize>,
    },
    SelectBox {
        id: WidgetId,
        label: String,
        labels: Vec<String>,
        index: usize,
    },
    DatasetPicker {
        current: DatasetSource,
        recent: Vec<PathBuf>,
    },
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(vec![Inline::text(text)])
    }

    pub fn code(source: &str) -> Self {
        Self::Code(source.trim_matches('\n').to_string())
    }

    pub fn value(value: impl Into<String>) -> Self {
        Self::Value {
            label: None,
            value: value.into(),
        }
    }

    /// Whether the block shows output rather than a widget or prose
    pub fn is_artifact(&self) -> bool {
        matches!(
            self,
            Self::Table { .. }
                | Self::Chart(_)
                | Self::Image { .. }
                | Self::WordCloud(_)
                | Self::Summary(_)
                | Self::Value { .. }
                | Self::Paragraph(_)
                | Self::Bullets(_)
        )
    }
}

/// Everything one recipe shows in a render pass
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub recipe: Recipe,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn artifacts(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.is_artifact())
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Error(msg) => Some(msg.as_str()),
            _ => None,
        })
    }
}

/// Something the user did to a widget during a render pass
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    SetRangeLow(f64),
    SetRangeHigh(f64),
    ToggleOption { id: WidgetId, option: usize },
    ClearOptions(WidgetId),
    Select { id: WidgetId, index: usize },
    OpenDataset(PathBuf),
    UseBundledDataset,
    ReloadDataset,
}
