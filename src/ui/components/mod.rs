//! Reusable UI components

mod chart_view;
mod range_slider;
mod styled_table;
mod word_cloud;

pub use chart_view::ChartView;
pub use range_slider::{range_slider, Handle};
pub use styled_table::{styled_table, summary_table};
pub use word_cloud::word_cloud;
