//! Main content panels

pub mod dataset;
pub mod page;
