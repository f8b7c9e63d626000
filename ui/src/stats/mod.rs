//! Statistics payload: model, category resolution and chart scaling.

pub mod chart;
pub mod model;
pub mod resolver;

pub use model::StatsDataset;
pub use resolver::{resolve, CategoryKey, CategoryKind, ListHeader, ListItems, ResolvedCategory, UserExtraLine};
