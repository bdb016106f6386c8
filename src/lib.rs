pub mod config;
pub mod error;
pub mod export;
pub mod field;
pub mod links;
pub mod locale;
pub mod model;
pub mod presenter;
pub mod statistic;

pub use error::{FacetError, FacetResult};
pub use field::StatisticField;
pub use statistic::{CollectionStatistics, Statistic};
