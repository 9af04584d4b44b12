pub mod aggregator;
pub mod dataset_parser;
pub mod resolver;

pub use aggregator::{aggregate_by_month, aggregate_by_year};
pub use dataset_parser::parse_dataset;
pub use resolver::{resolve, resolve_range};
