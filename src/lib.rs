pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::*;
pub use domain::entities::holiday::{Dataset, HolidayFlag, HolidayRecord, ResolvedDay};
pub use domain::errors::{DomainError, DomainResult};
