pub mod holiday_dataset_service;
pub mod holiday_lookup_service;
pub mod static_site_generator;

pub use holiday_dataset_service::HolidayDatasetService;
pub use holiday_lookup_service::HolidayLookupService;
pub use static_site_generator::{GenerationReport, GenerationSettings, StaticSiteGenerator};
