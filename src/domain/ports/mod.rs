pub mod clock;
pub mod file_storage;
pub mod holiday_source;

pub use clock::Clock;
pub use file_storage::FileStorage;
pub use holiday_source::HolidaySource;
