use chrono::NaiveDate;

pub trait Clock: Send + Sync {
    /// Current calendar date
    fn today(&self) -> NaiveDate;
}
