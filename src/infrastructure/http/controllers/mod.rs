pub mod holidays;

pub use holidays::*;
