pub mod holiday;

pub use holiday::*;
