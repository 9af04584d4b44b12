pub mod http;
pub mod observability;
pub mod providers;
pub mod runtime;
pub mod storage;
