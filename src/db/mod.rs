pub mod initialize;
pub mod log;
pub mod stats;
pub mod store;
