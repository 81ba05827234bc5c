pub mod backup;
pub mod del;
pub mod log;
pub mod session;
