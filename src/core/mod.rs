pub mod add;
pub mod chart;
pub mod config;
pub mod limit;
pub mod log;
