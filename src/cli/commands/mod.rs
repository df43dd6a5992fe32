pub mod add;
pub mod chart;
pub mod config;
pub mod db;
pub mod init;
pub mod limit;
pub mod list;
pub mod log;
