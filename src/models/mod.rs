pub mod chart;
pub mod expense;
pub mod input;
pub mod outcome;
