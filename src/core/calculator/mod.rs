pub mod aggregate;
pub mod duration;
pub mod totals;
