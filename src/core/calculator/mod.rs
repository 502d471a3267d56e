pub mod time;
pub mod totals;
