pub mod calculator;
pub mod dial;
pub mod roster;
pub mod session;
