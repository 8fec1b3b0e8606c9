pub mod recur;
pub mod schedule;
