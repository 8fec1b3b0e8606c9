pub mod agenda;
pub mod recurrence;
pub mod settings;
