//! CLI subcommand implementations for the gridsnap binary.

pub mod capture_cmd;
pub mod doctor;
pub mod parse_cmd;
