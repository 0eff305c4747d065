pub mod common;
pub mod completions;
pub mod config;
pub mod exclude;
pub mod excluded;
pub mod reach;
pub mod today;
