pub mod cli;
pub mod config;
pub mod dates;
pub mod error;
pub mod geometry;
pub mod report;
