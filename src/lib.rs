pub mod args;
pub mod cluster;
pub mod coords;
pub mod engine;
pub mod error;
pub mod input;
pub mod matcher;
pub mod report;
