//! Library entry point for the modnuke CLI.

pub mod commands;
pub mod config;
pub mod deleter;
pub mod error;
pub mod model;
pub mod scanner;
pub mod selection;
pub mod session;
pub mod size;
pub mod sort;
pub mod utils;
