//! CLI library components for the inflammation analysis tool.

pub mod commands;
pub mod logging;
pub mod render;
