//! Command implementations and terminal rendering

pub mod screen;
pub mod setup;
pub mod ui;
