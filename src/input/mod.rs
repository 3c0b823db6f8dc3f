//! Input adapters: the command line, and the window event loop behind the
//! `gui` feature.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
