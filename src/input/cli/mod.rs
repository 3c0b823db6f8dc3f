pub mod args;
pub mod logging;
