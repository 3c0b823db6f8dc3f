//! Windowed display: winit for the window and events, pixels for the
//! framebuffer.

pub mod app;
pub mod commands;
