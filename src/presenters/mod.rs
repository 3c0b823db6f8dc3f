#[cfg(feature = "gui")]
pub mod pixels;
pub mod ppm;
pub mod text;
