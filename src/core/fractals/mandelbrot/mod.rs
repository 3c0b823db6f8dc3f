pub mod algorithm;
pub mod colour_map;
pub mod escape_time;
pub mod iter_mandelbrot;
pub mod mandelbrot_config;
