pub mod area;
pub mod colour;
pub mod errors;
pub mod grid;
pub mod pixel_buffer;
pub mod point2d;
pub mod steps;
