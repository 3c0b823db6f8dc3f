use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::grid::Grid;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use num_complex::Complex64;

/// Colours each result of a fractal stream into a buffer shaped like `grid`.
///
/// The stream must hold exactly one result per grid cell, in grid order.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    results: impl IntoIterator<Item = (Complex64, T)>,
    mapper: &CMap,
    grid: Grid,
) -> Result<PixelBuffer, PixelBufferError> {
    let colours = results.into_iter().map(|(_, value)| mapper.map(value));

    PixelBuffer::from_colours(grid, colours)
}
