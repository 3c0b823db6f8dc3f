use std::io::Write;

use num_complex::Complex64;

use crate::controllers::errors::RenderError;
use crate::controllers::ports::presenter::RenderPresenterPort;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::grid::Grid;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotEscapeBands;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;

/// Writes a binary PPM image: header, then RGB bytes in stream order.
#[derive(Debug, Clone, Default)]
pub struct PpmPresenter<CMap = MandelbrotEscapeBands> {
    colour_map: CMap,
}

impl<CMap: ColourMap<EscapeTime>> RenderPresenterPort for PpmPresenter<CMap> {
    fn present<I, W>(&self, grid: Grid, results: I, out: &mut W) -> Result<(), RenderError>
    where
        I: Iterator<Item = (Complex64, EscapeTime)>,
        W: Write,
    {
        let buffer = generate_pixel_buffer(results, &self.colour_map, grid)?;

        out.write_all(&buffer.to_ppm())?;
        out.flush()?;

        Ok(())
    }
}

impl<CMap: ColourMap<EscapeTime>> PpmPresenter<CMap> {
    pub fn new(colour_map: CMap) -> Self {
        Self { colour_map }
    }
}
