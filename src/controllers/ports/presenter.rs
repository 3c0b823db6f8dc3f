use std::io::Write;

use num_complex::Complex64;

use crate::controllers::errors::RenderError;
use crate::core::data::grid::Grid;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;

/// Turns a row-major stream of escape results into output bytes.
///
/// The stream is consumed once, front to back; `grid` is the only layout
/// information a presenter gets.
pub trait RenderPresenterPort {
    fn present<I, W>(&self, grid: Grid, results: I, out: &mut W) -> Result<(), RenderError>
    where
        I: Iterator<Item = (Complex64, EscapeTime)>,
        W: Write;
}
