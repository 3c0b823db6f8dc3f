use crate::core::actions::iter_raster::iter_raster;
use crate::core::data::area::Area;
use crate::core::data::errors::DataError;
use crate::core::data::grid::Grid;
use crate::core::data::point2d::Point2D;
use crate::core::data::steps::Steps;
use crate::core::fractals::mandelbrot::algorithm::{DEFAULT_MAX_ITERATIONS, MandelbrotAlgorithm};
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;
use crate::core::fractals::mandelbrot::iter_mandelbrot::iter_mandelbrot_with_max;
use num_complex::Complex64;

pub const DEFAULT_TEXT_STEPS: u32 = 40;
pub const DEFAULT_PIXEL_STEPS: u32 = 400;

pub const FULL_VIEW_CENTER: Point2D = Point2D::new(0.0, 0.0);
pub const FULL_VIEW_RADIUS: f64 = 2.1;

/// Everything one render needs. Rebuilt for every re-render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub area: Area,
    pub grid: Grid,
    pub max_iterations: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            area: Area::default(),
            grid: Grid::square(Steps::new(DEFAULT_TEXT_STEPS)),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl MandelbrotConfig {
    pub fn new(
        center: Point2D,
        radius: f64,
        steps: Steps,
        max_iterations: u32,
    ) -> Result<Self, DataError> {
        Ok(Self {
            area: Area::from_radius(radius, center)?,
            grid: Grid::square(steps),
            max_iterations,
        })
    }

    /// The whole set, centered on the origin.
    pub fn full_view(steps: Steps, max_iterations: u32) -> Result<Self, DataError> {
        Self::new(FULL_VIEW_CENTER, FULL_VIEW_RADIUS, steps, max_iterations)
    }

    #[must_use]
    pub fn algorithm(&self) -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::with_max_iterations(self.max_iterations)
    }

    pub fn candidates(&self) -> impl ExactSizeIterator<Item = Complex64> + use<> {
        iter_raster(&self.area, &self.grid)
    }

    pub fn escape_times(&self) -> impl ExactSizeIterator<Item = (Complex64, EscapeTime)> + use<> {
        iter_mandelbrot_with_max(self.candidates(), self.max_iterations)
    }

    /// Same grid and bound over a zoomed area.
    pub fn zoomed(&self, factor: f64) -> Result<Self, DataError> {
        Ok(Self {
            area: self.area.zoom(factor)?,
            ..*self
        })
    }
}
