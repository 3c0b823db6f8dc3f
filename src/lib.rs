mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::controllers::errors::RenderError;
pub use crate::controllers::ports::presenter::RenderPresenterPort;
pub use crate::controllers::render::{RenderController, render_pixel_buffer};
pub use crate::core::actions::generate_fractal::generate_fractal::{
    GenerateFractal, generate_fractal,
};
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::iter_raster::iter_raster;
pub use crate::core::data::area::Area;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::errors::DataError;
pub use crate::core::data::grid::Grid;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point2d::{Operand, Point2D, RawPoint};
pub use crate::core::data::steps::{FloatSteps, StepRange, Steps};
pub use crate::core::fractals::mandelbrot::algorithm::{
    DEFAULT_MAX_ITERATIONS, Iterations, MandelbrotAlgorithm,
};
pub use crate::core::fractals::mandelbrot::colour_map::MandelbrotEscapeBands;
pub use crate::core::fractals::mandelbrot::escape_time::EscapeTime;
pub use crate::core::fractals::mandelbrot::iter_mandelbrot::{
    iter_mandelbrot, iter_mandelbrot_with_max,
};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::input::cli::args::{Args, UiKind};
pub use crate::input::cli::logging::init_logging;
pub use crate::presenters::ppm::ppm_presenter::PpmPresenter;
pub use crate::presenters::text::glyph_table::{GlyphKey, GlyphTable};
pub use crate::presenters::text::text_presenter::TextPresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
