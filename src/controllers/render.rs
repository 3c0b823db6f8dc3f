use std::io::Write;
use std::time::Instant;

use tracing::{debug, info};

use crate::controllers::errors::RenderError;
use crate::controllers::ports::presenter::RenderPresenterPort;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotEscapeBands;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

/// Runs the raster -> escape time -> presenter pipeline for one config.
pub struct RenderController<P: RenderPresenterPort> {
    presenter: P,
}

impl<P: RenderPresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn render<W: Write>(
        &self,
        config: &MandelbrotConfig,
        out: &mut W,
    ) -> Result<(), RenderError> {
        log_request(config);

        let start = Instant::now();
        self.presenter.present(config.grid, config.escape_times(), out)?;

        debug!(duration = ?start.elapsed(), "render finished");
        Ok(())
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

/// Renders straight into an in-memory buffer for a display surface.
pub fn render_pixel_buffer(config: &MandelbrotConfig) -> Result<PixelBuffer, RenderError> {
    log_request(config);

    let start = Instant::now();
    let buffer = generate_pixel_buffer(config.escape_times(), &MandelbrotEscapeBands, config.grid)?;

    debug!(duration = ?start.elapsed(), bytes = buffer.buffer_size(), "pixel buffer ready");
    Ok(buffer)
}

fn log_request(config: &MandelbrotConfig) {
    info!(
        area = %config.area,
        width = config.grid.width().length(),
        height = config.grid.height().length(),
        max_iterations = config.max_iterations,
        "rendering mandelbrot set"
    );
}
