//! Window state between events: the current view and the framebuffer.

use std::error::Error;

use winit::event::MouseScrollDelta;

use crate::controllers::render::render_pixel_buffer;
use crate::core::data::errors::DataError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::presenters::pixels::presenter::PixelsPresenter;

const ZOOM_IN_FACTOR: f64 = 0.8;
const ZOOM_OUT_FACTOR: f64 = 1.25;

pub struct GuiApp {
    config: MandelbrotConfig,
    presenter: PixelsPresenter,
    needs_render: bool,
}

impl GuiApp {
    pub fn new(config: MandelbrotConfig, presenter: PixelsPresenter) -> Self {
        Self {
            config,
            presenter,
            needs_render: true,
        }
    }

    pub fn config(&self) -> &MandelbrotConfig {
        &self.config
    }

    /// Zooms about the area center; the next redraw reruns the pipeline.
    pub fn zoom(&mut self, factor: f64) -> Result<(), DataError> {
        self.config = self.config.zoomed(factor)?;
        self.needs_render = true;
        Ok(())
    }

    pub fn redraw(&mut self) -> Result<(), Box<dyn Error>> {
        if self.needs_render {
            let buffer = render_pixel_buffer(&self.config)?;
            self.presenter.draw(&buffer);
            self.needs_render = false;
        }

        self.presenter.render()?;
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Box<dyn Error>> {
        self.presenter.resize_surface(width, height)?;
        Ok(())
    }
}

/// Wheel up zooms in, wheel down zooms out.
pub fn zoom_factor(delta: MouseScrollDelta) -> Option<f64> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if y > 0.0 {
        Some(ZOOM_IN_FACTOR)
    } else if y < 0.0 {
        Some(ZOOM_OUT_FACTOR)
    } else {
        None
    }
}
