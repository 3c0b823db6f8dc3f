use std::error::Error;

use tracing::{debug, error, warn};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::app::{GuiApp, zoom_factor};
use crate::presenters::pixels::presenter::PixelsPresenter;

const MIN_WINDOW_SIDE: f64 = 200.0;

/// Opens a window showing `config` and re-renders on every wheel zoom.
/// Returns when the window is closed or Escape is pressed.
pub struct RunGuiCommand {
    config: MandelbrotConfig,
}

impl RunGuiCommand {
    pub fn new(config: MandelbrotConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let width = u32::try_from(self.config.grid.width().length())?;
        let height = u32::try_from(self.config.grid.height().length())?;

        let event_loop = EventLoop::new()?;

        // pixels needs the window for 'static
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot")
                .with_inner_size(LogicalSize::new(f64::from(width), f64::from(height)))
                .with_min_inner_size(LogicalSize::new(MIN_WINDOW_SIDE, MIN_WINDOW_SIDE))
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(window, width, height)?;
        let mut app = GuiApp::new(self.config, presenter);

        window.request_redraw();

        event_loop.run(move |event, elwt| {
            let Event::WindowEvent { event, window_id } = event else {
                return;
            };
            if window_id != window.id() {
                return;
            }

            match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key: Key::Named(NamedKey::Escape),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => elwt.exit(),
                WindowEvent::MouseWheel { delta, .. } => {
                    let Some(factor) = zoom_factor(delta) else {
                        return;
                    };
                    match app.zoom(factor) {
                        Ok(()) => {
                            debug!(area = %app.config().area, "zoomed");
                            window.request_redraw();
                        }
                        Err(err) => warn!(%err, "zoom rejected"),
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = app.resize(size.width, size.height) {
                        error!(%err, "failed to resize surface");
                        elwt.exit();
                    }
                    window.request_redraw();
                }
                WindowEvent::RedrawRequested => {
                    if let Err(err) = app.redraw() {
                        error!(%err, "render failed");
                        elwt.exit();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}
