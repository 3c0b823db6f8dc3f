use pixels::{Pixels, SurfaceTexture, TextureError};
use tracing::warn;
use winit::window::Window;

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

const RGBA_BYTES: usize = 4;

/// Shows a [`PixelBuffer`] in a window through a `pixels` framebuffer.
///
/// The framebuffer keeps the grid's size; `pixels` scales it to the surface.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    buffer_width: u32,
    buffer_height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        buffer_width: u32,
        buffer_height: u32,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(buffer_width, buffer_height, surface_texture)?;

        Ok(Self {
            pixels,
            buffer_width,
            buffer_height,
        })
    }

    pub fn draw(&mut self, buffer: &PixelBuffer) {
        let frame = self.pixels.frame_mut();

        if !copy_rgb_into_rgba(buffer.buffer(), frame) {
            warn!(
                buffer = buffer.buffer_size(),
                frame = frame.len(),
                width = self.buffer_width,
                height = self.buffer_height,
                "pixel buffer does not fit the frame"
            );
        }
    }

    pub fn render(&self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }
}

/// Copies packed RGB into an RGBA frame with full alpha.
///
/// Returns `false`, leaving `dest` untouched, when the pixel counts differ.
pub fn copy_rgb_into_rgba(src: &[u8], dest: &mut [u8]) -> bool {
    if src.len() / BYTES_PER_PIXEL != dest.len() / RGBA_BYTES {
        return false;
    }

    for (src_pixel, dst_pixel) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dest.chunks_exact_mut(RGBA_BYTES))
    {
        dst_pixel[..BYTES_PER_PIXEL].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    true
}
