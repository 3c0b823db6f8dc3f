use crate::core::data::colour::Colour;
use crate::core::data::grid::Grid;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn grid_to_buffer_size(grid: Grid) -> usize {
    grid.length() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    BoundsMismatch {
        grid_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "grid size {} does not match buffer size {}",
                    grid_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB bytes, one pixel per grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    grid: Grid,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            buffer: vec![0; grid_to_buffer_size(grid)],
        }
    }

    pub fn from_data(grid: Grid, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let grid_size = grid_to_buffer_size(grid);

        if grid_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                grid_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { grid, buffer })
    }

    pub fn from_colours(
        grid: Grid,
        colours: impl IntoIterator<Item = Colour>,
    ) -> Result<Self, PixelBufferError> {
        let mut buffer = Vec::with_capacity(grid_to_buffer_size(grid));
        for colour in colours {
            buffer.extend_from_slice(&colour.to_bytes());
        }

        Self::from_data(grid, buffer)
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width().length()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height().length()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// The binary PPM (`P6`) header for this buffer.
    #[must_use]
    pub fn ppm_header(&self) -> String {
        format!("P6\n{} {}\n255\n", self.width(), self.height())
    }

    /// Header followed by the pixel bytes, ready for a display surface.
    #[must_use]
    pub fn to_ppm(&self) -> Vec<u8> {
        let header = self.ppm_header();
        let mut image = Vec::with_capacity(header.len() + self.buffer.len());
        image.extend_from_slice(header.as_bytes());
        image.extend_from_slice(&self.buffer);
        image
    }
}
