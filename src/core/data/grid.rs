use crate::core::data::errors::DataError;
use crate::core::data::point2d::{Point2D, RawPoint};
use crate::core::data::steps::Steps;
use std::iter::FusedIterator;

/// A `width × height` sampling lattice of `(width+1) × (height+1)` cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: Steps,
    height: Steps,
}

impl Grid {
    #[must_use]
    pub const fn new(width: Steps, height: Steps) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn from_counts(width: u32, height: u32) -> Self {
        Self::new(Steps::new(width), Steps::new(height))
    }

    /// Height defaults to width.
    #[must_use]
    pub const fn square(width: Steps) -> Self {
        Self::new(width, width)
    }

    #[must_use]
    pub fn width(&self) -> Steps {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> Steps {
        self.height
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.width.length() * self.height.length()
    }

    /// Row-major `(x, y)` lattice coordinates.
    #[must_use]
    pub fn iter(&self) -> GridCells {
        GridCells {
            columns: self.width.length(),
            front: 0,
            back: self.length(),
        }
    }

    #[must_use]
    pub fn contains(&self, (x, y): (i64, i64)) -> bool {
        self.width.contains(x) && self.height.contains(y)
    }

    /// The steps of row `y`.
    pub fn row(&self, y: i64) -> Result<Steps, DataError> {
        if !self.height.contains(y) {
            return Err(DataError::OutOfRange {
                index: y,
                max: self.height.count(),
            });
        }

        Ok(self.width)
    }

    /// Maps every cell onto floats, rows outermost. The direction of each
    /// axis follows the order of its start and end.
    #[must_use]
    pub fn iter_floats(&self, xstart: f64, xend: f64, ystart: f64, yend: f64) -> GridFloats {
        GridFloats {
            width: self.width,
            height: self.height,
            x: (xstart, xend),
            y: (ystart, yend),
            cells: self.iter(),
        }
    }

    pub fn iter_points(
        &self,
        start: Point2D,
        end: Point2D,
    ) -> impl Iterator<Item = Point2D> + use<> {
        self.iter_floats(start.x, end.x, start.y, end.y)
            .map(|(x, y)| Point2D::new(x, y))
    }

    /// [`Grid::iter_points`] with both corners resolved through
    /// [`Point2D::from_raw`]. Both corners are required.
    pub fn iter_raw_points(
        &self,
        start: Option<RawPoint>,
        end: Option<RawPoint>,
    ) -> Result<impl Iterator<Item = Point2D> + use<>, DataError> {
        let resolve = |raw: Option<RawPoint>| -> Result<Point2D, DataError> {
            Point2D::from_raw(raw)?
                .ok_or_else(|| {
                    DataError::invalid_because("grid corner", "None", "missing corner")
                })
        };

        Ok(self.iter_points(resolve(start)?, resolve(end)?))
    }
}

impl IntoIterator for Grid {
    type Item = (u32, u32);
    type IntoIter = GridCells;

    fn into_iter(self) -> GridCells {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct GridCells {
    columns: usize,
    front: usize,
    back: usize,
}

impl GridCells {
    #[allow(clippy::cast_possible_truncation)]
    fn cell(&self, index: usize) -> (u32, u32) {
        ((index % self.columns) as u32, (index / self.columns) as u32)
    }
}

impl Iterator for GridCells {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        if self.front >= self.back {
            return None;
        }

        let cell = self.cell(self.front);
        self.front += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for GridCells {
    fn next_back(&mut self) -> Option<(u32, u32)> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        Some(self.cell(self.back))
    }
}

impl ExactSizeIterator for GridCells {}

impl FusedIterator for GridCells {}

#[derive(Debug, Clone)]
pub struct GridFloats {
    width: Steps,
    height: Steps,
    x: (f64, f64),
    y: (f64, f64),
    cells: GridCells,
}

impl GridFloats {
    fn coords(&self, (i, j): (u32, u32)) -> (f64, f64) {
        (
            self.width.float_at(i, self.x.0, self.x.1),
            self.height.float_at(j, self.y.0, self.y.1),
        )
    }
}

impl Iterator for GridFloats {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<(f64, f64)> {
        let cell = self.cells.next()?;
        Some(self.coords(cell))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl DoubleEndedIterator for GridFloats {
    fn next_back(&mut self) -> Option<(f64, f64)> {
        let cell = self.cells.next_back()?;
        Some(self.coords(cell))
    }
}

impl ExactSizeIterator for GridFloats {}

impl FusedIterator for GridFloats {}
