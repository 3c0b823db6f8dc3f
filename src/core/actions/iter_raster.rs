use crate::core::data::area::Area;
use crate::core::data::grid::Grid;
use num_complex::Complex64;

/// The candidates for `area` sampled on `grid`, row-major.
///
/// Rows run from `max.y` down to `min.y` so that row 0 is the top of the
/// picture; columns run from `min.x` to `max.x`. Renderers rely on this
/// order to rebuild rows from the flat stream.
pub fn iter_raster(area: &Area, grid: &Grid) -> impl ExactSizeIterator<Item = Complex64> + use<> {
    let (min, max) = (area.min(), area.max());

    grid.iter_floats(min.x, max.x, max.y, min.y)
        .map(|(re, im)| Complex64::new(re, im))
}
