use std::io::Write;

use num_complex::Complex64;

use crate::controllers::errors::RenderError;
use crate::controllers::ports::presenter::RenderPresenterPort;
use crate::core::data::grid::Grid;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;
use crate::presenters::text::glyph_table::GlyphTable;

/// Draws one glyph per cell and breaks the line after every
/// `grid.width().length()` glyphs.
#[derive(Debug, Clone, Default)]
pub struct TextPresenter {
    table: GlyphTable,
}

impl RenderPresenterPort for TextPresenter {
    fn present<I, W>(&self, grid: Grid, results: I, out: &mut W) -> Result<(), RenderError>
    where
        I: Iterator<Item = (Complex64, EscapeTime)>,
        W: Write,
    {
        let row_length = grid.width().length();
        let mut column = 0;

        for (_, escape_time) in results {
            out.write_all(self.table.glyph(escape_time).as_bytes())?;

            column += 1;
            if column == row_length {
                out.write_all(b"\n")?;
                column = 0;
            }
        }

        out.flush()?;
        Ok(())
    }
}

impl TextPresenter {
    #[must_use]
    pub fn new(table: GlyphTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn table(&self) -> &GlyphTable {
        &self.table
    }
}
