pub mod glyph_table;
pub mod text_presenter;
