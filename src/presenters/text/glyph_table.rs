use std::str::FromStr;

use crate::core::data::errors::DataError;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;

const IN_SET_GLYPH: &str = "  ";
const WILDCARD_GLYPH: &str = "##";
const FLAT_GLYPH: &str = "XX";

/// Which escape times a glyph applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKey {
    InSet,
    Index(u32),
    /// Inclusive on both ends.
    Range(u32, u32),
    Wildcard,
}

impl FromStr for GlyphKey {
    type Err = DataError;

    /// `"N"`, `"A-B"` or `"*"`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();

        if raw == "*" {
            return Ok(Self::Wildcard);
        }

        let parse_index = |text: &str| {
            text.trim()
                .parse::<u32>()
                .map_err(|err| DataError::invalid_because("glyph key", raw, err))
        };

        match raw.split_once('-') {
            Some((low, high)) => Ok(Self::Range(parse_index(low)?, parse_index(high)?)),
            None => Ok(Self::Index(parse_index(raw)?)),
        }
    }
}

/// An inclusive run of escape times sharing one glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
struct GlyphBand {
    low: u32,
    high: u32,
    glyph: String,
}

/// Lookup from escape time to a fixed-width glyph.
///
/// Explicit indices are validated once at construction: every index below
/// the highest one mapped must be covered exactly once. Anything past the
/// explicit indices falls through to the wildcard glyph. Ranges are kept as
/// bands, so a wide range costs no more than a single index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    bands: Vec<GlyphBand>,
    in_set: String,
    wildcard: String,
}

impl GlyphTable {
    pub fn new<G: Into<String>>(
        entries: impl IntoIterator<Item = (GlyphKey, G)>,
    ) -> Result<Self, DataError> {
        let mut bands = Vec::new();
        let mut in_set = None;
        let mut wildcard = None;

        for (key, glyph) in entries {
            let glyph = glyph.into();

            match key {
                GlyphKey::InSet => set_once(&mut in_set, glyph, "in-set")?,
                GlyphKey::Wildcard => set_once(&mut wildcard, glyph, "*")?,
                GlyphKey::Index(index) => bands.push(GlyphBand {
                    low: index,
                    high: index,
                    glyph,
                }),
                GlyphKey::Range(low, high) => {
                    if low >= high {
                        return Err(DataError::invalid_because(
                            "glyph key",
                            format!("{low}-{high}"),
                            "non-increasing range",
                        ));
                    }
                    bands.push(GlyphBand { low, high, glyph });
                }
            }
        }

        bands.sort_by_key(|band| (band.low, band.high));
        check_coverage(&bands)?;

        Ok(Self {
            bands,
            in_set: in_set.unwrap_or_else(|| IN_SET_GLYPH.to_string()),
            wildcard: wildcard.unwrap_or_else(|| WILDCARD_GLYPH.to_string()),
        })
    }

    /// Every escaped cell drawn the same.
    #[must_use]
    pub fn flat() -> Self {
        Self {
            bands: Vec::new(),
            in_set: IN_SET_GLYPH.to_string(),
            wildcard: FLAT_GLYPH.to_string(),
        }
    }

    #[must_use]
    pub fn glyph(&self, escape_time: EscapeTime) -> &str {
        let EscapeTime::Escaped(i) = escape_time else {
            return &self.in_set;
        };

        let position = self.bands.partition_point(|band| band.high < i);
        match self.bands.get(position) {
            Some(band) if band.low <= i => &band.glyph,
            _ => &self.wildcard,
        }
    }

    /// How many escape times have an explicit glyph.
    #[must_use]
    pub fn explicit_len(&self) -> u64 {
        self.bands.last().map_or(0, |band| u64::from(band.high) + 1)
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        let mut bands: Vec<GlyphBand> = ["..", "''", "\"\"", "++", "**"]
            .into_iter()
            .zip(0..)
            .map(|(glyph, index)| GlyphBand {
                low: index,
                high: index,
                glyph: glyph.to_string(),
            })
            .collect();
        bands.push(GlyphBand {
            low: 5,
            high: 19,
            glyph: FLAT_GLYPH.to_string(),
        });

        Self {
            bands,
            in_set: IN_SET_GLYPH.to_string(),
            wildcard: WILDCARD_GLYPH.to_string(),
        }
    }
}

fn set_once(slot: &mut Option<String>, glyph: String, key: &str) -> Result<(), DataError> {
    if slot.replace(glyph).is_some() {
        return Err(DataError::invalid_because("glyph key", key, "duplicate key"));
    }
    Ok(())
}

/// Sorted bands must start at 0 and tile the indices with no overlap.
fn check_coverage(bands: &[GlyphBand]) -> Result<(), DataError> {
    let mut next: u64 = 0;

    for band in bands {
        let low = u64::from(band.low);

        if low < next {
            return Err(DataError::invalid_because(
                "glyph key",
                band.low,
                format!("duplicate index {}", band.low),
            ));
        }
        if low > next {
            return Err(DataError::invalid_because(
                "glyph table",
                format!("{}-{}", band.low, band.high),
                format!("missing glyph index {next}"),
            ));
        }

        next = u64::from(band.high) + 1;
    }

    Ok(())
}
