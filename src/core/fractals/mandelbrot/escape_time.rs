use std::fmt;

/// Outcome of iterating one candidate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EscapeTime {
    /// The zero-based iteration at which `|z|` first exceeded 2.
    Escaped(u32),
    /// No escape within the iteration bound; presumed inside the set.
    InSet,
}

impl EscapeTime {
    #[must_use]
    pub const fn iterations(self) -> Option<u32> {
        match self {
            Self::Escaped(iteration) => Some(iteration),
            Self::InSet => None,
        }
    }

    #[must_use]
    pub const fn is_in_set(self) -> bool {
        matches!(self, Self::InSet)
    }
}

impl From<EscapeTime> for Option<u32> {
    fn from(value: EscapeTime) -> Self {
        value.iterations()
    }
}

impl fmt::Display for EscapeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Escaped(iteration) => write!(f, "{}", iteration),
            Self::InSet => f.write_str("in set"),
        }
    }
}
