use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    InvalidValue {
        kind: &'static str,
        value: String,
        cause: Option<String>,
    },
    OutOfRange {
        index: i64,
        max: u32,
    },
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { kind, value, cause } => {
                write!(f, "unsupported {} {:?}", kind, value)?;
                if let Some(cause) = cause {
                    write!(f, " ({})", cause)?;
                }
                Ok(())
            }
            Self::OutOfRange { index, max } => {
                write!(f, "index {} out of range [0, {}]", index, max)
            }
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected {}, got {}", expected, found)
            }
        }
    }
}

impl Error for DataError {}

impl DataError {
    pub(crate) fn invalid(kind: &'static str, value: impl ToString) -> Self {
        Self::InvalidValue {
            kind,
            value: value.to_string(),
            cause: None,
        }
    }

    pub(crate) fn invalid_because(
        kind: &'static str,
        value: impl ToString,
        cause: impl ToString,
    ) -> Self {
        Self::InvalidValue {
            kind,
            value: value.to_string(),
            cause: Some(cause.to_string()),
        }
    }
}
