use std::error::Error;
use std::fmt;
use std::io;

use crate::core::data::errors::DataError;
use crate::core::data::pixel_buffer::PixelBufferError;

#[derive(Debug)]
pub enum RenderError {
    Data(DataError),
    PixelBuffer(PixelBufferError),
    Io(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(err) => write!(f, "invalid render input: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::Io(err) => write!(f, "failed to write output: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Data(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<DataError> for RenderError {
    fn from(err: DataError) -> Self {
        Self::Data(err)
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_is_source() {
        let err = RenderError::from(DataError::OutOfRange { index: 5, max: 3 });

        assert_eq!(err.to_string(), "invalid render input: index 5 out of range [0, 3]");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let err = RenderError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));

        assert!(matches!(err, RenderError::Io(_)));
        assert_eq!(err.to_string(), "failed to write output: closed");
    }
}
