use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
    /// Two images that must line up pixel for pixel differ in `(width, height)`.
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    OutOfBounds,
    InvalidRatioRange,
    InvalidDensityThreshold,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Self::OutOfBounds => write!(f, "out of bounds"),
            Self::InvalidRatioRange => {
                write!(f, "invalid ratio range: need finite 0 < low < high")
            }
            Self::InvalidDensityThreshold => {
                write!(f, "invalid density threshold: need 0 < threshold < 1")
            }
        }
    }
}

impl std::error::Error for Error {}
