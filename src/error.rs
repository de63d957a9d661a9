use std::error::Error as StdError;
use std::fmt;

/// Validation failures raised at construction time. Bad geometry is rejected
/// before it can leak NaNs into the render.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    InvalidRadius(f32),
    InvalidResolution { width: usize, height: usize },
    UnknownMaterial(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRadius(radius) => {
                write!(f, "sphere radius must be positive, got {}", radius)
            }
            Error::InvalidResolution { width, height } => {
                write!(
                    f,
                    "camera resolution must be nonzero, got {}x{}",
                    width, height
                )
            }
            Error::UnknownMaterial(name) => {
                write!(f, "material {:?} not present in the material library", name)
            }
        }
    }
}

impl StdError for Error {}
