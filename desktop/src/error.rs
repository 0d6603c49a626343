use std::{fmt, path::PathBuf};

use sprite_core::{frame::Resolution, header::HeaderError};

#[derive(Debug)]
pub enum Error {
    InvalidInputFolder(PathBuf),
    NoInputFiles(PathBuf),
    InvalidOutputName(String),
    Io {
        path: PathBuf,
        kind: std::io::ErrorKind,
    },
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    SizeMismatch {
        path: PathBuf,
        actual: Resolution,
        expected: Resolution,
    },
    /// The output header could not be created.
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        error: HeaderError,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            kind: error.kind(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInputFolder(path) => write!(
                f,
                "The input folder '{}' does not exist or is not a directory.",
                path.display()
            ),
            Error::NoInputFiles(path) => {
                write!(f, "No BMP files found in the folder '{}'.", path.display())
            }
            Error::InvalidOutputName(name) => {
                write!(f, "'{}' does not name an output header file.", name)
            }
            Error::Io { path, kind } => write!(f, "{}: {}", path.display(), kind),
            Error::Decode { path, source } => {
                write!(f, "Failed to decode image {}: {}", path.display(), source)
            }
            Error::SizeMismatch {
                path,
                actual,
                expected,
            } => write!(
                f,
                "Image {} is {}, expected: {}",
                path.display(),
                actual,
                expected
            ),
            Error::Create { path, source } => {
                write!(f, "Failed to write header {}: {}", path.display(), source)
            }
            Error::Write { path, error } => {
                write!(f, "Failed to write header {}: {}", path.display(), error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode { source, .. } => Some(source),
            Error::Create { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
