//! Errors surfaced while loading ROM images and program binaries.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// A fixed-size ROM image (BASIC, KERNAL, Character) was not exactly
    /// the size the socket expects.
    BadSize { expected: usize, actual: usize },
    /// A program image's header declared more payload than was present.
    Truncated { wanted: usize, got: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "io error: {}", err),
            LoadError::BadSize { expected, actual } => write!(
                f,
                "wrong image size: expected {} bytes, got {}",
                expected, actual
            ),
            LoadError::Truncated { wanted, got } => write!(
                f,
                "truncated program image: header declared {} bytes, found {}",
                wanted, got
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> LoadError {
        LoadError::Io(err)
    }
}
