use std::{error::Error, fmt, panic::Location};

/// How a checked accessor addressed the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Linear(usize),
    Grid(usize, usize),
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Linear(i) => write!(f, "index {}", i),
            Access::Grid(x, y) => write!(f, "position ({}, {})", x, y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The requested shape does not reproduce the capacity.
    /// `height` is `None` when only a width was given (construction).
    InvalidConfiguration {
        capacity: usize,
        width: usize,
        height: Option<usize>,
    },
    /// A checked accessor was given a position outside the grid.
    OutOfRange {
        access: Access,
        width: usize,
        height: usize,
    },
}

impl GridError {
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, GridError::InvalidConfiguration { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, GridError::OutOfRange { .. })
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidConfiguration { capacity: 0, .. } => {
                write!(f, "invalid size: capacity is 0")
            }
            GridError::InvalidConfiguration {
                capacity,
                width,
                height: None,
            } => write!(f, "invalid width {} for capacity {}", width, capacity),
            GridError::InvalidConfiguration {
                capacity,
                width,
                height: Some(height),
            } => write!(
                f,
                "invalid size {}x{} for capacity {}",
                width, height, capacity
            ),
            GridError::OutOfRange {
                access,
                width,
                height,
            } => write!(
                f,
                "{} is out of range for a {}x{} grid",
                access, width, height
            ),
        }
    }
}

impl Error for GridError {}

pub struct ErrorExplained {
    inner: Box<dyn Error + Send + Sync>,
    loc: &'static Location<'static>,
}

impl ErrorExplained {
    pub fn location(&self) -> &'static Location<'static> {
        self.loc
    }
}

impl Error for ErrorExplained {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl fmt::Display for ErrorExplained {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f).and_then(|_| {
            let loc = self.loc;
            write!(f, " at {}:{}:{}", loc.file(), loc.line(), loc.column())
        })
    }
}

impl fmt::Debug for ErrorExplained {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f).and_then(|_| {
            let loc = self.loc;
            write!(f, " at {}:{}:{}", loc.file(), loc.line(), loc.column())
        })
    }
}

pub trait OrExplain<T> {
    /// ok or explain err
    fn or_exp(self) -> Result<T, ErrorExplained>;
}

impl<T, E> OrExplain<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn or_exp(self) -> Result<T, ErrorExplained> {
        match self {
            Ok(v) => Ok(v),
            Err(err) => Err(ErrorExplained {
                inner: From::from(err),
                loc: Location::caller(),
            }),
        }
    }
}
