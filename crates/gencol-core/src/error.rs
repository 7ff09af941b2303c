//! Error vocabulary shared by every gencol engine.
//!
//! Every fallible operation reports exactly one [`ContainerError`]. Success
//! is always explicit (`Ok`), never inferred from a sentinel return value.

use std::error::Error;
use std::fmt;

/// Field-less discriminant of a [`ContainerError`].
///
/// Useful when matching on the failure class without caring about the
/// attached detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input (zero capacity, zero-sized element, stale handle).
    InvalidArg,
    /// The underlying allocation failed.
    AllocFail,
    /// A position outside the valid range for the operation.
    OutOfBounds,
    /// The operation needs an element that is not there.
    NoData,
    /// An internal invariant was violated.
    Unexpected,
}

impl ErrorKind {
    /// Stable numeric status code of this kind.
    ///
    /// `0` is reserved for success and never produced here.
    pub fn code(self) -> u8 {
        match self {
            Self::InvalidArg => 1,
            Self::AllocFail => 2,
            Self::OutOfBounds => 3,
            Self::NoData => 4,
            Self::Unexpected => 5,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidArg => "invalid argument",
            Self::AllocFail => "allocation failure",
            Self::OutOfBounds => "out of bounds",
            Self::NoData => "no data",
            Self::Unexpected => "unexpected",
        };
        f.write_str(name)
    }
}

/// Errors reported by container operations.
///
/// A failed operation leaves its container in the last consistent state:
/// a failed grow keeps the old buffer, a failed node allocation links
/// nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerError {
    /// Null, zero or otherwise malformed input.
    InvalidArg {
        /// What was wrong with the input.
        reason: &'static str,
    },
    /// The allocator could not satisfy a request. The container keeps its
    /// previous storage.
    AllocFail {
        /// Size of the request that failed, in bytes.
        requested_bytes: usize,
    },
    /// `pos` exceeds the valid range for the requested operation.
    OutOfBounds {
        /// The rejected position.
        pos: usize,
        /// Container length at the time of the call.
        len: usize,
    },
    /// The container is empty or the requested value is absent.
    NoData,
    /// An engine invariant was violated. This is a defect in the engine
    /// surfaced to the caller instead of being swallowed.
    Unexpected {
        /// Which invariant or internal step failed.
        context: &'static str,
    },
}

impl ContainerError {
    /// The failure class, without detail.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArg { .. } => ErrorKind::InvalidArg,
            Self::AllocFail { .. } => ErrorKind::AllocFail,
            Self::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Self::NoData => ErrorKind::NoData,
            Self::Unexpected { .. } => ErrorKind::Unexpected,
        }
    }

    /// Stable numeric status code (`1..=5`), see [`ErrorKind::code`].
    pub fn code(&self) -> u8 {
        self.kind().code()
    }

    /// Maps any failure of an internal primitive to [`Unexpected`], keeping
    /// only allocation failures, which callers can act on.
    ///
    /// Composite operations use this so that lower-level detail does not
    /// leak through their contract.
    ///
    /// [`Unexpected`]: ContainerError::Unexpected
    pub fn into_composite(self, context: &'static str) -> Self {
        match self {
            Self::AllocFail { .. } => self,
            _ => Self::Unexpected { context },
        }
    }
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArg { reason } => write!(f, "invalid argument: {reason}"),
            Self::AllocFail { requested_bytes } => {
                write!(f, "allocation of {requested_bytes} bytes failed")
            }
            Self::OutOfBounds { pos, len } => {
                write!(f, "position {pos} out of bounds for length {len}")
            }
            Self::NoData => write!(f, "no matching element"),
            Self::Unexpected { context } => {
                write!(f, "unexpected internal failure: {context}")
            }
        }
    }
}

impl Error for ContainerError {}

impl From<ContainerError> for ErrorKind {
    fn from(e: ContainerError) -> Self {
        e.kind()
    }
}
