//! Error types for lattice construction.

use std::error::Error;
use std::fmt;

/// Errors arising from lattice construction.
///
/// Engine operations themselves are infallible: input coordinates are
/// normalized by toroidal wrap, out-of-domain request parameters are
/// coerced at the facade, and failed swap attempts report `false` rather
/// than an error. Only constructing a lattice with an unsupported size
/// can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// The requested size lies outside the supported range.
    SizeOutOfRange {
        /// The offending size.
        value: u16,
        /// Smallest supported size.
        min: u16,
        /// Largest supported size.
        max: u16,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeOutOfRange { value, min, max } => {
                write!(f, "lattice size {value} out of range [{min}, {max}]")
            }
        }
    }
}

impl Error for LatticeError {}
