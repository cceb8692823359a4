//! Strand orientation for genomic features.

use std::fmt;

use crate::error::Error;

/// Strand orientation of a genomic feature.
///
/// `Unknown` is a real state, not an error: some feature types carry no
/// strand in their source annotation. Coordinate formulas match on all
/// three variants exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Strand {
    Forward = 0,
    Reverse = 1,
    Unknown = 2,
}

impl Strand {
    /// Parse from GFF3 column 7. "+" is forward, "-" is reverse; "." and "?"
    /// (and anything else) carry no orientation.
    #[must_use]
    pub fn from_gff3(s: &str) -> Self {
        match s {
            "+" => Self::Forward,
            "-" => Self::Reverse,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn is_reverse(self) -> bool {
        self == Self::Reverse
    }

    #[must_use]
    pub fn to_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Strand {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Forward),
            1 => Ok(Self::Reverse),
            2 => Ok(Self::Unknown),
            _ => Err(Error::Parse(format!("invalid strand byte: {value}"))),
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
            Self::Unknown => write!(f, "."),
        }
    }
}
