//! Error types shared by list construction, derivation, artifact loading and
//! classification.

use std::fmt;

/// Which restricted form of a property a derivation was producing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Ascii,
    Latin1,
    NonLatin1,
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantKind::Ascii => write!(f, "ASCII"),
            VariantKind::Latin1 => write!(f, "Latin-1"),
            VariantKind::NonLatin1 => write!(f, "non-Latin-1"),
        }
    }
}

/// Errors that can occur while building, loading or querying property tables
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// A structural invariant of an inversion list or record does not hold.
    #[error("malformed inversion list: {reason}")]
    MalformedList { reason: String },
    /// A compiled record was produced for a different structural version.
    #[error("inversion list version {found:#x} does not match expected {expected:#x}")]
    VersionMismatch { expected: u32, found: u32 },
    /// The restricted variant has no member code point in its sub-domain.
    #[error("property has no {variant} representation")]
    EmptyVariant { variant: VariantKind },
    #[error("unknown property {0:?}")]
    UnknownProperty(String),
    #[error("property {0:?} is defined more than once")]
    DuplicateProperty(String),
}

impl PropertyError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        PropertyError::MalformedList {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PropertyError>;
