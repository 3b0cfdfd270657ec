//! Error types for the continuous-track library.
//!
//! Provides unified error handling across schema validation, joint
//! resolution, and numeric constraint checking.

use core::fmt;

use crate::model::JointKind;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Dotted element path from the descriptor root, for error attribution.
pub type ElementPath = heapless::String<64>;

/// Unified error type for all continuous-track operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Structural or type mismatch against the canonical schema
    Schema(SchemaError),
    /// Joint reference could not be resolved or has the wrong kind
    Joint(JointError),
    /// A numeric field violates a positivity invariant
    Constraint(ConstraintError),
}

/// Schema and markup errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// Failed to parse descriptor or schema markup
    ParseError(heapless::String<128>),
    /// Required element missing from the descriptor
    MissingElement {
        /// Path of the missing element
        path: ElementPath,
    },
    /// Element value does not conform to the schema
    TypeMismatch {
        /// Path of the offending element
        path: ElementPath,
        /// Value class the schema requires
        expected: &'static str,
        /// Value class found in the descriptor
        found: &'static str,
    },
    /// Repeated element list is empty where at least one entry is required
    EmptySequence {
        /// Path of the empty element list
        path: ElementPath,
    },
    /// Element is not described by the schema
    UnknownElement {
        /// Path of the unexpected element
        path: ElementPath,
    },
    /// File I/O error while reading a descriptor
    IoError(heapless::String<128>),
}

/// Joint resolution errors.
#[derive(Debug, Clone, PartialEq)]
pub enum JointError {
    /// Named joint does not exist in the model
    NotFound {
        /// Path of the referencing element
        path: ElementPath,
        /// Joint name that failed to resolve
        name: heapless::String<32>,
    },
    /// Resolved joint's kinematic type is incompatible with its usage
    WrongKind {
        /// Path of the referencing element
        path: ElementPath,
        /// Joint name
        name: heapless::String<32>,
        /// Description of the acceptable kinds
        expected: &'static str,
        /// Kind the model reports for this joint
        found: JointKind,
    },
}

/// Numeric constraint errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintError {
    /// Segment end position must be > 0
    NonPositiveEndPosition {
        /// Path of the offending element
        path: ElementPath,
        /// Value found in the descriptor
        value: f64,
    },
    /// Pattern repeat count must be a positive integer
    ZeroElementsPerRound {
        /// Path of the offending element
        path: ElementPath,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Schema(e) => write!(f, "Schema error: {}", e),
            Error::Joint(e) => write!(f, "Joint error: {}", e),
            Error::Constraint(e) => write!(f, "Constraint error: {}", e),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            SchemaError::MissingElement { path } => {
                write!(f, "Missing required element [{}]", path)
            }
            SchemaError::TypeMismatch {
                path,
                expected,
                found,
            } => {
                write!(f, "Element [{}] must be a {}, found {}", path, expected, found)
            }
            SchemaError::EmptySequence { path } => {
                write!(f, "Element [{}] requires at least one entry", path)
            }
            SchemaError::UnknownElement { path } => {
                write!(f, "Element [{}] is not part of the track schema", path)
            }
            SchemaError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for JointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JointError::NotFound { path, name } => {
                write!(f, "Cannot find joint '{}' referenced by [{}]", name, path)
            }
            JointError::WrongKind {
                path,
                name,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Joint '{}' referenced by [{}] must be {} joint, found {} joint",
                    name, path, expected, found
                )
            }
        }
    }
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintError::NonPositiveEndPosition { path, value } => {
                write!(f, "[{}] must be a positive real number, got {}", path, value)
            }
            ConstraintError::ZeroElementsPerRound { path } => {
                write!(f, "[{}] must be a positive integer", path)
            }
        }
    }
}

// Conversion impls
impl From<SchemaError> for Error {
    fn from(e: SchemaError) -> Self {
        Error::Schema(e)
    }
}

impl From<JointError> for Error {
    fn from(e: JointError) -> Self {
        Error::Joint(e)
    }
}

impl From<ConstraintError> for Error {
    fn from(e: ConstraintError) -> Self {
        Error::Constraint(e)
    }
}

impl std::error::Error for Error {}

impl std::error::Error for SchemaError {}

impl std::error::Error for JointError {}

impl std::error::Error for ConstraintError {}
