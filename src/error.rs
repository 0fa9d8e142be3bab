use crate::interface::Interface;
use crate::types::Property;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while projecting player state onto the protocol
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// Field is not declared in the wire type table
    #[error("unknown protocol field: {0}")]
    UnknownField(String),

    /// Value failed validation for the given field
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Wire key of the offending field
        field: String,
        /// Why the value was rejected
        reason: InvalidReason,
    },

    /// State accessor failed while reading one property
    #[error("state accessor failed for {property}: {source}")]
    AccessorRead {
        /// Property the accessor was asked for
        property: Property,
        /// Underlying accessor failure
        source: AccessorError,
    },

    /// Write attempted on a property the interface declares read-only
    #[error("property {property} is read-only on {interface}")]
    ReadOnlyProperty {
        /// Property the write targeted
        property: Property,
        /// Interface that declares it
        interface: Interface,
    },

    /// Property is not declared on the targeted interface at all
    #[error("property {property} is not declared on {interface}")]
    UndeclaredProperty {
        /// Property the caller referenced
        property: Property,
        /// Interface it is missing from
        interface: Interface,
    },

    /// Static tables disagree with each other; fatal at startup
    #[error("property table inconsistency: {0}")]
    TableInconsistency(String),

    /// D-Bus transport rejected the change announcement
    #[error("change announcement failed: {0}")]
    Announce(#[from] zbus::Error),
}

/// Why a candidate value was rejected by the validator.
///
/// `TypeMismatch` and `NullList` produce the same external behavior
/// (omission) but stay distinct for diagnostics.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Value is the absent sentinel
    #[error("value is absent")]
    Absent,

    /// Field is not declared in the wire type table
    #[error("field is not declared")]
    UnknownField,

    /// Value's runtime type is outside the declared set
    #[error("runtime type not declared for any field")]
    TypeMismatch,

    /// Sequence value contains nothing but absent elements
    #[error("list holds no present elements")]
    NullList,
}

/// Failure reported by a [`crate::notify::StateAccessor`] for one field.
///
/// Accessors return [`crate::value::FieldValue::Absent`] for merely-missing
/// values; this type is for genuine read failures.
#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct AccessorError(pub String);

impl AccessorError {
    /// Wrap an arbitrary read failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessor_read_names_the_property_and_the_cause() {
        let error = ExportError::AccessorRead {
            property: Property::Volume,
            source: AccessorError::new("backend gone"),
        };

        assert_eq!(
            error.to_string(),
            "state accessor failed for Volume: backend gone"
        );
    }
}
