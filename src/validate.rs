use crate::error::{ExportError, InvalidReason};
use crate::metadata::MetadataField;
use crate::value::{FieldValue, ValueKind};

/// Runtime kinds some declared field serializes from.
///
/// Admissibility is checked against this whole set rather than the one
/// kind a particular field wants; the exact pairing is enforced later, at
/// wire conversion. A kind outside this set can never reach the wire.
pub const DECLARED_KINDS: &[ValueKind] = &[
    ValueKind::Bool,
    ValueKind::Str,
    ValueKind::Double,
    ValueKind::Int32,
    ValueKind::Int64,
    ValueKind::UInt32,
    ValueKind::UInt64,
    ValueKind::ObjPath,
    ValueKind::StrList,
    ValueKind::ObjPathList,
];

/// Decide whether `value` may be serialized under the metadata key `key`.
///
/// Checks run cheapest first: the absent sentinel, then key declaration,
/// then the runtime-kind membership test, then list contents. A list whose
/// elements are all absent is rejected even though the list itself is
/// present; an empty list counts as such.
pub fn validate(key: &str, value: &FieldValue) -> Result<(), InvalidReason> {
    if value.is_absent() {
        return Err(InvalidReason::Absent);
    }

    if MetadataField::from_key(key).is_none() {
        return Err(InvalidReason::UnknownField);
    }

    if !DECLARED_KINDS.contains(&value.kind()) {
        return Err(InvalidReason::TypeMismatch);
    }

    if is_null_list(value) {
        return Err(InvalidReason::NullList);
    }

    Ok(())
}

/// Boolean form of [`validate`].
pub fn is_valid(key: &str, value: &FieldValue) -> bool {
    validate(key, value).is_ok()
}

/// Error form of [`validate`], for callers that treat rejection as an error
/// instead of an omission.
///
/// # Errors
///
/// Returns [`ExportError::InvalidValue`] carrying the rejection reason.
pub fn require_valid(key: &str, value: &FieldValue) -> Result<(), ExportError> {
    validate(key, value).map_err(|reason| ExportError::InvalidValue {
        field: key.to_string(),
        reason,
    })
}

fn is_null_list(value: &FieldValue) -> bool {
    match value {
        FieldValue::StrList(items) => items.iter().all(Option::is_none),
        FieldValue::ObjPathList(items) => items.iter().all(Option::is_none),
        _ => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::metadata::METADATA_FIELDS;

    #[test]
    fn absent_wins_over_every_other_rule() {
        assert_eq!(
            validate("not-a-key", &FieldValue::Absent),
            Err(InvalidReason::Absent)
        );
    }

    #[test]
    fn undeclared_keys_are_rejected_before_type_checks() {
        assert_eq!(
            validate("xesam:lyricist", &FieldValue::Playlists(Vec::new())),
            Err(InvalidReason::UnknownField)
        );
    }

    #[test]
    fn kinds_outside_the_declared_set_are_rejected() {
        assert_eq!(
            validate("xesam:title", &FieldValue::Playlists(Vec::new())),
            Err(InvalidReason::TypeMismatch)
        );
    }

    #[test]
    fn membership_check_is_permissive_across_declared_kinds() {
        // A string is a declared kind, so it passes here even for an
        // integer field; the exact pairing is enforced at conversion.
        assert!(is_valid("mpris:length", &FieldValue::from("120")));
    }

    #[test]
    fn all_absent_lists_are_invalid_for_every_field() {
        let null_list = FieldValue::StrList(vec![None, None, None]);

        for field in METADATA_FIELDS {
            assert_eq!(
                validate(field.key(), &null_list),
                Err(InvalidReason::NullList)
            );
        }
    }

    #[test]
    fn empty_lists_count_as_null_lists() {
        assert_eq!(
            validate("xesam:comment", &FieldValue::StrList(Vec::new())),
            Err(InvalidReason::NullList)
        );
    }

    #[test]
    fn error_form_carries_the_reason() {
        let error = require_valid("xesam:comment", &FieldValue::StrList(Vec::new()));
        assert!(matches!(
            error,
            Err(ExportError::InvalidValue {
                reason: InvalidReason::NullList,
                ..
            })
        ));
    }

    #[test]
    fn present_values_pass() {
        assert!(is_valid("xesam:title", &FieldValue::from("Song")));
        assert!(is_valid(
            "xesam:artist",
            &FieldValue::StrList(vec![Some("A".to_string()), None])
        ));
    }
}
