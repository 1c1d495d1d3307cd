//! File-extension membership predicate.

use crate::field::ControlKind;

/// `is_file_type[jpg,png]`: for file controls, the value's extension (the
/// text after the last `.`, or the whole value when there is no dot) must
/// exactly match one of the comma-separated entries. Matching is
/// case-sensitive and entries are not trimmed. Non-file controls always
/// pass.
pub fn is_file_type(value: &str, kind: ControlKind, types: Option<&str>) -> bool {
    if kind != ControlKind::File {
        return true;
    }
    let Some(types) = types else {
        return false;
    };
    let ext = value.rsplit('.').next().unwrap_or(value);
    types.split(',').any(|t| t == ext)
}

// ============================================================================
// TESTS
// ============================================================================
