//! Error types for layout compilation and field access.

/// Errors produced when compiling [crate::field::Field]s into a [crate::word::Word]
/// or a [crate::table::RegisterTable].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// Field range is not `0 <= lsb <= msb <= 31`. Carries the field name.
    #[error("invalid bit range for field `{0}`")]
    InvalidRange(String),
    /// Field name is empty.
    #[error("field name must not be empty")]
    InvalidFieldName,
    /// Two fields in the same word share a name.
    #[error("field `{0}` is defined more than once")]
    DuplicateFieldName(String),
    /// Two fields in the same word cover a common bit.
    #[error("fields `{0}` and `{1}` overlap")]
    OverlappingFields(String, String),
    /// Table value list and layout list differ in length.
    #[error("{values} initial values given for {layouts} layouts")]
    LengthMismatch { values: usize, layouts: usize },
}

/// Errors produced by [crate::word::Word::get] and [crate::word::Word::set].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The word was compiled read-only.
    #[error("field `{0}` is read-only")]
    ReadOnlyField(String),
    /// No field with this name exists in the word's layout.
    #[error("unknown field `{0}`")]
    UnknownField(String),
}
