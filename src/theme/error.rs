use thiserror::Error;

use super::field::FieldKind;

/// Errors produced while addressing or mutating [`ThemeSettings`](super::ThemeSettings) fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    /// The supplied name does not match any field of the settings record.
    #[error("unknown theme field '{0}'")]
    UnknownField(String),

    /// The supplied value kind does not match the field's kind.
    #[error("field '{field}' expects a {expected} value, got {got}")]
    WrongKind {
        field: &'static str,
        expected: FieldKind,
        got: FieldKind,
    },
}
