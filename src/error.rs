//! Error type shared by construction, parsing and dynamic operand conversion.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YearMonthError {
    /// Year token is not an integer (or the resulting offset overflows).
    #[error("Invalid year \"{raw}\"")]
    InvalidYear { raw: String },

    #[error("Invalid month \"{raw}\"")]
    InvalidMonth { raw: String },

    /// A dynamic operand was neither a year-month nor an absent bound.
    #[error("object is not an instance of YearMonth (found {found})")]
    TypeMismatch { found: String },
}

pub type Result<T> = std::result::Result<T, YearMonthError>;
