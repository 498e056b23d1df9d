use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

/// Data-access failure.
///
/// Every storage problem surfaces as this one type; the variants only keep
/// the original cause readable and are not meant for recovery decisions.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Unable to prepare database location: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to create object of type {entity}: {reason}")]
    Mapping { entity: &'static str, reason: String },

    #[error("{entity} has no ID; it must be inserted before it can be updated")]
    MissingId { entity: &'static str },

    #[error("Generated key {0} does not fit a 32-bit ID")]
    KeyOutOfRange(i64),
}
