use rds_compare::GroupKind;
use thiserror::Error;

/// Parameter retrieval errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{operation} failed: {message}")]
    Api {
        operation: &'static str,
        message: String,
    },

    #[error("Parameter group not found: {name}")]
    GroupNotFound { name: String },

    #[error("Parameter group {name} exists as both {first} and {second}; pass a kind to choose")]
    AmbiguousGroup {
        name: String,
        first: GroupKind,
        second: GroupKind,
    },

    #[error("Not enough parameter groups found to compare (found {found}).")]
    NotEnoughGroups { found: usize },

    #[error("Pagination exceeded {limit} pages")]
    TooManyPages { limit: usize },

    #[error("Pagination stalled: marker {marker:?} returned twice")]
    StalledPagination { marker: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fixture error: {0}")]
    Fixture(#[from] serde_json::Error),
}
