use thiserror::Error;

/// Errors that abort a children traversal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChildrenError {
    #[error(
        "objects are not valid as children (found: {found}); use a \
         sequence to render a collection of children"
    )]
    InvalidChildType { found: String },

    #[error("expected to receive a single element child")]
    NotSingleElement,
}

pub type Result<T> = std::result::Result<T, ChildrenError>;
