use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PermitError {
    /// Category segment is neither `electrical` nor `structural`.
    #[error("Type not found!")]
    UnknownCategory(String),
    /// No permit with this id in the category.
    #[error("{0} not found")]
    NotFound(i64),
}

impl PermitError {
    pub fn unknown_category(name: &str) -> Self { Self::UnknownCategory(name.to_string()) }
}
