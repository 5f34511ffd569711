use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("invalid kind: {0}")]
    InvalidCategory(String),
    #[error("missing fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

impl ServiceError {
    /// Short label used for log fields and metric labels.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidCategory(_) => "invalid_kind",
            Self::MissingFields(_) => "missing_fields",
        }
    }
}
