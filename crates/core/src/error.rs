/// Closed set of domain-level failures.
///
/// Raised by catalog and identity logic; never constructed by the storage
/// layer. The HTTP boundary maps every variant to a fixed response shape.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request is well-formed but semantically invalid.
    #[error("{0}")]
    BadRequest(String),

    /// The caller presented no credential or an invalid one.
    #[error("{0}")]
    Unauthorized(String),

    /// Anything unexpected.
    #[error("{0}")]
    Internal(String),
}
