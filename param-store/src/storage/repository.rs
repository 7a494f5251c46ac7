use std::fmt;

use crate::domain::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    ConnectionFailed(String),
    QueryFailed(String),
    ParameterNotFound(String),
    ValidationError(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            Self::QueryFailed(msg) => write!(f, "Query failed: {}", msg),
            Self::ParameterNotFound(msg) => write!(f, "Parameter not found: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Access to a remote parameter store.
///
/// Reads are always decrypted, listings are never recursive and writes always
/// overwrite whatever version is currently stored.
#[async_trait::async_trait]
pub trait ParameterRepository: Send + Sync {
    async fn get(&self, name: &ParameterName) -> Result<Parameter, RepositoryError>;

    /// Upserts the parameter and returns the version the store assigned.
    async fn put(
        &self,
        name: &ParameterName,
        value: &str,
        parameter_type: ParameterType,
    ) -> Result<i64, RepositoryError>;

    async fn delete(&self, name: &ParameterName) -> Result<(), RepositoryError>;

    /// Fetches a single page of the direct children of `path`.
    async fn list_page(
        &self,
        path: &str,
        next_token: Option<NextToken>,
    ) -> Result<ParameterPage, RepositoryError>;
}
