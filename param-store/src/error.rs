use std::{fmt, io};

use crate::storage::repository::RepositoryError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_ARGUMENT: u8 = 2;

#[derive(Debug)]
pub enum CliError {
    /// A required flag was missing; nothing was sent to the store.
    InvalidArgument(String),
    Connection(RepositoryError),
    Repository {
        context: &'static str,
        source: RepositoryError,
    },
    Output(io::Error),
}

impl CliError {
    pub fn repository(context: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| CliError::Repository { context, source }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InvalidArgument(_) => EXIT_INVALID_ARGUMENT,
            CliError::Connection(_) | CliError::Repository { .. } | CliError::Output(_) => {
                EXIT_FAILURE
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidArgument(msg) => write!(f, "{msg}"),
            CliError::Connection(err) => write!(f, "Cannot authenticate with AWS because: {err}"),
            CliError::Repository { context, source } => write!(f, "{context} because: {source}"),
            CliError::Output(err) => write!(f, "Cannot write output because: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InvalidArgument(_) => None,
            CliError::Connection(err) => Some(err),
            CliError::Repository { source, .. } => Some(source),
            CliError::Output(err) => Some(err),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Output(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::InvalidArgument("x".into()).exit_code(), 2);
        assert_eq!(
            CliError::Connection(RepositoryError::ConnectionFailed("x".into())).exit_code(),
            1
        );
        let err = CliError::repository("Cannot get parameter")(RepositoryError::ParameterNotFound(
            "/a".into(),
        ));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_repository_error_message_has_context() {
        let err = CliError::repository("Cannot delete parameter")(
            RepositoryError::ParameterNotFound("/a".into()),
        );
        assert_eq!(
            err.to_string(),
            "Cannot delete parameter because: Parameter not found: /a"
        );
    }
}
