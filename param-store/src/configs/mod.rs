pub mod cli;
pub mod client;
pub mod environment;

pub use cli::CliArgs;
pub use client::ClientConfig;

use std::{fmt, str::FromStr};

use crate::{
    domain::{ParameterName, ParameterType},
    error::CliError,
    storage::repository::RepositoryError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    List,
    Put,
    Delete,
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Operation::Get),
            "get-all" => Ok(Operation::List),
            "put" => Ok(Operation::Put),
            "del" => Ok(Operation::Delete),
            other => Err(format!("Unknown operation '{other}'")),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Get => "get",
            Operation::List => "get-all",
            Operation::Put => "put",
            Operation::Delete => "del",
        };
        f.write_str(name)
    }
}

/// A fully validated request for one of the four store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get {
        name: ParameterName,
    },
    List {
        path: String,
    },
    Put {
        name: ParameterName,
        value: String,
        parameter_type: ParameterType,
    },
    Delete {
        name: ParameterName,
        // Accepted for compatibility; deletes never prompt.
        silent: bool,
    },
}

impl Command {
    pub fn operation(&self) -> Operation {
        match self {
            Command::Get { .. } => Operation::Get,
            Command::List { .. } => Operation::List,
            Command::Put { .. } => Operation::Put,
            Command::Delete { .. } => Operation::Delete,
        }
    }
}

/// Immutable configuration built once from the parsed flags.
///
/// `command` is `None` when the operation was empty or not recognised, in
/// which case only usage is printed and no client is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub command: Option<Command>,
}

impl TryFrom<CliArgs> for AppConfig {
    type Error = CliError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let key = args.key.unwrap_or_default();
        if key.is_empty() {
            return Err(CliError::InvalidArgument("Key was not provided".to_string()));
        }

        let operation = args
            .op
            .as_deref()
            .and_then(|op| Operation::from_str(op).ok());

        let command = match operation {
            None => None,
            Some(Operation::Get) => Some(Command::Get {
                name: ParameterName::new(key),
            }),
            Some(Operation::List) => Some(Command::List { path: key }),
            Some(Operation::Put) => {
                let value = args.value.unwrap_or_default();
                if value.is_empty() {
                    return Err(CliError::InvalidArgument(
                        "Value was not provided".to_string(),
                    ));
                }
                let parameter_type = ParameterType::from_str(&args.parameter_type).map_err(|msg| {
                    CliError::repository("Cannot save parameter")(RepositoryError::ValidationError(
                        msg,
                    ))
                })?;
                Some(Command::Put {
                    name: ParameterName::new(key),
                    value,
                    parameter_type,
                })
            }
            Some(Operation::Delete) => Some(Command::Delete {
                name: ParameterName::new(key),
                silent: args.silent,
            }),
        };

        Ok(AppConfig {
            client: ClientConfig::resolve(args.aws_region, args.profile, args.endpoint_url),
            command,
        })
    }
}
