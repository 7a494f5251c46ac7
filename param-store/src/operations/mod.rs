use std::io::Write;

use tracing::{debug, info};

use crate::{
    configs::Command,
    domain::{ParameterName, ParameterType},
    error::CliError,
    storage::{pagination::collect_names, repository::ParameterRepository},
};

/// Runs one command against the store and renders its result to `out`.
pub async fn execute<W: Write>(
    command: Command,
    repository: &dyn ParameterRepository,
    out: &mut W,
) -> Result<(), CliError> {
    debug!(operation = %command.operation(), "Dispatching operation");
    match command {
        Command::Get { name } => get_parameter(&name, repository, out).await,
        Command::List { path } => list_parameters(&path, repository, out).await,
        Command::Put {
            name,
            value,
            parameter_type,
        } => put_parameter(&name, &value, parameter_type, repository, out).await,
        Command::Delete { name, silent } => delete_parameter(&name, silent, repository, out).await,
    }
}

pub async fn get_parameter<W: Write>(
    name: &ParameterName,
    repository: &dyn ParameterRepository,
    out: &mut W,
) -> Result<(), CliError> {
    let parameter = repository
        .get(name)
        .await
        .map_err(CliError::repository("Cannot get parameter"))?;

    writeln!(out, "{parameter}")?;
    Ok(())
}

pub async fn list_parameters<W: Write>(
    path: &str,
    repository: &dyn ParameterRepository,
    out: &mut W,
) -> Result<(), CliError> {
    let names = collect_names(repository, path)
        .await
        .map_err(CliError::repository("Cannot get parameters list"))?;

    debug!(path, count = names.len(), "Listed parameters");
    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

pub async fn put_parameter<W: Write>(
    name: &ParameterName,
    value: &str,
    parameter_type: ParameterType,
    repository: &dyn ParameterRepository,
    out: &mut W,
) -> Result<(), CliError> {
    let version = repository
        .put(name, value, parameter_type)
        .await
        .map_err(CliError::repository("Cannot save parameter"))?;

    info!(name = name.as_str(), version, "Parameter saved");
    writeln!(out, "Parameter Saved!\nName: {name}\nVersion: {version}")?;
    Ok(())
}

pub async fn delete_parameter<W: Write>(
    name: &ParameterName,
    silent: bool,
    repository: &dyn ParameterRepository,
    out: &mut W,
) -> Result<(), CliError> {
    debug!(name = name.as_str(), silent, "Deleting without confirmation");
    repository
        .delete(name)
        .await
        .map_err(CliError::repository("Cannot delete parameter"))?;

    info!(name = name.as_str(), "Parameter deleted");
    writeln!(out, "Parameter Deleted!\nName: {name}")?;
    Ok(())
}
