use std::str::FromStr;

use anyhow::{Result as AnyResult, anyhow};
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_ssm::{
    Client,
    error::DisplayErrorContext,
    primitives::DateTime as SsmDateTime,
    types::{Parameter as SsmParameter, ParameterType as SsmParameterType},
};
use aws_types::region::Region;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::{
    configs::ClientConfig,
    domain::*,
    storage::repository::{ParameterRepository, RepositoryError},
};

/// Parameter store backed by AWS Systems Manager.
#[derive(Clone)]
pub struct SsmStorage {
    client: Client,
    region: String,
}

impl SsmStorage {
    pub async fn new(config: &ClientConfig) -> AnyResult<Self> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        let shared_config = loader.load().await;

        // Resolve once here so bad credentials fail before the first request.
        let provider = shared_config.credentials_provider().ok_or_else(|| {
            anyhow!("no credentials provider configured for region {}", config.region)
        })?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| anyhow!("credentials could not be resolved: {}", error_context(&e)))?;

        Ok(Self::with_client(
            Client::new(&shared_config),
            config.region.clone(),
        ))
    }

    pub fn with_client(client: Client, region: impl Into<String>) -> Self {
        Self {
            client,
            region: region.into(),
        }
    }
}

impl std::fmt::Debug for SsmStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsmStorage")
            .field("region", &self.region)
            .finish()
    }
}

fn error_context<E: std::error::Error>(err: E) -> String {
    DisplayErrorContext(err).to_string()
}

fn timestamp_from_sdk(ts: &SsmDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts.secs(), ts.subsec_nanos())
}

fn parameter_from_sdk(parameter: &SsmParameter) -> Result<Parameter, RepositoryError> {
    let name = parameter
        .name()
        .ok_or_else(|| RepositoryError::QueryFailed("Parameter has no name".to_string()))?;
    let parameter_type = parameter
        .r#type()
        .map(|t| ParameterType::from_str(t.as_str()))
        .transpose()
        .map_err(RepositoryError::QueryFailed)?
        .unwrap_or_default();

    Ok(Parameter::new(
        ParameterName::new(name),
        parameter_type,
        parameter.value().unwrap_or_default(),
        parameter.version(),
    )
    .with_last_modified(parameter.last_modified_date().and_then(timestamp_from_sdk))
    .with_arn(parameter.arn().map(str::to_string)))
}

#[async_trait::async_trait]
impl ParameterRepository for SsmStorage {
    async fn get(&self, name: &ParameterName) -> Result<Parameter, RepositoryError> {
        debug!(name = name.as_str(), "Getting parameter from SSM");

        let response = self
            .client
            .get_parameter()
            .name(name.as_str())
            .with_decryption(true)
            .send()
            .await
            .map_err(|err| {
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_parameter_not_found())
                {
                    RepositoryError::ParameterNotFound(name.to_string())
                } else {
                    RepositoryError::QueryFailed(error_context(err))
                }
            })?;

        let parameter = response
            .parameter()
            .ok_or_else(|| RepositoryError::ParameterNotFound(name.to_string()))?;
        parameter_from_sdk(parameter)
    }

    async fn put(
        &self,
        name: &ParameterName,
        value: &str,
        parameter_type: ParameterType,
    ) -> Result<i64, RepositoryError> {
        debug!(
            name = name.as_str(),
            parameter_type = parameter_type.as_str(),
            "Putting parameter to SSM"
        );

        let response = self
            .client
            .put_parameter()
            .name(name.as_str())
            .value(value)
            .r#type(SsmParameterType::from(parameter_type.as_str()))
            .overwrite(true)
            .send()
            .await
            .map_err(|err| RepositoryError::QueryFailed(error_context(err)))?;

        Ok(response.version())
    }

    async fn delete(&self, name: &ParameterName) -> Result<(), RepositoryError> {
        debug!(name = name.as_str(), "Deleting parameter from SSM");

        self.client
            .delete_parameter()
            .name(name.as_str())
            .send()
            .await
            .map_err(|err| {
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_parameter_not_found())
                {
                    RepositoryError::ParameterNotFound(name.to_string())
                } else {
                    RepositoryError::QueryFailed(error_context(err))
                }
            })?;

        Ok(())
    }

    async fn list_page(
        &self,
        path: &str,
        next_token: Option<NextToken>,
    ) -> Result<ParameterPage, RepositoryError> {
        debug!(
            path,
            has_next_token = next_token.is_some(),
            "Listing parameters by path from SSM"
        );

        let response = self
            .client
            .get_parameters_by_path()
            .path(path)
            .with_decryption(true)
            .recursive(false)
            .set_next_token(next_token.map(NextToken::into_inner))
            .send()
            .await
            .map_err(|err| RepositoryError::QueryFailed(error_context(err)))?;

        let names = response
            .parameters()
            .iter()
            .filter_map(|p| p.name())
            .map(ParameterName::new)
            .collect();
        let next_token = response.next_token().map(NextToken::new);

        Ok(ParameterPage::new(names, next_token))
    }
}
