use std::sync::Arc;

use tracing::debug;

use crate::{
    configs::ClientConfig,
    storage::{
        adapters::ssm_storage::SsmStorage,
        repository::{ParameterRepository, RepositoryError},
    },
};

/// Establishes a connection to a parameter store for one invocation.
#[async_trait::async_trait]
pub trait RepositoryFactory: Send + Sync {
    async fn create(
        &self,
        config: &ClientConfig,
    ) -> Result<Arc<dyn ParameterRepository>, RepositoryError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SsmStorageFactory;

#[async_trait::async_trait]
impl RepositoryFactory for SsmStorageFactory {
    async fn create(
        &self,
        config: &ClientConfig,
    ) -> Result<Arc<dyn ParameterRepository>, RepositoryError> {
        debug!(
            region = config.region.as_str(),
            profile = config.profile.as_deref(),
            endpoint_url = config.endpoint_url.as_deref(),
            "Creating SSM client"
        );
        let storage = SsmStorage::new(config)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
        Ok(Arc::new(storage))
    }
}
