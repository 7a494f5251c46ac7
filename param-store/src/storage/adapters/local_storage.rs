use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::domain::*;
use crate::storage::repository::*;

const DEFAULT_PAGE_SIZE: usize = 10;

/// In-memory parameter store.
///
/// Listings are served in name order, `page_size` entries at a time, with the
/// continuation token carrying the offset of the next entry.
#[derive(Clone)]
pub struct LocalStorage {
    parameters: Arc<RwLock<BTreeMap<ParameterName, Parameter>>>,
    page_size: usize,
}

impl LocalStorage {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            parameters: Arc::new(RwLock::new(BTreeMap::new())),
            page_size: page_size.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.parameters.read().map(|p| p.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_direct_child(path: &str, name: &ParameterName) -> bool {
        let prefix = if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{path}/")
        };
        name.as_str()
            .strip_prefix(&prefix)
            .is_some_and(|rest| !rest.is_empty() && !rest.contains('/'))
    }

    fn parse_offset(token: &NextToken) -> Result<usize, RepositoryError> {
        token.as_str().parse::<usize>().map_err(|_| {
            RepositoryError::ValidationError(format!("Invalid next token: {}", token.as_str()))
        })
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LocalStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStorage")
            .field("parameters", &self.len())
            .field("page_size", &self.page_size)
            .finish()
    }
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::QueryFailed("local parameter store lock poisoned".to_string())
}

#[async_trait::async_trait]
impl ParameterRepository for LocalStorage {
    async fn get(&self, name: &ParameterName) -> Result<Parameter, RepositoryError> {
        let parameters = self.parameters.read().map_err(poisoned)?;
        parameters
            .get(name)
            .cloned()
            .ok_or_else(|| RepositoryError::ParameterNotFound(name.to_string()))
    }

    async fn put(
        &self,
        name: &ParameterName,
        value: &str,
        parameter_type: ParameterType,
    ) -> Result<i64, RepositoryError> {
        if name.is_empty() {
            return Err(RepositoryError::ValidationError(
                "Parameter name must not be empty".to_string(),
            ));
        }
        if value.is_empty() {
            return Err(RepositoryError::ValidationError(format!(
                "Parameter '{name}' value must not be empty"
            )));
        }

        let mut parameters = self.parameters.write().map_err(poisoned)?;
        let version = parameters.get(name).map_or(1, |p| p.version() + 1);
        let parameter = Parameter::new(name.clone(), parameter_type, value, version)
            .with_last_modified(Some(Utc::now()));
        parameters.insert(name.clone(), parameter);
        Ok(version)
    }

    async fn delete(&self, name: &ParameterName) -> Result<(), RepositoryError> {
        let mut parameters = self.parameters.write().map_err(poisoned)?;
        if parameters.remove(name).is_none() {
            return Err(RepositoryError::ParameterNotFound(name.to_string()));
        }
        Ok(())
    }

    async fn list_page(
        &self,
        path: &str,
        next_token: Option<NextToken>,
    ) -> Result<ParameterPage, RepositoryError> {
        let offset = match &next_token {
            Some(token) => Self::parse_offset(token)?,
            None => 0,
        };

        let parameters = self.parameters.read().map_err(poisoned)?;
        let children: Vec<&ParameterName> = parameters
            .keys()
            .filter(|name| Self::is_direct_child(path, name))
            .collect();

        if offset > children.len() {
            return Err(RepositoryError::ValidationError(format!(
                "Invalid next token: {offset}"
            )));
        }

        let end = (offset + self.page_size).min(children.len());
        let names = children[offset..end].iter().map(|n| (*n).clone()).collect();
        let next_token = (end < children.len()).then(|| NextToken::new(end.to_string()));

        Ok(ParameterPage::new(names, next_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(n: &str) -> ParameterName {
        ParameterName::new(n)
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let storage = LocalStorage::new();
        let version = storage
            .put(&name("/app/key"), "value", ParameterType::SecureString)
            .await
            .unwrap();
        assert_eq!(version, 1);

        let parameter = storage.get(&name("/app/key")).await.unwrap();
        assert_eq!(parameter.value(), "value");
        assert_eq!(parameter.version(), 1);
        assert_eq!(parameter.parameter_type(), ParameterType::SecureString);
        assert!(parameter.last_modified().is_some());
    }

    #[tokio::test]
    async fn test_put_overwrites_and_bumps_version() {
        let storage = LocalStorage::new();
        storage
            .put(&name("/app/key"), "one", ParameterType::String)
            .await
            .unwrap();
        let version = storage
            .put(&name("/app/key"), "two", ParameterType::String)
            .await
            .unwrap();
        assert_eq!(version, 2);
        assert_eq!(storage.get(&name("/app/key")).await.unwrap().value(), "two");
    }

    #[tokio::test]
    async fn test_put_rejects_empty_value() {
        let storage = LocalStorage::new();
        let result = storage
            .put(&name("/app/key"), "", ParameterType::String)
            .await;
        assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let storage = LocalStorage::new();
        let result = storage.delete(&name("/nope")).await;
        assert_eq!(
            result,
            Err(RepositoryError::ParameterNotFound("/nope".to_string()))
        );
    }

    #[tokio::test]
    async fn test_list_page_is_not_recursive() {
        let storage = LocalStorage::new();
        for key in ["/app/a", "/app/b", "/app/nested/c", "/other/d", "/application"] {
            storage.put(&name(key), "v", ParameterType::String).await.unwrap();
        }

        let page = storage.list_page("/app", None).await.unwrap();
        assert_eq!(page.names, vec![name("/app/a"), name("/app/b")]);
        assert!(page.is_last());

        let page = storage.list_page("/app/", None).await.unwrap();
        assert_eq!(page.names.len(), 2);
    }

    #[tokio::test]
    async fn test_list_page_hands_out_tokens() {
        let storage = LocalStorage::with_page_size(2);
        for key in ["/p/1", "/p/2", "/p/3"] {
            storage.put(&name(key), "v", ParameterType::String).await.unwrap();
        }

        let first = storage.list_page("/p", None).await.unwrap();
        assert_eq!(first.names.len(), 2);
        let token = first.next_token.clone().unwrap();

        let second = storage.list_page("/p", Some(token)).await.unwrap();
        assert_eq!(second.names, vec![name("/p/3")]);
        assert!(second.is_last());
        assert_eq!(first.next_token, Some(NextToken::new("2")));
    }

    #[tokio::test]
    async fn test_list_page_rejects_garbage_token() {
        let storage = LocalStorage::new();
        let result = storage
            .list_page("/p", Some(NextToken::new("not-a-token")))
            .await;
        assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
    }
}
