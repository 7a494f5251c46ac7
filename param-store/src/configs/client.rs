use super::environment::optional_env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub region: String,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
}

impl ClientConfig {
    /// Flags win over `AWS_PROFILE` / `AWS_ENDPOINT`.
    pub fn resolve(
        region: impl Into<String>,
        profile: Option<String>,
        endpoint_url: Option<String>,
    ) -> Self {
        Self {
            region: region.into(),
            profile: profile.or_else(|| optional_env("AWS_PROFILE")),
            endpoint_url: endpoint_url.or_else(|| optional_env("AWS_ENDPOINT")),
        }
    }
}
