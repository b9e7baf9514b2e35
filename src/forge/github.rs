//! Implements the Forge trait for GitHub
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use reqwest::StatusCode;

use crate::{
    error::{ReleaseditError, Result},
    forge::{
        config::RemoteConfig,
        request::{ReleaseFields, ReleaseRecord},
        traits::Forge,
    },
};

/// GitHub forge implementation using Octocrab for release lookup and update.
pub struct Github {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
}

/// Build the REST API base URI for a host, e.g. "https://api.github.com".
pub fn api_base_uri(config: &RemoteConfig) -> String {
    format!("{}://api.{}", config.scheme, config.host)
}

impl Github {
    /// Create GitHub client with personal access token authentication and
    /// API base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = api_base_uri(&config);
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri.clone())?;
        let instance = builder.build()?;

        Ok(Self {
            config,
            base_uri,
            instance,
        })
    }
}

#[async_trait]
impl Forge for Github {
    async fn get_release_by_tag(&self, tag: &str) -> Result<ReleaseRecord> {
        let endpoint = format!(
            "{}/repos/{}/{}/releases/tags/{}",
            self.base_uri, self.config.owner, self.config.repo, tag
        );

        debug!("looking up release for tag: {tag}");

        let result: std::result::Result<ReleaseRecord, octocrab::Error> =
            self.instance.get(&endpoint, None::<&()>).await;

        match result {
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                Err(ReleaseditError::NotFound(tag.to_string()))
            }
            Err(err) => Err(err.into()),
            Ok(release) => Ok(release),
        }
    }

    async fn update_release(
        &self,
        id: u64,
        fields: ReleaseFields,
    ) -> Result<ReleaseRecord> {
        let endpoint = format!(
            "{}/repos/{}/{}/releases/{}",
            self.base_uri, self.config.owner, self.config.repo, id
        );

        let body = serde_json::json!(fields);

        info!("updating release: {id}");

        let release: ReleaseRecord =
            self.instance.patch(endpoint, Some(&body)).await?;

        Ok(release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_api_base_uri_from_host_and_scheme() {
        let config = RemoteConfig::default();
        assert_eq!(api_base_uri(&config), "https://api.github.com");

        let config = RemoteConfig {
            host: "github.example.com".into(),
            ..Default::default()
        };
        assert_eq!(api_base_uri(&config), "https://api.github.example.com");
    }

    #[tokio::test]
    async fn creates_client_for_default_config() {
        let result = Github::new(RemoteConfig::default());
        assert!(result.is_ok());
    }
}
