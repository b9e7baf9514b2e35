//! Configuration for the forge platform connection.
use secrecy::SecretString;

use crate::{
    error::Result,
    forge::{github::Github, traits::Forge},
};

/// Default forge host.
pub const DEFAULT_GITHUB_HOST: &str = "github.com";
/// Default URL scheme for API requests.
pub const DEFAULT_SCHEME: &str = "https";

/// Remote repository connection configuration for authenticating and
/// interacting with the forge platform.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote forge host (e.g., "github.com").
    pub host: String,
    /// URL scheme (http or https).
    pub scheme: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_GITHUB_HOST.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            token: SecretString::from("".to_string()),
        }
    }
}

/// Supported forge platforms.
#[derive(Debug, Clone)]
pub enum Remote {
    Github(RemoteConfig),
}

impl Remote {
    /// Create forge client instance for the configured platform.
    pub fn get_forge(&self) -> Result<Box<dyn Forge>> {
        match self {
            Remote::Github(config) => {
                let forge = Github::new(config.clone())?;
                Ok(Box::new(forge))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_remote_config() {
        let config = RemoteConfig::default();
        assert_eq!(config.host, "github.com");
        assert_eq!(config.scheme, "https");
    }
}
