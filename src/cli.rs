//! CLI argument parsing and forge configuration.
//!
//! Every step input is exposed as a flag and falls back to the INPUT_*
//! environment variable the CI runner sets, so the binary works both as a
//! workflow step and from a shell.
use clap::Parser;
use secrecy::SecretString;
use std::env;

use crate::{
    error::{ReleaseditError, Result},
    forge::config::{DEFAULT_GITHUB_HOST, Remote, RemoteConfig},
    inputs::{RawInputs, ReleaseUpdateRequest},
};

/// Global CLI arguments for the release update step.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "")]
    /// Tag of the release to update, with or without a refs/tags/ prefix.
    /// Falls back to INPUT_TAG_NAME env var.
    pub tag_name: String,

    #[arg(long, default_value = "")]
    /// Repository owner. Falls back to INPUT_OWNER env var, then to the
    /// invoking repository context.
    pub owner: String,

    #[arg(long, default_value = "")]
    /// Repository name. Falls back to INPUT_REPO env var, then to the
    /// invoking repository context.
    pub repo: String,

    #[arg(long, default_value = "")]
    /// New release title. Falls back to INPUT_RELEASE_NAME env var.
    pub release_name: String,

    #[arg(long, default_value = "")]
    /// New release body text. Falls back to INPUT_BODY env var.
    pub body: String,

    #[arg(long, default_value = "")]
    /// Path to a UTF-8 file whose content supersedes the body input.
    /// Falls back to INPUT_BODY_PATH env var.
    pub body_path: String,

    #[arg(long, default_value = "")]
    /// Mark the release as a draft; only the literal "true" counts.
    /// Falls back to INPUT_DRAFT env var.
    pub draft: String,

    #[arg(long, default_value = "")]
    /// Mark the release as a prerelease; only the literal "true" counts.
    /// Falls back to INPUT_PRERELEASE env var.
    pub prerelease: String,

    #[arg(long, default_value = "")]
    /// Target commitish for the release. Falls back to INPUT_COMMITISH env
    /// var, then to the invoking commit SHA.
    pub commitish: String,

    #[arg(long, default_value = "")]
    /// Continue with the literal body input when body_path is unreadable;
    /// only the literal "true" counts. Falls back to
    /// INPUT_CONTINUE_ON_BODY_READ_ERROR env var.
    pub continue_on_body_read_error: String,

    #[arg(long, default_value = "")]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, default_value = DEFAULT_GITHUB_HOST)]
    /// GitHub host, for Enterprise deployments.
    pub github_host: String,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Gather raw step inputs, applying INPUT_* env var fallbacks.
    pub fn raw_inputs(&self) -> RawInputs {
        RawInputs {
            tag_name: input_or_env(&self.tag_name, "INPUT_TAG_NAME"),
            owner: input_or_env(&self.owner, "INPUT_OWNER"),
            repo: input_or_env(&self.repo, "INPUT_REPO"),
            release_name: input_or_env(
                &self.release_name,
                "INPUT_RELEASE_NAME",
            ),
            body: input_or_env(&self.body, "INPUT_BODY"),
            body_path: input_or_env(&self.body_path, "INPUT_BODY_PATH"),
            draft: input_or_env(&self.draft, "INPUT_DRAFT"),
            prerelease: input_or_env(&self.prerelease, "INPUT_PRERELEASE"),
            commitish: input_or_env(&self.commitish, "INPUT_COMMITISH"),
            continue_on_body_read_error: input_or_env(
                &self.continue_on_body_read_error,
                "INPUT_CONTINUE_ON_BODY_READ_ERROR",
            ),
        }
    }

    /// Configure remote repository connection for a normalized request.
    pub fn get_remote(&self, request: &ReleaseUpdateRequest) -> Result<Remote> {
        let mut token = self.github_token.clone();

        if token.is_empty()
            && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
        {
            token = env_var_token;
        }

        if token.is_empty() {
            return Err(ReleaseditError::validation("must set github token"));
        }

        Ok(Remote::Github(RemoteConfig {
            host: self.github_host.clone(),
            owner: request.owner.clone(),
            repo: request.repo.clone(),
            token: SecretString::from(token),
            ..Default::default()
        }))
    }
}

/// Prefer the explicit argument value, then the named env var.
fn input_or_env(value: &str, env_key: &str) -> String {
    if !value.is_empty() {
        return value.to_string();
    }

    env::var(env_key).unwrap_or_default()
}
