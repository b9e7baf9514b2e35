//! Invoking-run context provided by the CI runner environment.
use std::env;

/// Repository and commit context of the run that invoked this step.
///
/// Fields are optional: outside a CI runner none of the variables are set,
/// and explicit `owner`/`repo`/`commitish` inputs make them unnecessary.
#[derive(Debug, Clone, Default)]
pub struct RunnerContext {
    /// Owner login parsed from GITHUB_REPOSITORY.
    pub owner: Option<String>,
    /// Repository name parsed from GITHUB_REPOSITORY.
    pub repo: Option<String>,
    /// Commit SHA that triggered the run (GITHUB_SHA).
    pub sha: Option<String>,
}

impl RunnerContext {
    /// Read context from the process environment.
    pub fn from_env() -> Self {
        let mut context = Self::default();

        if let Ok(repository) = env::var("GITHUB_REPOSITORY")
            && let Some((owner, repo)) = repository.split_once('/')
            && !owner.is_empty()
            && !repo.is_empty()
        {
            context.owner = Some(owner.to_string());
            context.repo = Some(repo.to_string());
        }

        if let Ok(sha) = env::var("GITHUB_SHA")
            && !sha.is_empty()
        {
            context.sha = Some(sha);
        }

        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_and_repo_from_environment() {
        temp_env::with_vars(
            [
                ("GITHUB_REPOSITORY", Some("some_owner/some_repo")),
                ("GITHUB_SHA", Some("abc123")),
            ],
            || {
                let context = RunnerContext::from_env();
                assert_eq!(context.owner.as_deref(), Some("some_owner"));
                assert_eq!(context.repo.as_deref(), Some("some_repo"));
                assert_eq!(context.sha.as_deref(), Some("abc123"));
            },
        );
    }

    #[test]
    fn ignores_malformed_repository_values() {
        temp_env::with_vars(
            [
                ("GITHUB_REPOSITORY", Some("not-a-repo-path")),
                ("GITHUB_SHA", None),
            ],
            || {
                let context = RunnerContext::from_env();
                assert!(context.owner.is_none());
                assert!(context.repo.is_none());
                assert!(context.sha.is_none());
            },
        );
    }

    #[test]
    fn empty_sha_is_treated_as_unset() {
        temp_env::with_vars(
            [
                ("GITHUB_REPOSITORY", None::<&str>),
                ("GITHUB_SHA", Some("")),
            ],
            || {
                let context = RunnerContext::from_env();
                assert!(context.sha.is_none());
            },
        );
    }
}
