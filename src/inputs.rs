//! Input normalization for the release update workflow.
//!
//! Raw step inputs arrive as flat strings from the CI runner. This module
//! strips workflow tag refs, coerces booleans, applies context defaults, and
//! resolves the release body from an optional file path.
use log::*;
use std::fs;

use crate::{
    context::RunnerContext,
    error::{ReleaseditError, Result},
};

/// Prefix the runner prepends to tag refs in workflow events.
pub const TAG_REF_PREFIX: &str = "refs/tags/";

/// Raw string inputs as supplied by the invoking environment.
#[derive(Debug, Clone, Default)]
pub struct RawInputs {
    pub tag_name: String,
    pub owner: String,
    pub repo: String,
    pub release_name: String,
    pub body: String,
    pub body_path: String,
    pub draft: String,
    pub prerelease: String,
    pub commitish: String,
    pub continue_on_body_read_error: String,
}

/// Normalized intent to apply to a remote release.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseUpdateRequest {
    pub owner: String,
    pub repo: String,
    pub tag: String,
    pub name: Option<String>,
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
    pub commitish: String,
}

/// Coerce a raw boolean input. Only the exact literal "true" is true.
pub fn coerce_bool(raw: &str) -> bool {
    raw == "true"
}

/// Strip a leading `refs/tags/` from a tag or release-name input.
fn strip_tag_ref(raw: &str) -> &str {
    raw.strip_prefix(TAG_REF_PREFIX).unwrap_or(raw)
}

fn optional(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Produce a normalized request from raw inputs and runner context.
pub fn normalize(
    raw: &RawInputs,
    context: &RunnerContext,
) -> Result<ReleaseUpdateRequest> {
    let tag = strip_tag_ref(raw.tag_name.trim());

    if tag.is_empty() {
        return Err(ReleaseditError::validation(
            "tag_name input is required",
        ));
    }

    let owner = if raw.owner.is_empty() {
        context.owner.clone().ok_or(ReleaseditError::validation(
            "owner input not set and GITHUB_REPOSITORY is unavailable",
        ))?
    } else {
        raw.owner.clone()
    };

    let repo = if raw.repo.is_empty() {
        context.repo.clone().ok_or(ReleaseditError::validation(
            "repo input not set and GITHUB_REPOSITORY is unavailable",
        ))?
    } else {
        raw.repo.clone()
    };

    let commitish = if raw.commitish.is_empty() {
        context.sha.clone().unwrap_or_default()
    } else {
        raw.commitish.clone()
    };

    let body = resolve_body(raw)?;

    Ok(ReleaseUpdateRequest {
        owner,
        repo,
        tag: tag.to_string(),
        name: optional(strip_tag_ref(&raw.release_name)),
        body,
        draft: coerce_bool(&raw.draft),
        prerelease: coerce_bool(&raw.prerelease),
        commitish,
    })
}

/// Resolve the effective release body. File content at `body_path` takes
/// precedence over the literal `body` input.
fn resolve_body(raw: &RawInputs) -> Result<Option<String>> {
    if raw.body_path.is_empty() {
        return Ok(optional(&raw.body));
    }

    match fs::read_to_string(&raw.body_path) {
        Ok(content) => Ok(Some(content)),
        Err(err) => {
            if coerce_bool(&raw.continue_on_body_read_error) {
                error!(
                    "failed to read body file {}: {err}: continuing with literal body input",
                    raw.body_path
                );
                Ok(optional(&raw.body))
            } else {
                Err(ReleaseditError::file_read(raw.body_path.clone(), err))
            }
        }
    }
}
