//! Release update command implementation.
use log::*;

use crate::{
    cli,
    context::RunnerContext,
    error::Result,
    forge::{request::ReleaseFields, traits::Forge},
    inputs::{self, ReleaseUpdateRequest},
    outputs::{self, ReleaseOutputs},
};

/// Execute the update command: normalize inputs, apply the update, and emit
/// step outputs.
pub async fn execute(args: &cli::Args) -> Result<()> {
    let context = RunnerContext::from_env();
    let raw = args.raw_inputs();
    let request = inputs::normalize(&raw, &context)?;

    let remote = args.get_remote(&request)?;
    let forge = remote.get_forge()?;

    let release_outputs = run(forge.as_ref(), &request).await?;

    outputs::emit(&release_outputs)?;

    info!(
        "updated release {} on {}/{}",
        release_outputs.id, request.owner, request.repo
    );

    Ok(())
}

/// Run the lookup-then-update pipeline against a forge.
pub async fn run(
    forge: &dyn Forge,
    request: &ReleaseUpdateRequest,
) -> Result<ReleaseOutputs> {
    let release = forge.get_release_by_tag(&request.tag).await?;

    info!("resolved release id: {}", release.id);

    // Full overwrite: unset optional inputs resolve to their coerced
    // defaults and replace the remote's current values.
    let fields = ReleaseFields {
        name: request.name.clone().unwrap_or_default(),
        body: request.body.clone().unwrap_or_default(),
        draft: request.draft,
        prerelease: request.prerelease,
        target_commitish: request.commitish.clone(),
    };

    let updated = forge.update_release(release.id, fields).await?;

    Ok(ReleaseOutputs {
        id: updated.id,
        html_url: updated.html_url,
        upload_url: updated.upload_url,
    })
}
