//! Command execution for Releasedit.
//!
//! There is a single command: update an existing release. The workflow is a
//! linear pipeline with no internal state:
//!
//! 1. Normalize step inputs into a [`crate::inputs::ReleaseUpdateRequest`]
//! 2. Resolve the release id by tag on the forge
//! 3. Issue one full-field update call
//! 4. Emit the updated release identifiers as step outputs
//!
//! Any failure aborts the remainder of the pipeline; there are no retries.

/// Release update pipeline implementation.
pub mod update;
