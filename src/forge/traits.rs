//! Traits related to remote git forges
use async_trait::async_trait;

use crate::{
    error::Result,
    forge::request::{ReleaseFields, ReleaseRecord},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Forge {
    /// Resolve the release associated with a tag.
    async fn get_release_by_tag(&self, tag: &str) -> Result<ReleaseRecord>;

    /// Overwrite the mutable fields of a release and return the refreshed
    /// record.
    async fn update_release(
        &self,
        id: u64,
        fields: ReleaseFields,
    ) -> Result<ReleaseRecord>;
}
