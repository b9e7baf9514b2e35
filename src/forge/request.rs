use serde::{Deserialize, Serialize};

/// Mutable release fields sent on every update call.
///
/// This is a full overwrite, not a sparse patch: every field is populated
/// and sent, so omitted optional inputs resolve to their coerced defaults
/// and overwrite the remote's current values. Callers that want to preserve
/// an existing field must pass it through explicitly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseFields {
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
    pub target_commitish: String,
}

/// A release record as reported by the forge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReleaseRecord {
    pub id: u64,
    pub name: Option<String>,
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
    pub target_commitish: String,
    /// Public release page.
    pub html_url: String,
    /// Templated endpoint for attaching release assets.
    pub upload_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_release_record_ignoring_extra_fields() {
        let json = r#"{
            "id": 42,
            "tag_name": "v1.0.0",
            "name": "v1.0.0",
            "body": null,
            "draft": false,
            "prerelease": true,
            "target_commitish": "main",
            "html_url": "https://x/42",
            "upload_url": "https://x/42/upload",
            "assets": []
        }"#;

        let record: ReleaseRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, 42);
        assert!(record.body.is_none());
        assert!(record.prerelease);
        assert_eq!(record.upload_url, "https://x/42/upload");
    }

    #[test]
    fn serializes_all_fields_for_update() {
        let fields = ReleaseFields {
            name: "".into(),
            body: "".into(),
            draft: false,
            prerelease: false,
            target_commitish: "abc123".into(),
        };

        let value = serde_json::to_value(&fields).unwrap();

        // every mutable field must be present in the payload
        for key in
            ["name", "body", "draft", "prerelease", "target_commitish"]
        {
            assert!(value.get(key).is_some(), "missing field: {key}");
        }
    }
}
