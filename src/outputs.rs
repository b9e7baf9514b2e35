//! Step output reporting for downstream automation.
//!
//! Outputs are appended as `key=value` lines to the file named by the
//! GITHUB_OUTPUT environment variable. When the variable is unset the legacy
//! `::set-output` workflow command is written to stdout instead.
use std::{env, fs::OpenOptions, io::Write};

use crate::error::Result;

/// Identifiers of the updated release, passed through from the forge.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutputs {
    pub id: u64,
    pub html_url: String,
    pub upload_url: String,
}

impl ReleaseOutputs {
    fn pairs(&self) -> [(&'static str, String); 3] {
        [
            ("id", self.id.to_string()),
            ("html_url", self.html_url.clone()),
            ("upload_url", self.upload_url.clone()),
        ]
    }
}

/// Emit the three step outputs for downstream consumption.
pub fn emit(outputs: &ReleaseOutputs) -> Result<()> {
    if let Ok(path) = env::var("GITHUB_OUTPUT")
        && !path.is_empty()
    {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;

        for (key, value) in outputs.pairs() {
            writeln!(file, "{key}={value}")?;
        }

        return Ok(());
    }

    for (key, value) in outputs.pairs() {
        println!("::set-output name={key}::{value}");
    }

    Ok(())
}
