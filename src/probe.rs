//! Probing fastfetch for usable modules.
//!
//! A dry run of the display tool with `--format json` reports, per
//! module record, either a structured result or an error. Modules that
//! error out (category headers excepted) or resolve to an empty result
//! are pruned from the tree before the final config is rendered.

use std::io::Write;
use std::path::Path;
use std::process::Command;

use serde::Deserialize;
use serde_json::Value;

use crate::catalog::EXEMPT_KINDS;
use crate::document::ConfigDocument;
use crate::error::{ConfgenError, ConfgenResult};

/// One entry of the probe output, matched 1:1 to a module record.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeEntry {
    /// Module type as fastfetch reports it (display-name casing)
    #[serde(rename = "type")]
    pub kind: String,

    /// Present when the module failed to resolve
    #[serde(default)]
    pub error: Option<String>,

    /// Resolved value; an empty array means nothing to show
    #[serde(default)]
    pub result: Option<Value>,
}

impl ProbeEntry {
    /// The config-side kind for this entry.
    ///
    /// fastfetch reports `"OS"`/`"Battery"` while config records use
    /// lowercase type names.
    pub fn config_kind(&self) -> String {
        self.kind.to_ascii_lowercase()
    }

    fn has_empty_result(&self) -> bool {
        matches!(&self.result, Some(Value::Array(items)) if items.is_empty())
    }

    /// Whether this entry disqualifies its module kind.
    pub fn is_disqualified(&self) -> bool {
        let exempt = EXEMPT_KINDS.contains(&self.config_kind().as_str());
        (self.error.is_some() && !exempt) || self.has_empty_result()
    }
}

/// Run the display tool once against `document` and parse its output.
///
/// The document is written to a temporary config file which lives until
/// the probe returns. Launch failures, non-zero exits, and malformed
/// output are all hard errors; there is no retry.
pub fn run_probe(document: &ConfigDocument, binary: &Path) -> ConfgenResult<Vec<ProbeEntry>> {
    let mut config = tempfile::Builder::new()
        .prefix("confgen-probe-")
        .suffix(".jsonc")
        .tempfile()?;
    config.write_all(document.to_json_string()?.as_bytes())?;
    config.flush()?;

    let output = Command::new(binary)
        .arg("--config")
        .arg(config.path())
        .arg("--format")
        .arg("json")
        .output()
        .map_err(|source| ConfgenError::ProbeLaunch {
            binary: binary.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(ConfgenError::ProbeFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(serde_json::from_slice(&output.stdout)?)
}

/// Kinds to prune, one entry per distinct kind in response order.
pub fn disqualified_kinds(entries: &[ProbeEntry]) -> Vec<String> {
    let mut kinds: Vec<String> = Vec::new();
    for entry in entries {
        if !entry.is_disqualified() {
            continue;
        }
        let kind = entry.config_kind();
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    kinds
}
