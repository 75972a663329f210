//! Target and feature column selection.
//!
//! The target defaults to the last column of the file and the features to
//! every other column. Explicit selections are validated against the
//! header but otherwise passed through untouched; in particular an
//! explicit feature list is not deduplicated against the target.

use anyhow::{Result, bail};

/// Resolve the target column and feature columns for a dataset header.
///
/// Selection problems are configuration errors and are reported before any
/// statistics are computed.
pub fn resolve_selection(
    headers: &[String],
    target: Option<&str>,
    features: Option<&[String]>,
) -> Result<(String, Vec<String>)> {
    let target = match target {
        Some(name) => {
            if name.is_empty() {
                bail!("no target column selected");
            }
            if !headers.iter().any(|header| header == name) {
                bail!("target column '{name}' not found in the csv header");
            }
            name.to_string()
        }
        None => match headers.last() {
            Some(last) if !last.is_empty() => last.clone(),
            _ => bail!("no target column selected"),
        },
    };

    let features = match features {
        Some(list) => {
            for name in list {
                if !headers.iter().any(|header| header == name) {
                    bail!("feature column '{name}' not found in the csv header");
                }
            }
            list.to_vec()
        }
        None => headers
            .iter()
            .filter(|header| **header != target)
            .cloned()
            .collect(),
    };

    Ok((target, features))
}
