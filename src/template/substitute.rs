//! Token substitution over the fixed template file list

use crate::config::ProjectConfig;
use crate::error::ScaffoldError;
use crate::system::System;
use crate::template::tokens::{build_token_map, files_to_process};
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::debug;

/// Rewrite placeholder tokens in the scaffolded project
///
/// Walks the fixed file list for the configured VCS host and replaces every
/// placeholder occurrence with its configuration-derived value. Files the
/// template does not ship are silently skipped. Returns the number of files
/// actually rewritten.
///
/// # Errors
///
/// Returns an error if the target directory does not exist or if any present
/// file cannot be read or written back; the target is then left in a
/// partially-transformed state for the user to inspect.
#[inline]
pub fn substitute_tokens(
    system: &dyn System,
    target_path: &Path,
    config: &ProjectConfig,
) -> Result<usize> {
    if !system.is_dir(target_path) {
        return Err(ScaffoldError::filesystem(format!(
            "Target directory does not exist: {}",
            target_path.display()
        ))
        .into());
    }

    let tokens = build_token_map(config);
    let mut files_rewritten = 0;

    for relative in files_to_process(config.vcs_host) {
        let file_path = target_path.join(relative);
        if !system.is_file(&file_path) {
            debug!("Skipping absent template file: {relative}");
            continue;
        }

        if rewrite_file(system, &file_path, &tokens)? {
            files_rewritten += 1;
        }
    }

    Ok(files_rewritten)
}

/// Apply the token table to a single file, writing back only on change
fn rewrite_file(
    system: &dyn System,
    file_path: &Path,
    tokens: &[(&'static str, String)],
) -> Result<bool> {
    let content = system
        .read_to_string(file_path)
        .with_context(|| format!("Failed to read template file: {}", file_path.display()))?;

    let mut rewritten = content.clone();
    for (token, value) in tokens {
        if rewritten.contains(token) {
            rewritten = rewritten.replace(token, value);
        }
    }

    if rewritten == content {
        return Ok(false);
    }

    system
        .write(file_path, rewritten.as_bytes())
        .with_context(|| format!("Failed to write template file: {}", file_path.display()))?;

    Ok(true)
}
