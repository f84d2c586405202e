//! Helpers shared by the command handlers.

use sieve_config::{CanonConfig, SieveConfig};
use sieve_parser::CanonOptions;

use crate::cli::CanonFlags;

/// Overlay canonicalization flags on the `[canon]` section. Flags that were
/// not given leave the configured value in place.
pub fn apply_canon_flags(config: &mut CanonConfig, flags: &CanonFlags) {
    if let Some(mode) = flags.mode {
        config.mode = mode;
    }
    if let Some(policy) = flags.empty_policy {
        config.empty_policy = policy;
    }
    if let Some(tags) = &flags.strip_tags {
        config.strip_tags = Some(tags.clone());
    }
}

/// Validate the effective configuration after flags were applied.
pub fn validated(config: SieveConfig) -> anyhow::Result<SieveConfig> {
    config
        .validate()
        .map_err(|error| anyhow::anyhow!("invalid settings: {error}"))?;
    Ok(config)
}

#[must_use]
pub fn canon_options(config: &CanonConfig) -> CanonOptions {
    let options = CanonOptions::new(config.mode).with_empty_policy(config.empty_policy);
    match &config.strip_tags {
        Some(tags) => options.with_strip_tags(tags.clone()),
        None => options,
    }
}
