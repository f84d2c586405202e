//! Canonicalisation settings.

use serde::{Deserialize, Serialize};
use sieve_core::{EmptyPolicy, Mode};

use crate::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CanonConfig {
    /// `flat`, `structured` or `text`.
    #[serde(default)]
    pub mode: Mode,

    /// What structured mode does with empty values: `omit` or `placeholder`.
    #[serde(default)]
    pub empty_policy: EmptyPolicy,

    /// Elements removed with their subtrees before extraction. Unset means the
    /// mode's own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_tags: Option<Vec<String>>,
}

impl CanonConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let Some(tags) = &self.strip_tags else {
            return Ok(());
        };
        if let Some(bad) = tags.iter().find(|tag| !is_tag_name(tag)) {
            return Err(ConfigError::invalid(
                "canon.strip_tags",
                format!("'{bad}' is not an element name"),
            ));
        }
        Ok(())
    }
}

fn is_tag_name(tag: &str) -> bool {
    !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
