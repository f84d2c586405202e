//! Batch runner settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string(), "html".to_string(), "htm".to_string()]
}

fn default_output_extension() -> String {
    "txt".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Worker threads; `0` means one per available CPU.
    #[serde(default)]
    pub workers: usize,

    /// Input file extensions that are processed, matched case-insensitively.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Extension given to each output file.
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Create the output directory when it does not exist.
    #[serde(default)]
    pub create_output_dir: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            extensions: default_extensions(),
            output_extension: default_output_extension(),
            create_output_dir: false,
        }
    }
}

impl BatchConfig {
    /// Whether a file extension (without the dot) is eligible for processing.
    #[must_use]
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(extension))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::invalid(
                "batch.extensions",
                "at least one extension is required",
            ));
        }
        if let Some(bad) = self.extensions.iter().find(|ext| !is_bare_extension(ext)) {
            return Err(ConfigError::invalid(
                "batch.extensions",
                format!("'{bad}' must be a bare extension such as 'html'"),
            ));
        }
        if !is_bare_extension(&self.output_extension) {
            return Err(ConfigError::invalid(
                "batch.output_extension",
                format!(
                    "'{}' must be a bare extension such as 'txt'",
                    self.output_extension
                ),
            ));
        }
        Ok(())
    }
}

fn is_bare_extension(ext: &str) -> bool {
    !ext.is_empty() && !ext.contains(['.', '/', '\\']) && !ext.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = BatchConfig::default();
        assert_eq!(config.workers, 0);
        assert_eq!(config.extensions, vec!["txt", "html", "htm"]);
        assert_eq!(config.output_extension, "txt");
        assert!(!config.create_output_dir);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn extension_match_ignores_case() {
        let config = BatchConfig::default();
        assert!(config.accepts_extension("HTML"));
        assert!(config.accepts_extension("txt"));
        assert!(!config.accepts_extension("png"));
    }

    #[test]
    fn dotted_or_empty_extensions_are_rejected() {
        let config = BatchConfig {
            extensions: vec![".html".into()],
            ..BatchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = BatchConfig {
            extensions: Vec::new(),
            ..BatchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = BatchConfig {
            output_extension: String::new(),
            ..BatchConfig::default()
        };
        let err = config.validate().expect_err("empty output extension");
        assert!(err.to_string().contains("batch.output_extension"), "{err}");
    }
}
