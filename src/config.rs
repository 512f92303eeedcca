use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::errors::PersonaError;
use crate::errors::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for daily rolling log files; console only when unset
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

/// Tunables for the analysis pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Raw text fields must be strictly longer than this (in characters) to be kept
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,
    /// Number of most recent units treated as "recent" for the sentiment trend
    #[serde(default = "default_recent_window")]
    pub recent_window: usize,
    /// Length of ranked lists (dominant traits, top interests, top communities)
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_max_topics")]
    pub max_topics: usize,
    #[serde(default = "default_max_clusters")]
    pub max_clusters: usize,
    /// Topic extraction is skipped below this many corpus units
    #[serde(default = "default_topic_min_units")]
    pub topic_min_units: usize,
}

pub(crate) fn default_min_text_length() -> usize {
    10
}

pub(crate) fn default_recent_window() -> usize {
    10
}

pub(crate) fn default_top_n() -> usize {
    5
}

pub(crate) fn default_max_topics() -> usize {
    5
}

pub(crate) fn default_max_clusters() -> usize {
    3
}

pub(crate) fn default_topic_min_units() -> usize {
    3
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_text_length: default_min_text_length(),
            recent_window: default_recent_window(),
            top_n: default_top_n(),
            max_topics: default_max_topics(),
            max_clusters: default_max_clusters(),
            topic_min_units: default_topic_min_units(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format for the CLI ("json" or "text")
    #[serde(default = "default_output_format")]
    pub format: String,
    /// Directory used when writing results with a relative file name
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_output_format() -> String {
    "json".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default config file path
    ///
    /// Tries `config.toml`, then `config.example.toml`, and falls back to
    /// built-in defaults when neither exists.
    pub fn load() -> Result<Self> {
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            tracing::warn!(
                "Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")
        } else {
            Ok(Self::default())
        }
    }

    /// Reject settings that would make the pipeline degenerate
    pub fn validate(&self) -> Result<()> {
        let analysis = &self.analysis;
        let checks = [
            ("analysis.recent_window", analysis.recent_window),
            ("analysis.top_n", analysis.top_n),
            ("analysis.max_topics", analysis.max_topics),
            ("analysis.max_clusters", analysis.max_clusters),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(PersonaError::ConfigError(format!(
                    "{name} must be greater than zero"
                )));
            }
        }

        match self.output.format.as_str() {
            "json" | "text" => Ok(()),
            other => Err(PersonaError::ConfigError(format!(
                "output.format must be \"json\" or \"text\", got \"{other}\""
            ))),
        }
    }

    /// Get the configured log level
    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    /// Get the log directory, if file logging is enabled
    pub fn log_dir(&self) -> Option<&Path> {
        self.logging.log_dir.as_deref().map(Path::new)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_analysis_values() {
        let config = AnalysisConfig::default();
        assert_eq!(config.min_text_length, 10);
        assert_eq!(config.recent_window, 10);
        assert_eq!(config.top_n, 5);
        assert_eq!(config.max_topics, 5);
        assert_eq!(config.max_clusters, 3);
        assert_eq!(config.topic_min_units, 3);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.log_dir.is_none());
        assert_eq!(config.analysis, AnalysisConfig::default());
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [analysis]
            top_n = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.analysis.top_n, 3);
        assert_eq!(config.analysis.recent_window, 10);
    }

    #[test]
    fn test_validate_rejects_zero_top_n() {
        let mut config = AppConfig::default();
        config.analysis.top_n = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, PersonaError::ConfigError(_)));
        assert!(err.to_string().contains("top_n"));
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let mut config = AppConfig::default();
        config.output.format = "pdf".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [logging]
            level = "debug"
            log_dir = "logs"

            [output]
            format = "text"
            "#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.log_dir(), Some(Path::new("logs")));
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = AppConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, PersonaError::Io(_)));
    }
}
