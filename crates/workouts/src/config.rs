//! Configuration for batch runs.

use std::path::Path;
use std::str::FromStr;

use crate::batch::{SensorPackage, default_packages};
use crate::errors::ConfigError;
use crate::report::WorkoutReport;

/// Env var holding the path to a JSON package file.
pub const PACKAGES_VAR: &str = "WORKOUTS_PACKAGES";
/// Env var selecting the output format.
pub const OUTPUT_VAR: &str = "WORKOUTS_OUTPUT";

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The fixed report line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    /// Formats one report as a stdout line.
    pub fn render(self, report: &WorkoutReport) -> serde_json::Result<String> {
        match self {
            Self::Text => Ok(report.to_string()),
            Self::Json => report.to_json(),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidOutput(s.to_string())),
        }
    }
}

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Packages to process, in order.
    pub packages: Vec<SensorPackage>,

    /// Output format for the reports.
    pub output: OutputFormat,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            packages: default_packages(),
            output: OutputFormat::default(),
        }
    }
}

impl BatchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads configuration values through `get`, so tests need not touch
    /// the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let packages = match get(PACKAGES_VAR) {
            Some(path) => load_packages(Path::new(&path))?,
            None => default_packages(),
        };
        let output = match get(OUTPUT_VAR) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Self { packages, output })
    }
}

/// Loads a JSON list of packages from `path`.
pub fn load_packages(path: &Path) -> Result<Vec<SensorPackage>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let packages: Vec<SensorPackage> = serde_json::from_str(&raw)?;
    tracing::debug!(path = %path.display(), count = packages.len(), "Loaded sensor packages");
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_unset() {
        let config = BatchConfig::from_env_with(|_| None).unwrap();
        assert_eq!(config.packages, default_packages());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_reads_package_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"workout_type": "RUN", "data": [15000, 1, 75]}}]"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let get = |k: &str| match k {
            PACKAGES_VAR => Some(path.clone()),
            OUTPUT_VAR => Some("JSON".into()),
            _ => None,
        };
        let config = BatchConfig::from_env_with(get).unwrap();
        assert_eq!(
            config.packages,
            vec![SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0])]
        );
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_missing_package_file() {
        let get = |k: &str| match k {
            PACKAGES_VAR => Some("/nonexistent/packages.json".into()),
            _ => None,
        };
        assert!(matches!(
            BatchConfig::from_env_with(get),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_malformed_package_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            load_packages(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_output_format() {
        let get = |k: &str| match k {
            OUTPUT_VAR => Some("xml".into()),
            _ => None,
        };
        assert!(matches!(
            BatchConfig::from_env_with(get),
            Err(ConfigError::InvalidOutput(s)) if s == "xml"
        ));
    }
}
