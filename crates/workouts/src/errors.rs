use thiserror::Error;

/// Errors raised while turning a sensor package into a workout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("wrong number of arguments for {code}: expected {expected}, got {actual}")]
    ArgumentCount {
        code: String,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised while loading the batch configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed package file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid output format: {0}")]
    InvalidOutput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_message_names_code() {
        let err = WorkoutError::UnknownWorkoutType("XYZ".into());
        assert!(err.to_string().contains("XYZ"));
    }

    #[test]
    fn test_argument_count_message() {
        let err = WorkoutError::ArgumentCount {
            code: "RUN".into(),
            expected: 3,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("wrong number of arguments"));
        assert!(msg.contains("expected 3, got 2"));
    }
}
