//! quizrun configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Top-level quizrun configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// CSV file holding the questions.
    #[serde(default = "default_questions")]
    pub questions: PathBuf,
    /// Seconds allowed for the whole quiz.
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u64,
    /// Wait for the operator to press enter before arming the timer.
    #[serde(default = "default_true")]
    pub wait_for_start: bool,
}

fn default_questions() -> PathBuf {
    PathBuf::from("./problems.csv")
}
fn default_time_limit() -> u64 {
    30
}
fn default_true() -> bool {
    true
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions: default_questions(),
            time_limit_secs: default_time_limit(),
            wait_for_start: true,
        }
    }
}

impl QuizConfig {
    /// The quiz deadline, rejecting a zero limit.
    pub fn time_limit(&self) -> Result<Duration, QuizError> {
        if self.time_limit_secs == 0 {
            return Err(QuizError::InvalidTimeLimit(
                self.time_limit_secs.to_string(),
            ));
        }
        Ok(Duration::from_secs(self.time_limit_secs))
    }
}

/// Parse a time limit given on the command line or in the environment.
pub fn parse_time_limit(raw: &str) -> Result<u64, QuizError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(QuizError::InvalidTimeLimit(raw.to_string())),
    }
}

/// Load config from an explicit path, or from `quizrun.toml` if present.
///
/// Environment variable overrides: `QUIZRUN_TIME_LIMIT`, `QUIZRUN_QUESTIONS`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => return Err(QuizError::ConfigNotFound(p.to_path_buf()).into()),
        None => {
            let local = PathBuf::from("quizrun.toml");
            local.exists().then_some(local)
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

fn apply_env_overrides(
    config: &mut QuizConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), QuizError> {
    if let Some(raw) = lookup("QUIZRUN_TIME_LIMIT") {
        config.time_limit_secs = parse_time_limit(&raw)?;
    }
    if let Some(path) = lookup("QUIZRUN_QUESTIONS") {
        config.questions = PathBuf::from(path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.questions, PathBuf::from("./problems.csv"));
        assert_eq!(config.time_limit_secs, 30);
        assert!(config.wait_for_start);
        assert_eq!(config.time_limit().unwrap(), Duration::from_secs(30));
    }

    #[test]
    fn parse_partial_toml() {
        let config: QuizConfig = toml::from_str("time_limit_secs = 5\n").unwrap();
        assert_eq!(config.time_limit_secs, 5);
        assert_eq!(config.questions, PathBuf::from("./problems.csv"));
    }

    #[test]
    fn zero_time_limit_rejected() {
        let config = QuizConfig {
            time_limit_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.time_limit(),
            Err(QuizError::InvalidTimeLimit(_))
        ));
    }

    #[test]
    fn parse_time_limit_values() {
        assert_eq!(parse_time_limit("30").unwrap(), 30);
        assert_eq!(parse_time_limit(" 7 ").unwrap(), 7);
        assert!(parse_time_limit("0").is_err());
        assert!(parse_time_limit("-3").is_err());
        assert!(parse_time_limit("soon").is_err());
    }

    #[test]
    fn env_overrides_apply() {
        let env: HashMap<&str, &str> = [
            ("QUIZRUN_TIME_LIMIT", "12"),
            ("QUIZRUN_QUESTIONS", "capitals.csv"),
        ]
        .into_iter()
        .collect();
        let mut config = QuizConfig::default();
        apply_env_overrides(&mut config, |k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.time_limit_secs, 12);
        assert_eq!(config.questions, PathBuf::from("capitals.csv"));
    }

    #[test]
    fn bad_env_time_limit_is_error() {
        let mut config = QuizConfig::default();
        let result = apply_env_overrides(&mut config, |k| {
            (k == "QUIZRUN_TIME_LIMIT").then(|| "never".to_string())
        });
        assert!(matches!(result, Err(QuizError::InvalidTimeLimit(_))));
    }

    #[test]
    fn explicit_missing_config_is_error() {
        let err = load_config_from(Some(Path::new("no-such-quizrun.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_config_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizrun.toml");
        std::fs::write(
            &path,
            "questions = \"capitals.csv\"\ntime_limit_secs = 90\nwait_for_start = false\n",
        )
        .unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.questions, PathBuf::from("capitals.csv"));
        assert!(!config.wait_for_start);
    }
}
