use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-facing application configuration, persisted as quickopen.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub workspace: WorkspaceSettings,
}

impl AppConfig {
    /// Returns the config file path within the given workspace root.
    pub fn path(root: &Path) -> PathBuf {
        root.join("quickopen.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let scoring = &self.scoring;

        if self.search.result_limit == 0 {
            errors.push("search.result_limit must be at least 1".to_string());
        }
        for (name, value) in scoring.bonuses() {
            if value < 0 {
                errors.push(format!("scoring.{name} must not be negative"));
            }
        }
        for (name, value) in scoring.penalties() {
            if value > 0 {
                errors.push(format!("scoring.{name} must not be positive"));
            }
        }
        if self.workspace.settings_file.trim().is_empty() {
            errors.push("workspace.settings_file must not be empty".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let scoring = &self.scoring;
        let fallback = &defaults.scoring;

        let bonus = |value: i32, default: i32| if value < 0 { default } else { value };
        let penalty = |value: i32, default: i32| if value > 0 { default } else { value };

        Self {
            scoring: ScoringConfig {
                consecutive_match: bonus(scoring.consecutive_match, fallback.consecutive_match),
                prev_separator: bonus(scoring.prev_separator, fallback.prev_separator),
                camel_case: bonus(scoring.camel_case, fallback.camel_case),
                unmatched_letter: penalty(scoring.unmatched_letter, fallback.unmatched_letter),
                unmatched_leading_letter: penalty(
                    scoring.unmatched_leading_letter,
                    fallback.unmatched_leading_letter,
                ),
                max_unmatched_leading_letters: scoring.max_unmatched_leading_letters,
            },
            search: SearchSettings {
                result_limit: if self.search.result_limit == 0 {
                    defaults.search.result_limit
                } else {
                    self.search.result_limit
                },
                parallel_threshold: self.search.parallel_threshold,
            },
            workspace: WorkspaceSettings {
                settings_file: if self.workspace.settings_file.trim().is_empty() {
                    defaults.workspace.settings_file
                } else {
                    self.workspace.settings_file.clone()
                },
                ..self.workspace.clone()
            },
        }
    }
}

/// Score contributions used by the alignment search.
///
/// Bonuses are non-negative, penalties non-positive. A perfectly aligned
/// single-character match scores 0; every other score is relative to that.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Matched right after the previously matched character.
    pub consecutive_match: i32,
    /// Matched right after a separator (space, `_`, `.`, `-`).
    pub prev_separator: i32,
    /// Upper-case match right after a lower-case character.
    pub camel_case: i32,
    /// Applied once per candidate character the match never consumes.
    pub unmatched_letter: i32,
    /// Applied per character skipped before the first match.
    pub unmatched_leading_letter: i32,
    /// Cap on how many leading characters are penalised.
    pub max_unmatched_leading_letters: usize,
}

impl ScoringConfig {
    fn bonuses(&self) -> [(&'static str, i32); 3] {
        [
            ("consecutive_match", self.consecutive_match),
            ("prev_separator", self.prev_separator),
            ("camel_case", self.camel_case),
        ]
    }

    fn penalties(&self) -> [(&'static str, i32); 2] {
        [
            ("unmatched_letter", self.unmatched_letter),
            ("unmatched_leading_letter", self.unmatched_leading_letter),
        ]
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            consecutive_match: 5,
            prev_separator: 20,
            camel_case: 20,
            unmatched_letter: -1,
            unmatched_leading_letter: -3,
            max_unmatched_leading_letters: 3,
        }
    }
}

/// Ranking settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    /// Corpus size from which candidates are scored on the rayon pool.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            result_limit: default_result_limit(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_result_limit() -> usize {
    100
}

fn default_parallel_threshold() -> usize {
    2048
}

/// Candidate enumeration settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSettings {
    /// Workspace-relative file listing the sub-folders to scan, one per line.
    #[serde(default = "default_settings_file")]
    pub settings_file: String,
    #[serde(default)]
    pub include_hidden: bool,
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            settings_file: default_settings_file(),
            include_hidden: false,
            respect_gitignore: true,
        }
    }
}

fn default_settings_file() -> String {
    ".quickopen".to_string()
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
