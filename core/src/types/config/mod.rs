mod app;

pub use app::{AppConfig, AppConfigError, ScoringConfig, SearchSettings, WorkspaceSettings};
