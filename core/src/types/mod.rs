pub(crate) mod candidate;
pub use candidate::Candidate;

pub(crate) mod config;
pub use config::{
    AppConfig, AppConfigError, ScoringConfig, SearchSettings, WorkspaceSettings,
};
