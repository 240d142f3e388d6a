use thiserror::Error;

pub use crate::types::config::AppConfigError;
pub use crate::workspace::WorkspaceError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] AppConfigError),

    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
}
