use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid lane '{0}': must be one of planned, doing, for_review, done")]
    InvalidLane(String),

    #[error("work package '{id}' not found in feature '{feature}'")]
    PackageNotFound { feature: String, id: String },

    #[error("no tasks directory found for feature '{0}'")]
    TasksDirMissing(String),

    #[error("git executable not found: install git or put it on PATH")]
    GitNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
