use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Unknown project: {0}")]
    UnknownProject(String),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[cfg(feature = "web")]
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
