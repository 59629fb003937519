use mr_core::MrError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitLabError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("Project not found: {0}")]
    ProjectNotFound(u64),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitLabError>;

impl From<GitLabError> for MrError {
    fn from(err: GitLabError) -> Self {
        match err {
            GitLabError::Http(ureq::Error::Json(e)) => MrError::Parse(e.to_string()),
            GitLabError::Http(ureq::Error::Io(e)) => MrError::Io(e.to_string()),
            GitLabError::Http(e) => MrError::Http(e.to_string()),
            GitLabError::ProjectNotFound(id) => MrError::ProjectNotFound(id),
            GitLabError::Unauthorized => MrError::Unauthorized,
            GitLabError::Api { status, message } => MrError::Api { status, message },
        }
    }
}
