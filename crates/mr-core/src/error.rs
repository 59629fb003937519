use thiserror::Error;

/// Errors raised while fetching and joining merge request data
#[derive(Error, Debug)]
pub enum MrError {
    #[error("Authentication failed")]
    Unauthorized,

    #[error("Project not found: {0}")]
    ProjectNotFound(u64),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),

    /// A merge request points at a project that was never fetched.
    #[error("Merge request {merge_request_id} references unknown project {project_id}")]
    OrphanMergeRequest {
        merge_request_id: u64,
        project_id: u64,
    },
}

pub type Result<T> = std::result::Result<T, MrError>;
