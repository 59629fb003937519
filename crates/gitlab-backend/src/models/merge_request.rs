use serde::{Deserialize, Serialize};

use super::GitLabUser;

/// GitLab merge request as returned by `GET /merge_requests`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitLabMergeRequest {
    pub id: u64,
    pub iid: u64,
    pub project_id: u64,
    pub title: String,
    pub description: Option<String>,
    pub state: String,
    pub author: GitLabUser,
    #[serde(default)]
    pub user_notes_count: u64,
    pub source_branch: Option<String>,
    pub target_branch: Option<String>,
    #[serde(default)]
    pub draft: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub web_url: String,
}
