use serde::{Deserialize, Serialize};

/// GitLab user reference (used for the current user and MR authors)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitLabUser {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub name: String,
    pub state: Option<String>,
    pub web_url: Option<String>,
}
