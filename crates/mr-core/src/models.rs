use serde::{Deserialize, Serialize};
use std::fmt;

/// Author reference on a merge request (only the username is kept)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRequestAuthor {
    pub username: String,
}

/// Minimal merge request projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRequest {
    pub id: u64,
    pub project_id: u64,
    pub title: String,
    pub web_url: String,
    pub author: MergeRequestAuthor,
    pub user_notes_count: u64,
}

/// Minimal project projection
///
/// `merge_requests` stays empty until the aggregator attaches the project's
/// merge requests to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub name_with_namespace: String,
    pub web_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub merge_requests: Vec<MergeRequest>,
}

/// The authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub name: String,
}

/// Merge request `state` filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeRequestState {
    #[default]
    Opened,
    Closed,
    Locked,
    Merged,
    All,
}

impl MergeRequestState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeRequestState::Opened => "opened",
            MergeRequestState::Closed => "closed",
            MergeRequestState::Locked => "locked",
            MergeRequestState::Merged => "merged",
            MergeRequestState::All => "all",
        }
    }
}

impl fmt::Display for MergeRequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Merge request `scope` filter, relative to the authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeRequestScope {
    #[default]
    AssignedToMe,
    CreatedByMe,
    All,
}

impl MergeRequestScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeRequestScope::AssignedToMe => "assigned_to_me",
            MergeRequestScope::CreatedByMe => "created_by_me",
            MergeRequestScope::All => "all",
        }
    }
}

impl fmt::Display for MergeRequestScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query filter for listing merge requests.
///
/// Defaults to open merge requests assigned to the authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeRequestFilter {
    pub state: MergeRequestState,
    pub scope: MergeRequestScope,
}

impl MergeRequestFilter {
    pub fn new(state: MergeRequestState, scope: MergeRequestScope) -> Self {
        Self { state, scope }
    }

    /// Open merge requests across every project visible to the user
    pub fn all_open() -> Self {
        Self::new(MergeRequestState::Opened, MergeRequestScope::All)
    }
}
