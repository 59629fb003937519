//! Implementation of the mr-core source trait for GitLabClient

use mr_core::{MergeRequest, MergeRequestFilter, MergeRequestSource, MrError, Project, Result, User};

use crate::client::GitLabClient;
use crate::convert::{gitlab_merge_request_to_core, gitlab_project_to_core, gitlab_user_to_core};

impl MergeRequestSource for GitLabClient {
    fn get_current_user(&self) -> Result<User> {
        self.get_current_user()
            .map(gitlab_user_to_core)
            .map_err(MrError::from)
    }

    fn get_project(&self, id: u64) -> Result<Project> {
        self.get_project(id)
            .map(gitlab_project_to_core)
            .map_err(MrError::from)
    }

    fn get_merge_requests(&self, filter: MergeRequestFilter) -> Result<Vec<MergeRequest>> {
        self.list_merge_requests(filter)
            .map(|mrs| mrs.into_iter().map(gitlab_merge_request_to_core).collect())
            .map_err(MrError::from)
    }
}
