//! Projections from raw GitLab payloads to the minimal mr-core models

use mr_core::{MergeRequest, MergeRequestAuthor, Project, User};

use crate::models::*;

/// Keep only id, project, title, link, author username and note count.
pub fn gitlab_merge_request_to_core(mr: GitLabMergeRequest) -> MergeRequest {
    MergeRequest {
        id: mr.id,
        project_id: mr.project_id,
        title: mr.title,
        web_url: mr.web_url,
        author: MergeRequestAuthor {
            username: mr.author.username,
        },
        user_notes_count: mr.user_notes_count,
    }
}

pub fn gitlab_project_to_core(project: GitLabProject) -> Project {
    Project {
        id: project.id,
        name: project.name,
        name_with_namespace: project.name_with_namespace,
        web_url: project.web_url,
        merge_requests: Vec::new(),
    }
}

pub fn gitlab_user_to_core(user: GitLabUser) -> User {
    User {
        id: user.id,
        username: user.username,
        name: user.name,
    }
}
