//! Join merge requests with their owning projects and compute summary counts.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::debug;

use crate::error::{MrError, Result};
use crate::models::{MergeRequest, MergeRequestFilter, Project};
use crate::traits::MergeRequestSource;

/// Merge requests grouped by project, plus the totals shown in the menu header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequestReport {
    /// Projects in fetch order, each carrying its merge requests
    pub projects: Vec<Project>,
    pub mr_count: usize,
    /// Projects with at least one merge request
    pub project_count: usize,
    /// Sum of `user_notes_count` over all merge requests
    pub comment_count: u64,
}

/// Fetch merge requests matching `filter`, fetch every project they reference
/// and group them together.
///
/// Any failed fetch aborts the whole aggregation.
pub fn aggregate<S: MergeRequestSource>(
    source: &S,
    filter: MergeRequestFilter,
) -> Result<MergeRequestReport> {
    let merge_requests = source.get_merge_requests(filter)?;

    let project_ids: BTreeSet<u64> = merge_requests.iter().map(|mr| mr.project_id).collect();
    debug!(
        merge_requests = merge_requests.len(),
        projects = project_ids.len(),
        "fetching projects for merge requests"
    );

    let projects = source.get_projects(&project_ids)?;
    group_merge_requests(merge_requests, projects)
}

/// Attach each merge request to the project it belongs to.
///
/// Merge requests keep their input order within a project. A merge request
/// whose project is not in `projects` is an error, never silently dropped.
pub fn group_merge_requests(
    merge_requests: Vec<MergeRequest>,
    mut projects: Vec<Project>,
) -> Result<MergeRequestReport> {
    let known: HashSet<u64> = projects.iter().map(|p| p.id).collect();
    let mr_count = merge_requests.len();

    let mut by_project: HashMap<u64, Vec<MergeRequest>> = HashMap::new();
    let mut comment_count = 0u64;

    for mr in merge_requests {
        if !known.contains(&mr.project_id) {
            return Err(MrError::OrphanMergeRequest {
                merge_request_id: mr.id,
                project_id: mr.project_id,
            });
        }
        comment_count += mr.user_notes_count;
        by_project.entry(mr.project_id).or_default().push(mr);
    }

    for project in &mut projects {
        project.merge_requests = by_project.remove(&project.id).unwrap_or_default();
    }

    let project_count = projects
        .iter()
        .filter(|p| !p.merge_requests.is_empty())
        .count();

    Ok(MergeRequestReport {
        projects,
        mr_count,
        project_count,
        comment_count,
    })
}
