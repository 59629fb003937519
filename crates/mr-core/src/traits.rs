use crate::error::Result;
use crate::models::*;

/// Read-only source of merge request data
///
/// The GitLab backend implements this against the REST API; tests substitute
/// in-memory sources.
pub trait MergeRequestSource {
    /// Get the authenticated user
    fn get_current_user(&self) -> Result<User>;

    /// Get a single project by numeric ID
    fn get_project(&self, id: u64) -> Result<Project>;

    /// List merge requests matching the given state and scope
    fn get_merge_requests(&self, filter: MergeRequestFilter) -> Result<Vec<MergeRequest>>;

    /// Fetch several projects, one request per ID, in iteration order.
    ///
    /// Stops at the first failed fetch.
    fn get_projects<'a, I>(&self, ids: I) -> Result<Vec<Project>>
    where
        I: IntoIterator<Item = &'a u64>,
        Self: Sized,
    {
        ids.into_iter().map(|id| self.get_project(*id)).collect()
    }
}

impl<T: MergeRequestSource + ?Sized> MergeRequestSource for &T {
    fn get_current_user(&self) -> Result<User> {
        (**self).get_current_user()
    }

    fn get_project(&self, id: u64) -> Result<Project> {
        (**self).get_project(id)
    }

    fn get_merge_requests(&self, filter: MergeRequestFilter) -> Result<Vec<MergeRequest>> {
        (**self).get_merge_requests(filter)
    }
}
