use mr_core::MergeRequestFilter;
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use ureq::Agent;

use crate::error::{GitLabError, Result};
use crate::models::*;

/// GitLab REST API client
pub struct GitLabClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl GitLabClient {
    /// Create a new GitLab client.
    ///
    /// `base_url` should include the API version path, e.g. `https://gitlab.com/api/v4`.
    pub fn new(base_url: &str, token: &str) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Create a client for a bare hostname such as `gitlab.example.com`,
    /// talking HTTPS to its v4 API.
    pub fn for_host(host: &str, token: &str) -> Self {
        Self::new(&api_base_url(host), token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        let message = error_message(status, body);

        if status == 401 {
            Err(GitLabError::Unauthorized)
        } else {
            Err(GitLabError::Api { status, message })
        }
    }

    /// GET `path` (relative to the API root) and decode the JSON body
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let result = self
            .agent
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .header("Accept", "application/json")
            .call()
            .map_err(GitLabError::from)
            .and_then(|response| self.check_response(response))
            .and_then(|mut response| {
                response
                    .body_mut()
                    .read_json::<T>()
                    .map_err(GitLabError::from)
            });

        if let Err(e) = &result {
            error!(%path, error = %e, "GitLab API request failed");
        }
        result
    }

    // ==================== User Operations ====================

    /// Get the authenticated user
    pub fn get_current_user(&self) -> Result<GitLabUser> {
        self.get_json("/user")
    }

    // ==================== Project Operations ====================

    /// Get a project by numeric ID
    pub fn get_project(&self, id: u64) -> Result<GitLabProject> {
        match self.get_json(&format!("/projects/{}", id)) {
            Err(GitLabError::Api { status: 404, .. }) => Err(GitLabError::ProjectNotFound(id)),
            other => other,
        }
    }

    // ==================== Merge Request Operations ====================

    /// List merge requests visible to the authenticated user
    pub fn list_merge_requests(
        &self,
        filter: MergeRequestFilter,
    ) -> Result<Vec<GitLabMergeRequest>> {
        self.get_json(&format!(
            "/merge_requests?state={}&scope={}",
            urlencoding::encode(filter.state.as_str()),
            urlencoding::encode(filter.scope.as_str())
        ))
    }
}

/// API root for a bare GitLab hostname
pub fn api_base_url(host: &str) -> String {
    format!("https://{}/api/v4", host.trim_end_matches('/'))
}

/// Pick the most useful message out of a GitLab error body
fn error_message(status: u16, body: String) -> String {
    if let Ok(error_value) = serde_json::from_str::<serde_json::Value>(&body) {
        // GitLab can return {"message": "..."} or {"error": "..."}
        for key in ["message", "error", "error_description"] {
            if let Some(msg) = error_value.get(key).and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }
    }

    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_url() {
        assert_eq!(
            api_base_url("gitlab.example.com"),
            "https://gitlab.example.com/api/v4"
        );
        assert_eq!(
            api_base_url("gitlab.example.com/"),
            "https://gitlab.example.com/api/v4"
        );
    }

    #[test]
    fn test_for_host_builds_https_base() {
        let client = GitLabClient::for_host("gitlab.example.com", "t");
        assert_eq!(client.base_url(), "https://gitlab.example.com/api/v4");
    }

    #[test]
    fn test_agent_keeps_transport_default_timeout() {
        let client = GitLabClient::new("https://gitlab.example.com/api/v4", "t");
        let config = client.agent.config();

        assert!(config.timeouts().global.is_none());
        assert!(!config.http_status_as_error());
    }

    #[test]
    fn test_error_message_prefers_gitlab_fields() {
        assert_eq!(
            error_message(403, r#"{"message":"403 Forbidden"}"#.to_string()),
            "403 Forbidden"
        );
        assert_eq!(
            error_message(400, r#"{"error":"scope is invalid"}"#.to_string()),
            "scope is invalid"
        );
        assert_eq!(error_message(502, String::new()), "HTTP 502");
        assert_eq!(error_message(500, "oops".to_string()), "oops");
    }
}
