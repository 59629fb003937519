//! Menu text for the menu-bar host.
//!
//! Everything above the `---` separator goes into the title bar, everything
//! below into the dropdown. Text after a `|` is a list of rendering
//! attributes for the host, not displayed text.

use mr_core::{MergeRequest, MergeRequestReport, Project};
use std::fmt::Write;

pub const MENU_SEPARATOR: &str = "---";
pub const TITLE_MAX_CHARS: usize = 40;
const ELLIPSIS: char = '…';

/// A single dropdown line
pub trait MenuItem {
    fn menu_line(&self) -> String;
}

impl MenuItem for Project {
    fn menu_line(&self) -> String {
        format!(
            "{} [{} mrs]|href={}",
            self.name_with_namespace,
            self.merge_requests.len(),
            self.web_url
        )
    }
}

impl MenuItem for MergeRequest {
    fn menu_line(&self) -> String {
        format!(
            "--{} ({}) ({} notes)|href={}",
            truncate_title(&self.title),
            self.author.username,
            self.user_notes_count,
            self.web_url
        )
    }
}

/// Cut a title down to `TITLE_MAX_CHARS` characters, the last being an ellipsis
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() <= TITLE_MAX_CHARS {
        return title.to_string();
    }

    let mut short: String = title.chars().take(TITLE_MAX_CHARS - 1).collect();
    short.push(ELLIPSIS);
    short
}

/// Render the full menu: header, separator, summary, then projects by
/// namespaced name with their merge requests in fetch order.
pub fn render_menu(report: &MergeRequestReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "🧰 {} MRs in {} Prj",
        report.mr_count, report.project_count
    );
    let _ = writeln!(out, "{}", MENU_SEPARATOR);
    let _ = writeln!(
        out,
        "Gitlab Merge Requests ({} notes)|color=blue",
        report.comment_count
    );

    let mut projects: Vec<&Project> = report.projects.iter().collect();
    projects.sort_by(|a, b| a.name_with_namespace.cmp(&b.name_with_namespace));

    for project in projects {
        let _ = writeln!(out, "{}", project.menu_line());
        for mr in &project.merge_requests {
            let _ = writeln!(out, "{}", mr.menu_line());
        }
    }

    out
}
