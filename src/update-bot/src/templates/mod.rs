//! Tracking issue text.
//!
//! The title and body formats are parsed by existing automation, so both are
//! reproduced exactly.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::TemplateRenderer;

/// Link offered to projects that want to opt in or out.
pub const OPT_OUT_LINK: &str = "https://github.com/pulse-browser/update-bot/blob/main/repos.json";

/// Generates the title of a project's tracking issue.
///
/// Format: "❗ {project_name} has out of date dependencies"
#[must_use]
pub fn generate_issue_title(project_name: &str) -> String {
    format!("❗ {project_name} has out of date dependencies")
}
