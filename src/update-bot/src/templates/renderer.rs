//! Template renderer.

use crate::drift::DriftRecord;
use crate::templates::OPT_OUT_LINK;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Handlebars source of the tracking issue body.
///
/// Block tags share a line with text so no standalone-line whitespace
/// stripping applies.
const ISSUE_BODY_TEMPLATE: &str = "## Outdated Dependencies\
{{#each dependencies}}\n- {{name}}: {{old}} → {{new}}{{/each}}\n\n\
You can opt in or out of these requests by creating a pull request to the \
[update bot repository]({{opt_out_link}})";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Renders tracking issue bodies.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the issue body listing every outdated dependency.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_issue_body(&self, drift: &[DriftRecord]) -> Result<String, super::TemplateError> {
        let data = json!({
            "dependencies": drift,
            "opt_out_link": OPT_OUT_LINK,
        });

        self.render_template(ISSUE_BODY_TEMPLATE, &data)
    }

    fn render_template(&self, template: &str, data: &Value) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_exact_issue_body() {
        let renderer = TemplateRenderer::new();
        let drift = vec![
            DriftRecord::new("firefox", "120.0", "121.0"),
            DriftRecord::new("ublock", "1.2", "1.3"),
        ];

        let body = renderer.render_issue_body(&drift).unwrap();

        assert_eq!(
            body,
            "## Outdated Dependencies\n\
             - firefox: 120.0 → 121.0\n\
             - ublock: 1.2 → 1.3\n\
             \n\
             You can opt in or out of these requests by creating a pull request to the \
             [update bot repository](https://github.com/pulse-browser/update-bot/blob/main/repos.json)"
        );
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = TemplateRenderer::new();
        let drift = vec![DriftRecord::new("a<b>", "1&2", "\"3\"")];

        let body = renderer.render_issue_body(&drift).unwrap();

        assert!(body.contains("- a<b>: 1&2 → \"3\""));
    }
}
