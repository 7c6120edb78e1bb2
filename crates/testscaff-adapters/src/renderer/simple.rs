//! Simple variable substitution renderer.
//!
//! Template sources are resolved by identifier: an override file under the
//! configured template directory wins, otherwise the embedded built-in is
//! used. The substitution language is minimal on purpose:
//!
//! - `{{name}}` / `{{ name }}` — replaced by the variable's value
//! - `{{#flag}}…{{/flag}}` — inner text kept only when `flag` is a true
//!   boolean; sections do not nest

use std::path::PathBuf;

use testscaff_core::{
    application::{ApplicationError, ports::Renderer},
    domain::TemplateContext,
    error::ScaffResult,
};
use tracing::instrument;

use crate::builtin_templates;

/// Renderer using basic variable substitution with boolean sections.
#[derive(Debug, Clone, Default)]
pub struct SimpleRenderer {
    template_dir: Option<PathBuf>,
}

impl SimpleRenderer {
    /// Renderer serving only the built-in templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer that prefers override files under `dir`.
    pub fn with_template_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: Some(dir.into()),
        }
    }

    fn load(&self, template_id: &str) -> ScaffResult<String> {
        if let Some(dir) = &self.template_dir {
            let path = dir.join(template_id);
            if path.is_file() {
                return std::fs::read_to_string(&path).map_err(|e| {
                    ApplicationError::RenderFailed {
                        template: template_id.into(),
                        reason: format!("failed to read override: {e}"),
                    }
                    .into()
                });
            }
        }

        builtin_templates::get(template_id)
            .map(str::to_owned)
            .ok_or_else(|| {
                ApplicationError::RenderFailed {
                    template: template_id.into(),
                    reason: "unknown template identifier".into(),
                }
                .into()
            })
    }
}

impl Renderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = template_id))]
    fn render(&self, template_id: &str, context: &TemplateContext) -> ScaffResult<String> {
        let source = self.load(template_id)?;
        let expanded = apply_sections(&source, context);
        Ok(apply_variables(&expanded, context))
    }
}

/// Resolve `{{#flag}}…{{/flag}}` sections against boolean context flags.
fn apply_sections(text: &str, ctx: &TemplateContext) -> String {
    let mut out = text.to_owned();

    loop {
        let Some(start) = out.find("{{#") else { break };
        let Some(tag_len) = out[start..].find("}}") else { break };
        let name = out[start + 3..start + tag_len].to_owned();
        let open_end = start + tag_len + 2;

        let close_tag = format!("{{{{/{name}}}}}");
        let Some(close_rel) = out[open_end..].find(&close_tag) else {
            break;
        };
        let close_start = open_end + close_rel;

        let replacement = if ctx.flag(&name) {
            out[open_end..close_start].to_owned()
        } else {
            String::new()
        };
        out.replace_range(start..close_start + close_tag.len(), &replacement);
    }

    out
}

/// Replace `{{name}}` and `{{ name }}` placeholders with context values.
fn apply_variables(text: &str, ctx: &TemplateContext) -> String {
    let mut out = text.to_owned();
    for (name, value) in ctx.iter() {
        let value = value.to_string();
        out = out.replace(&format!("{{{{{name}}}}}"), &value);
        out = out.replace(&format!("{{{{ {name} }}}}"), &value);
    }
    out
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> TemplateContext {
        TemplateContext::new()
            .with_str("base_class", "App\\Payment")
            .with_str("base_method", "charge")
            .with_bool("has_group", true)
            .with_str("group", "billing")
    }

    #[test]
    fn substitutes_variables() {
        let rendered = apply_variables("@covers {{base_class}}::{{ base_method }}", &ctx());
        assert_eq!(rendered, "@covers App\\Payment::charge");
    }

    #[test]
    fn section_kept_when_flag_true() {
        let out = apply_sections("a{{#has_group}}X{{/has_group}}b", &ctx());
        assert_eq!(out, "aXb");
    }

    #[test]
    fn section_removed_when_flag_false() {
        let context = TemplateContext::new().with_bool("has_group", false);
        let out = apply_sections("a{{#has_group}}X{{/has_group}}b", &context);
        assert_eq!(out, "ab");
    }

    #[test]
    fn renders_builtin_unit_template_with_group() {
        let renderer = SimpleRenderer::new();
        let rendered = renderer.render("test/unit.php.tpl", &ctx()).unwrap();

        assert!(rendered.contains("use App\\Payment;"));
        assert!(rendered.contains("@covers App\\Payment::charge"));
        assert!(rendered.contains("@group billing"));
        assert!(rendered.contains("class Test_charge extends TestCase"));
        assert!(rendered.contains("parent::set_up();"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn renders_builtin_unit_template_without_group() {
        let context = TemplateContext::new()
            .with_str("base_class", "App\\Payment")
            .with_str("base_method", "charge")
            .with_bool("has_group", false)
            .with_str("group", "");
        let renderer = SimpleRenderer::new();
        let rendered = renderer.render("test/unit.php.tpl", &context).unwrap();

        assert!(!rendered.contains("@group"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let renderer = SimpleRenderer::new();
        assert!(renderer.render("test/nope.php.tpl", &ctx()).is_err());
    }

    #[test]
    fn override_file_wins_over_builtin() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("templates");
        std::fs::create_dir_all(dir.join("test")).unwrap();
        std::fs::write(dir.join("test/unit.php.tpl"), "custom {{base_method}}").unwrap();

        let renderer = SimpleRenderer::with_template_dir(&dir);
        let rendered = renderer.render("test/unit.php.tpl", &ctx()).unwrap();
        assert_eq!(rendered, "custom charge");
    }
}
