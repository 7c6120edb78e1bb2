//! Generation requests and test kinds.

use std::fmt;
use std::str::FromStr;

use crate::domain::class_reference::{ClassReference, MethodName};
use crate::domain::context::TemplateContext;
use crate::domain::error::DomainError;

// ── TestKind ──────────────────────────────────────────────────────────────────

/// Which set of test templates a request instantiates.
///
/// The fixture template is always part of the set; the kind only decides
/// whether the unit test, the integration test, or both accompany it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestKind {
    Unit,
    Integration,
    #[default]
    Both,
    FixtureOnly,
}

impl TestKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Integration => "integration",
            Self::Both => "both",
            Self::FixtureOnly => "fixture",
        }
    }

    pub const fn includes_unit(self) -> bool {
        matches!(self, Self::Unit | Self::Both)
    }

    pub const fn includes_integration(self) -> bool {
        matches!(self, Self::Integration | Self::Both)
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unit" | "u" => Ok(Self::Unit),
            "integration" | "i" => Ok(Self::Integration),
            // An absent flag means both on the CLI
            "both" | "b" | "" => Ok(Self::Both),
            "fixture" | "f" => Ok(Self::FixtureOnly),
            other => Err(DomainError::InvalidReference {
                reference: other.into(),
                reason: "unknown test kind".into(),
            }),
        }
    }
}

// ── TemplateKind ──────────────────────────────────────────────────────────────

/// One concrete template in a selected set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Fixture,
    Unit,
    Integration,
}

impl TemplateKind {
    /// Template file stem (`fixture` → `test/fixture.<ext>.tpl`).
    pub const fn stem(&self) -> &'static str {
        match self {
            Self::Fixture => "fixture",
            Self::Unit => "unit",
            Self::Integration => "integration",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

// ── GenerationRequest ─────────────────────────────────────────────────────────

/// One class + method to generate tests for.
///
/// Constructed per CLI invocation (or once per discovered method when no
/// explicit method was given); immutable; consumed once.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub class: ClassReference,
    pub method: MethodName,
    pub kind: TestKind,
    pub group: Option<String>,
}

impl GenerationRequest {
    pub fn new(
        class: ClassReference,
        method: MethodName,
        kind: TestKind,
        group: Option<String>,
    ) -> Self {
        Self {
            class,
            method,
            kind,
            group,
        }
    }

    /// Substitution context for this request's templates. Built fresh per
    /// request; the same four variables go to every template in the set.
    pub fn context(&self) -> TemplateContext {
        let group = self.group.as_deref().unwrap_or("");
        TemplateContext::new()
            .with_str("base_class", self.class.fullname())
            .with_str("base_method", self.method.as_str())
            .with_bool("has_group", !group.is_empty())
            .with_str("group", group)
    }

    /// The template kinds this request instantiates, in generation order.
    /// The fixture always comes first, mirroring the generated-file report.
    pub fn template_kinds(&self) -> Vec<TemplateKind> {
        let mut kinds = vec![TemplateKind::Fixture];
        if self.kind.includes_unit() {
            kinds.push(TemplateKind::Unit);
        }
        if self.kind.includes_integration() {
            kinds.push(TemplateKind::Integration);
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(kind: TestKind) -> GenerationRequest {
        GenerationRequest::new(
            "App/Foo".parse().unwrap(),
            "bar".parse().unwrap(),
            kind,
            None,
        )
    }

    #[test]
    fn kind_parses_aliases() {
        assert_eq!("u".parse::<TestKind>().unwrap(), TestKind::Unit);
        assert_eq!("unit".parse::<TestKind>().unwrap(), TestKind::Unit);
        assert_eq!("i".parse::<TestKind>().unwrap(), TestKind::Integration);
        assert_eq!("b".parse::<TestKind>().unwrap(), TestKind::Both);
        assert_eq!("".parse::<TestKind>().unwrap(), TestKind::Both);
        assert_eq!("f".parse::<TestKind>().unwrap(), TestKind::FixtureOnly);
        assert!("banana".parse::<TestKind>().is_err());
    }

    #[test]
    fn both_selects_three_templates() {
        assert_eq!(
            request(TestKind::Both).template_kinds(),
            [
                TemplateKind::Fixture,
                TemplateKind::Unit,
                TemplateKind::Integration
            ]
        );
    }

    #[test]
    fn unit_selects_fixture_and_unit() {
        assert_eq!(
            request(TestKind::Unit).template_kinds(),
            [TemplateKind::Fixture, TemplateKind::Unit]
        );
    }

    #[test]
    fn integration_selects_fixture_and_integration() {
        assert_eq!(
            request(TestKind::Integration).template_kinds(),
            [TemplateKind::Fixture, TemplateKind::Integration]
        );
    }

    #[test]
    fn fixture_only_selects_just_the_fixture() {
        assert_eq!(
            request(TestKind::FixtureOnly).template_kinds(),
            [TemplateKind::Fixture]
        );
    }

    #[test]
    fn context_carries_the_four_variables() {
        let mut req = request(TestKind::Both);
        req.group = Some("billing".into());
        let ctx = req.context();

        assert_eq!(
            ctx.get("base_class").unwrap().to_string(),
            "App\\Foo"
        );
        assert_eq!(ctx.get("base_method").unwrap().to_string(), "bar");
        assert!(ctx.flag("has_group"));
        assert_eq!(ctx.get("group").unwrap().to_string(), "billing");
    }

    #[test]
    fn context_without_group_clears_flag() {
        let ctx = request(TestKind::Both).context();
        assert!(!ctx.flag("has_group"));
        assert_eq!(ctx.get("group").unwrap().to_string(), "");
    }
}
