//! Derivation and injection of unit-test setup code.
//!
//! `derive` turns a class's ordered constructor dependency list (supplied by
//! the injected [`ConstructorInspector`]) into a [`SetupFragment`]: one
//! import statement and one mock-assignment statement per dependency.
//!
//! `inject` is a pure text function performing two independent insertions
//! into already-rendered content — it never re-renders and never touches the
//! Store. It runs exactly once per generation, between the first write and
//! the final overwrite; previously finalized files are never re-read and
//! re-injected.
//!
//! Anchors are a contract between the unit-test skeleton template and this
//! merger. A skeleton without them is rejected with
//! [`ApplicationError::AnchorMissing`] rather than silently dropping setup
//! code that the generated test would then reference.

use std::path::Path;
use std::sync::Arc;

use tracing::instrument;

use crate::application::ApplicationError;
use crate::application::ports::ConstructorInspector;
use crate::domain::SetupFragment;
use crate::error::ScaffResult;

/// Statement every rendered unit skeleton must contain inside its setup
/// block; derived setup statements are spliced in directly after it.
const SETUP_ANCHOR: &str = "parent::set_up();";

/// Builds and splices dependency setup code for unit tests.
pub struct SetupMerger {
    inspector: Arc<dyn ConstructorInspector>,
}

impl SetupMerger {
    pub fn new(inspector: Arc<dyn ConstructorInspector>) -> Self {
        Self { inspector }
    }

    /// Derive the import and initialization statements for the class whose
    /// source lives at `source_path`, in constructor-declared order.
    #[instrument(skip_all, fields(source = %source_path.display()))]
    pub fn derive(&self, source_path: &Path) -> ScaffResult<SetupFragment> {
        let params = self.inspector.params(source_path)?;

        let mut fragment = SetupFragment::default();
        for param in params {
            fragment
                .usages
                .push(format!("use {};", param.type_ref.fullname()));
            fragment.setup.push(format!(
                "$this->{} = Mockery::mock( {}::class );",
                param.property,
                param.type_ref.name()
            ));
        }
        Ok(fragment)
    }

    /// Splice `fragment` into rendered `content`.
    ///
    /// Usages go immediately after the last existing import line (or after
    /// the namespace declaration when the file has none); setup statements go
    /// after the `parent::set_up();` anchor. Content outside the two anchor
    /// points is untouched.
    pub fn inject(&self, fragment: &SetupFragment, content: &str) -> ScaffResult<String> {
        if fragment.is_empty() {
            return Ok(content.to_owned());
        }

        let merged = insert_usages(&fragment.usages, content)?;
        insert_setup(&fragment.setup, &merged)
    }
}

fn insert_usages(usages: &[String], content: &str) -> ScaffResult<String> {
    let lines: Vec<&str> = content.lines().collect();

    let last_use = lines.iter().rposition(|line| {
        let t = line.trim();
        t.starts_with("use ") && t.ends_with(';')
    });

    let (anchor, blank_after_anchor) = match last_use {
        Some(i) => (i, false),
        None => {
            let ns = lines
                .iter()
                .position(|line| {
                    let t = line.trim();
                    t.starts_with("namespace ") && t.ends_with(';')
                })
                .ok_or(ApplicationError::AnchorMissing {
                    anchor: "namespace",
                })?;
            (ns, true)
        }
    };

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + usages.len() + 1);
    out.extend(&lines[..=anchor]);
    if blank_after_anchor {
        out.push("");
    }
    out.extend(usages.iter().map(String::as_str));
    out.extend(&lines[anchor + 1..]);

    Ok(rejoin(out, content))
}

fn insert_setup(setup: &[String], content: &str) -> ScaffResult<String> {
    let lines: Vec<&str> = content.lines().collect();

    let anchor = lines
        .iter()
        .position(|line| line.trim() == SETUP_ANCHOR)
        .ok_or(ApplicationError::AnchorMissing {
            anchor: SETUP_ANCHOR,
        })?;

    let indent: String = lines[anchor]
        .chars()
        .take_while(|c| c.is_whitespace())
        .collect();
    let indented: Vec<String> = setup.iter().map(|s| format!("{indent}{s}")).collect();

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + setup.len());
    out.extend(&lines[..=anchor]);
    out.extend(indented.iter().map(String::as_str));
    out.extend(&lines[anchor + 1..]);

    Ok(rejoin(out, content))
}

/// Join lines back, preserving the original trailing-newline state.
fn rejoin(lines: Vec<&str>, original: &str) -> String {
    let mut joined = lines.join("\n");
    if original.ends_with('\n') {
        joined.push('\n');
    }
    joined
}

// ── tests ─────────────────────────────────────────────────────────────────────
