//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow for one CLI
//! invocation:
//!
//! `ParseReference → ExpandMethods → per method { SelectTemplates →
//! RenderAndWrite → MergeSetup (unit only) } → Report`
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing). Each file's outcome is independent and final — there is no
//! rollback across files, and an already-existing target is a per-file skip,
//! not an abort.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{ConstructorInspector, Renderer, Store},
        services::{ClassGenerator, MethodDiscoverer, PathResolver, ResolvedPaths, SetupMerger},
    },
    domain::{
        ClassReference, GenerationRequest, METHOD_SEPARATOR, MethodName, ProjectLayout,
        TemplateKind, TestKind,
    },
    error::ScaffResult,
};

/// Result of processing one template: the target path and whether this run
/// created it. Callers render one report line per outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub kind: TemplateKind,
    pub path: PathBuf,
    pub created: bool,
}

/// Main generation service.
///
/// Owns the injected adapters and drives resolution, discovery, rendering,
/// writing, and setup merging.
pub struct GenerateService {
    store: Arc<dyn Store>,
    resolver: PathResolver,
    discoverer: MethodDiscoverer,
    generator: ClassGenerator,
    merger: SetupMerger,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        store: Arc<dyn Store>,
        renderer: Arc<dyn Renderer>,
        inspector: Arc<dyn ConstructorInspector>,
        layout: ProjectLayout,
    ) -> Self {
        let resolver = PathResolver::new(layout);
        Self {
            discoverer: MethodDiscoverer::new(Arc::clone(&store), resolver.clone()),
            generator: ClassGenerator::new(Arc::clone(&store), renderer),
            merger: SetupMerger::new(inspector),
            resolver,
            store,
        }
    }

    /// Generate tests for a `Class` or `Class::method` reference.
    ///
    /// Without an explicit method, every discovered public method of the
    /// class gets its own template set; a class whose source file is absent
    /// discovers zero methods and produces zero outcomes (not an error).
    #[instrument(skip_all, fields(reference = reference, kind = %kind))]
    pub fn run(
        &self,
        reference: &str,
        kind: TestKind,
        group: Option<String>,
    ) -> ScaffResult<Vec<Outcome>> {
        let (class, method) = parse_reference(reference)?;

        let methods = match method {
            Some(method) => vec![method],
            None => self.discoverer.discover(&class)?,
        };

        info!(class = %class, methods = methods.len(), "generation started");

        let mut outcomes = Vec::new();
        for method in methods {
            let request = GenerationRequest::new(class.clone(), method, kind, group.clone());
            self.generate_for(&request, &mut outcomes)?;
        }

        info!(outcomes = outcomes.len(), "generation finished");
        Ok(outcomes)
    }

    /// Instantiate the selected template set for one method.
    fn generate_for(
        &self,
        request: &GenerationRequest,
        outcomes: &mut Vec<Outcome>,
    ) -> ScaffResult<()> {
        let paths = self.resolver.resolve(&request.class);
        let context = request.context();

        for kind in request.template_kinds() {
            let class_dir = target_dir(&paths, kind);
            let target = self.resolver.test_file(class_dir, &request.method);
            let template_id = self.resolver.layout().template_id(kind.stem());

            match self
                .generator
                .generate(&template_id, &target, &context, true)?
            {
                Some(path) => {
                    if kind == TemplateKind::Unit {
                        self.merge_setup(&path, &paths)?;
                    }
                    outcomes.push(Outcome {
                        kind,
                        path,
                        created: true,
                    });
                }
                None => outcomes.push(Outcome {
                    kind,
                    path: target,
                    created: false,
                }),
            }
        }
        Ok(())
    }

    /// Read back the freshly written unit test, splice in the setup fragment
    /// for the class under test, and overwrite. Skipped entirely when the
    /// class has no constructor dependencies (or no source file to inspect).
    fn merge_setup(&self, unit_path: &Path, paths: &ResolvedPaths) -> ScaffResult<()> {
        let fragment = self.merger.derive(&paths.source_path)?;
        if fragment.is_empty() {
            return Ok(());
        }

        let content = self.store.read(unit_path)?;
        let merged = self.merger.inject(&fragment, &content)?;
        self.store.write(unit_path, &merged)
    }
}

/// Split a `Class::method` reference on the first separator occurrence; a
/// reference without one means "whole class".
fn parse_reference(reference: &str) -> ScaffResult<(ClassReference, Option<MethodName>)> {
    match reference.split_once(METHOD_SEPARATOR) {
        Some((class, method)) => {
            let class: ClassReference = class.parse()?;
            let method: MethodName = method.parse()?;
            Ok((class, Some(method)))
        }
        None => Ok((reference.parse()?, None)),
    }
}

fn target_dir(paths: &ResolvedPaths, kind: TemplateKind) -> &Path {
    match kind {
        TemplateKind::Fixture => &paths.fixture_dir,
        TemplateKind::Unit => &paths.unit_dir,
        TemplateKind::Integration => &paths.integration_dir,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
