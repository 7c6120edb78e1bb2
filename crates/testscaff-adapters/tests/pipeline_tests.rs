//! End-to-end pipeline tests: core services wired to the in-memory adapters.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use testscaff_adapters::{LexicalInspector, MemoryStore, SimpleRenderer};
use testscaff_core::{
    application::ports::Store,
    application::GenerateService,
    domain::{ProjectLayout, TemplateKind, TestKind},
};

const PAYMENT_SRC: &str = r"<?php

namespace App;

use App\Gateway\Api;
use App\Support\Logger;

class Payment {
	public function __construct( Api $api, Logger $logger ) {
	}

	public function charge( $amount ) {
	}

	public function refund( $amount ) {
	}
}
";

fn service(store: &MemoryStore) -> GenerateService {
    GenerateService::new(
        Arc::new(store.clone()),
        Arc::new(SimpleRenderer::new()),
        Arc::new(LexicalInspector::new(Arc::new(store.clone()))),
        ProjectLayout::default(),
    )
}

#[test]
fn both_kind_creates_three_parallel_files() {
    let store = MemoryStore::new();
    store.seed("inc/Payment.php", PAYMENT_SRC);

    let outcomes = service(&store)
        .run("App/Payment::charge", TestKind::Both, None)
        .unwrap();

    let paths: Vec<PathBuf> = outcomes.iter().map(|o| o.path.clone()).collect();
    assert_eq!(
        paths,
        [
            PathBuf::from("Tests/Fixtures/inc/Payment/charge.php"),
            PathBuf::from("Tests/Unit/inc/Payment/charge.php"),
            PathBuf::from("Tests/Integration/inc/Payment/charge.php"),
        ]
    );
    assert!(outcomes.iter().all(|o| o.created));
}

#[test]
fn unit_kind_never_writes_the_integration_path() {
    let store = MemoryStore::new();
    store.seed("inc/Payment.php", PAYMENT_SRC);

    let outcomes = service(&store)
        .run("App/Payment::charge", TestKind::Unit, None)
        .unwrap();

    let kinds: Vec<TemplateKind> = outcomes.iter().map(|o| o.kind).collect();
    assert_eq!(kinds, [TemplateKind::Fixture, TemplateKind::Unit]);
    assert!(!store.exists(Path::new("Tests/Integration/inc/Payment/charge.php")));
}

#[test]
fn setup_injection_preserves_dependency_order() {
    let store = MemoryStore::new();
    store.seed("inc/Payment.php", PAYMENT_SRC);

    service(&store)
        .run("App/Payment::charge", TestKind::Unit, None)
        .unwrap();

    let unit = store
        .read_file(Path::new("Tests/Unit/inc/Payment/charge.php"))
        .unwrap();

    // Imports for [Api, Logger] in constructor order, after the template's own.
    let base = unit.find("use App\\Payment;").unwrap();
    let api = unit.find("use App\\Gateway\\Api;").unwrap();
    let logger = unit.find("use App\\Support\\Logger;").unwrap();
    assert!(base < api && api < logger);

    // Mock assignments in the same order, inside the set_up block.
    let anchor = unit.find("parent::set_up();").unwrap();
    let mock_api = unit.find("$this->api = Mockery::mock( Api::class );").unwrap();
    let mock_logger = unit
        .find("$this->logger = Mockery::mock( Logger::class );")
        .unwrap();
    assert!(anchor < mock_api && mock_api < mock_logger);
}

#[test]
fn end_to_end_group_scenario_and_idempotent_rerun() {
    let store = MemoryStore::new();
    store.seed("inc/Payment.php", PAYMENT_SRC);
    let service = service(&store);

    let outcomes = service
        .run("App/Payment::charge", TestKind::Both, Some("billing".into()))
        .unwrap();
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|o| o.created));

    let unit = store
        .read_file(Path::new("Tests/Unit/inc/Payment/charge.php"))
        .unwrap();
    assert!(unit.contains("@group billing"));
    assert!(unit.contains("@covers App\\Payment::charge"));

    // Rerun of the identical command: three skips, no content changes.
    let before = store.file_count();
    let rerun = service
        .run("App/Payment::charge", TestKind::Both, Some("billing".into()))
        .unwrap();

    assert_eq!(rerun.len(), 3);
    assert!(rerun.iter().all(|o| !o.created));
    assert_eq!(store.file_count(), before);
    assert_eq!(
        store
            .read_file(Path::new("Tests/Unit/inc/Payment/charge.php"))
            .unwrap(),
        unit,
        "skipped files keep their content"
    );
}

#[test]
fn discovery_expands_to_every_public_method() {
    let store = MemoryStore::new();
    store.seed("inc/Payment.php", PAYMENT_SRC);

    let outcomes = service(&store)
        .run("App/Payment", TestKind::Both, None)
        .unwrap();

    // charge + refund, three files each; __construct excluded.
    assert_eq!(outcomes.len(), 6);
    assert!(store.exists(Path::new("Tests/Unit/inc/Payment/refund.php")));
    assert!(!store.exists(Path::new("Tests/Unit/inc/Payment/construct.php")));
}

#[test]
fn missing_class_discovers_nothing_and_writes_nothing() {
    let store = MemoryStore::new();

    let outcomes = service(&store)
        .run("App/Ghost", TestKind::Both, None)
        .unwrap();

    assert!(outcomes.is_empty());
    assert_eq!(store.file_count(), 0);
}

#[test]
fn explicit_method_works_without_a_source_file() {
    let store = MemoryStore::new();

    let outcomes = service(&store)
        .run("App/Ghost::haunt", TestKind::Unit, None)
        .unwrap();

    // No source to inspect: the unit test is generated without a setup merge.
    assert_eq!(outcomes.len(), 2);
    let unit = store
        .read_file(Path::new("Tests/Unit/inc/Ghost/haunt.php"))
        .unwrap();
    assert!(unit.contains("parent::set_up();"));
    assert!(!unit.contains("Mockery::mock("));
}

#[test]
fn snake_case_methods_get_camel_case_files() {
    let store = MemoryStore::new();

    service(&store)
        .run("App/Bar::render_admin_bar", TestKind::FixtureOnly, None)
        .unwrap();

    assert!(store.exists(Path::new("Tests/Fixtures/inc/Bar/renderAdminBar.php")));
}
