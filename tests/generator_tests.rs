//! Integration tests for generation runs over a directory tree

use std::fs;
use std::path::Path;

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use tempfile::TempDir;
use xrd_crdgen::generator::{
    find_paths_for_pattern, load_xrd, GenerationReport, Generator, GeneratorConfig,
};
use xrd_crdgen::Error;

// ============================================================================
// Test Helpers
// ============================================================================

const BUCKET_XRD: &str = r#"
apiVersion: apiextensions.crossplane.io/v1
kind: CompositeResourceDefinition
metadata:
  name: xbuckets.storage.example.org
spec:
  group: storage.example.org
  names:
    kind: XBucket
    plural: xbuckets
  claimNames:
    kind: Bucket
    plural: buckets
  versions:
    - name: v1alpha1
      served: true
      referenceable: true
      schema:
        openAPIV3Schema:
          type: object
          properties:
            spec:
              type: object
              properties:
                region:
                  type: string
"#;

const NETWORK_XRD: &str = r#"
apiVersion: apiextensions.crossplane.io/v1
kind: CompositeResourceDefinition
metadata:
  name: xnetworks.net.example.org
spec:
  group: net.example.org
  names:
    kind: XNetwork
    plural: xnetworks
  versions:
    - name: v1
      served: true
      referenceable: true
"#;

const CONFLICTING_XRD: &str = r#"
apiVersion: apiextensions.crossplane.io/v1
kind: CompositeResourceDefinition
metadata:
  name: xclusters.k8s.example.org
spec:
  group: k8s.example.org
  names:
    kind: Cluster
    plural: xclusters
  claimNames:
    kind: Cluster
    plural: clusters
  versions:
    - name: v1
      served: true
      referenceable: true
"#;

fn write_file(root: &Path, dir: &str, name: &str, contents: &str) {
    let dir = root.join(dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), contents).unwrap();
}

fn read_crd(path: &Path) -> CustomResourceDefinition {
    serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn run(root: &Path) -> xrd_crdgen::Result<GenerationReport> {
    Generator::new(GeneratorConfig::new(root)).run()
}

// ============================================================================
// Discovery and Loading Tests
// ============================================================================

#[test]
fn discovery_only_looks_one_level_deep() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "bucket", "xrd.yaml", BUCKET_XRD);
    write_file(tmp.path(), "network", "xrd.yaml", NETWORK_XRD);
    write_file(tmp.path(), "nested/deeper", "xrd.yaml", NETWORK_XRD);
    fs::write(tmp.path().join("xrd.yaml"), NETWORK_XRD).unwrap();

    let paths = find_paths_for_pattern("xrd.yaml", tmp.path()).unwrap();

    assert_eq!(
        paths,
        vec![
            tmp.path().join("bucket").join("xrd.yaml"),
            tmp.path().join("network").join("xrd.yaml"),
        ]
    );
}

#[test]
fn load_reports_missing_file() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("absent.yaml");

    match load_xrd(&missing) {
        Err(Error::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn load_reports_invalid_yaml() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "broken", "xrd.yaml", "spec: [not, an, xrd");

    let result = load_xrd(&tmp.path().join("broken").join("xrd.yaml"));
    assert!(matches!(result, Err(Error::Yaml { .. })));
}

// ============================================================================
// Generation Run Tests
// ============================================================================

#[test]
fn generates_composite_and_claim_manifests() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "bucket", "xrd.yaml", BUCKET_XRD);

    let report = run(tmp.path()).unwrap();

    let crds = tmp.path().join("crds");
    assert_eq!(
        report.composites,
        vec![crds.join("storage.example.org_xbuckets.yaml")]
    );
    assert_eq!(
        report.claims,
        vec![crds.join("storage.example.org_buckets.yaml")]
    );

    let composite = read_crd(&report.composites[0]);
    assert_eq!(composite.spec.scope, "Cluster");
    assert_eq!(composite.spec.names.kind, "XBucket");

    let claim = read_crd(&report.claims[0]);
    assert_eq!(claim.spec.scope, "Namespaced");
    assert_eq!(claim.metadata.name.as_deref(), Some("buckets.storage.example.org"));
}

#[test]
fn manifests_are_typed_crds() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "bucket", "xrd.yaml", BUCKET_XRD);

    let report = run(tmp.path()).unwrap();
    let manifest = fs::read_to_string(&report.composites[0]).unwrap();

    assert!(manifest.contains("apiVersion: apiextensions.k8s.io/v1"));
    assert!(manifest.contains("kind: CustomResourceDefinition"));
}

#[test]
fn xrd_without_claim_names_only_yields_composite() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "network", "xrd.yaml", NETWORK_XRD);

    let report = run(tmp.path()).unwrap();

    assert_eq!(report.composites.len(), 1);
    assert!(report.claims.is_empty());
    assert_eq!(
        report.without_claim,
        vec![tmp.path().join("network").join("xrd.yaml")]
    );
}

#[test]
fn all_configured_patterns_are_processed() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "bucket", "xrd.yaml", BUCKET_XRD);
    write_file(tmp.path(), "network", "test.yaml", NETWORK_XRD);

    let report = run(tmp.path()).unwrap();
    assert_eq!(report.composites.len(), 2);
    assert_eq!(report.claims.len(), 1);

    let mut config = GeneratorConfig::new(tmp.path());
    config.patterns = vec!["test.yaml".to_string()];
    let report = Generator::new(config).run().unwrap();
    assert_eq!(report.composites.len(), 1);
    assert!(report.claims.is_empty());
}

#[test]
fn claim_conflict_keeps_composite_manifest() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "cluster", "xrd.yaml", CONFLICTING_XRD);

    let result = run(tmp.path());

    assert!(matches!(result, Err(Error::ConflictingName { .. })));
    assert!(tmp
        .path()
        .join("crds")
        .join("k8s.example.org_xclusters.yaml")
        .exists());
    assert!(!tmp
        .path()
        .join("crds")
        .join("k8s.example.org_clusters.yaml")
        .exists());
}

#[test]
fn custom_output_dir_is_used() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "bucket", "xrd.yaml", BUCKET_XRD);

    let mut config = GeneratorConfig::new(tmp.path());
    config.output_dir = tmp.path().join("out").join("generated");
    let report = Generator::new(config).run().unwrap();

    assert!(report.composites[0].starts_with(tmp.path().join("out").join("generated")));
    assert!(report.composites[0].exists());
}

#[test]
fn empty_tree_generates_nothing() {
    let tmp = TempDir::new().unwrap();

    let report = run(tmp.path()).unwrap();
    assert_eq!(report, GenerationReport::default());
    assert!(!tmp.path().join("crds").exists());
}
