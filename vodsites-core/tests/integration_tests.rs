//! Integration tests for vodsites-core
//!
//! These tests exercise the full path from bundle files on disk through
//! the extender seam into a merged registry.
//!
//! Run with: cargo test --test integration_tests

use vodsites_core::{
    builtin_registry, contribute, customer_sites, Config, SiteBundle, SiteRegistry,
    CUSTOMER_NAMESPACE,
};

fn write_bundle(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_file_bundle_overrides_builtin_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_bundle(
        &dir,
        "extra.yaml",
        r#"
namespace: extra
sites:
  qiqi:
    api: https://mirror.example/api.php/provide/vod
    name: 七七镜像
  fresh:
    api: https://fresh.example/api
    name: Fresh
"#,
    );

    let mut registry = builtin_registry();
    let bundle = SiteBundle::from_path(&path).unwrap();
    let report = contribute(Some(&mut registry), &bundle).unwrap();

    // one overwrite attributed to the builtin catalog, one new key
    assert_eq!(report.inserted, vec!["fresh"]);
    assert_eq!(report.replaced.len(), 1);
    assert_eq!(report.replaced[0].id, "qiqi");
    assert_eq!(report.replaced[0].previous_namespace, CUSTOMER_NAMESPACE);

    let qiqi = registry.get("qiqi").unwrap();
    assert_eq!(qiqi.api, "https://mirror.example/api.php/provide/vod");
    assert_eq!(registry.record("qiqi").unwrap().namespace, "extra");

    // the rest of the catalog is untouched
    assert_eq!(registry.len(), customer_sites().len() + 1);
    assert_eq!(
        registry.record("nm_hema").unwrap().namespace,
        CUSTOMER_NAMESPACE
    );
}

#[test]
fn test_config_lists_bundle_files_in_merge_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_bundle(
        &dir,
        "first.yaml",
        "namespace: first\nsites:\n  a:\n    api: https://a.example/api\n    name: A\n",
    );
    let second = write_bundle(
        &dir,
        "second.json",
        r#"{"namespace":"second","sites":{"a":{"api":"https://a2.example/api","name":"A2"}}}"#,
    );
    let config_path = write_bundle(
        &dir,
        "vodsites.yaml",
        &format!(
            "sites:\n  bundles:\n    - {}\n    - {}\n",
            first.display(),
            second.display()
        ),
    );

    let config = Config::from_file(config_path.to_str().unwrap()).unwrap();
    let mut registry = SiteRegistry::new();
    for path in &config.sites.bundles {
        let bundle = SiteBundle::from_path(path).unwrap();
        registry.extend(&bundle);
    }

    // later bundle wins, provenance follows
    assert_eq!(registry.get("a").unwrap().api, "https://a2.example/api");
    assert_eq!(registry.record("a").unwrap().namespace, "second");
}

#[test]
fn test_registry_exports_as_json() {
    let registry = builtin_registry();
    let json = serde_json::to_value(&registry).unwrap();

    let qiqi = &json["qiqi"];
    assert_eq!(qiqi["api"], "https://www.qiqidys.com/api.php/provide/vod");
    assert_eq!(qiqi["name"], "七七资源");
    assert_eq!(qiqi["namespace"], CUSTOMER_NAMESPACE);
}

#[test]
fn test_missing_extender_does_not_panic() {
    let result = contribute(None, &customer_sites());
    assert!(result.is_err());
}
