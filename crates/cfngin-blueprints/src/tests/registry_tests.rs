//! Blueprint registry and stack rendering tests

use crate::{available_blueprints, create_blueprint, render_all, render_stack};
use cfngin_core::{CfnginConfig, Error};
use camino::Utf8PathBuf;
use tempfile::TempDir;

const CONFIG: &str = r#"
namespace: Example
region: us-east-1
cfngin_bucket_region: us-west-2
stacks:
  - name: cfngin-bucket
    blueprint: cfngin_bucket
    variables:
      Tags:
        env: dev
  - name: named-bucket
    blueprint: cfngin-bucket
    variables:
      BucketName: my-named-bucket
  - name: parked
    blueprint: cfngin_bucket
    enabled: false
"#;

fn load_config(content: &str) -> (TempDir, CfnginConfig) {
    let dir = TempDir::new().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().join("cfngin.yaml")).unwrap();
    std::fs::write(&path, content).unwrap();
    let config = CfnginConfig::load(Some(&path)).unwrap();
    (dir, config)
}

#[test]
fn test_create_known_blueprint() {
    for name in ["cfngin_bucket", "cfngin-bucket", "CFNginBucket"] {
        let blueprint = create_blueprint(name).unwrap();
        assert_eq!(blueprint.name(), "cfngin_bucket");
    }
}

#[test]
fn test_create_unknown_blueprint() {
    let err = create_blueprint("vpc").err().unwrap();
    assert!(matches!(err, Error::UnknownBlueprint { .. }));
    assert!(err.to_string().contains("cfngin_bucket"));
}

#[test]
fn test_available_blueprints() {
    assert_eq!(available_blueprints(), &["cfngin_bucket"]);
}

#[test]
fn test_render_stack_uses_fqn_and_bucket_region() {
    let (_dir, config) = load_config(CONFIG);
    let stack = config.stack("cfngin-bucket").unwrap();

    let rendered = render_stack(&config, stack).unwrap();
    assert_eq!(rendered.fqn, "Example-cfngin-bucket");
    assert_eq!(rendered.blueprint, "cfngin_bucket");

    let value = rendered.template.to_value().unwrap();
    assert_eq!(
        value["Resources"]["CFNginBucket"]["Properties"]["BucketName"],
        "example-cfngin-bucket-us-west-2"
    );
}

#[test]
fn test_render_all_skips_disabled_stacks() {
    let (_dir, config) = load_config(CONFIG);

    let rendered = render_all(&config).unwrap();
    let fqns: Vec<&str> = rendered.iter().map(|r| r.fqn.as_str()).collect();
    assert_eq!(fqns, vec!["Example-cfngin-bucket", "Example-named-bucket"]);

    let value = rendered[1].template.to_value().unwrap();
    assert_eq!(
        value["Resources"]["CFNginBucket"]["Properties"]["BucketName"],
        "my-named-bucket"
    );
}

#[test]
fn test_render_stack_with_unknown_blueprint() {
    let (_dir, config) = load_config(
        "namespace: ex\nregion: us-east-1\nstacks:\n  - name: net\n    blueprint: vpc\n",
    );
    let stack = config.stack("net").unwrap();
    assert!(matches!(
        render_stack(&config, stack),
        Err(Error::UnknownBlueprint { .. })
    ));
}

#[test]
fn test_render_all_rejects_colliding_fqns() {
    let (_dir, config) = load_config(
        "namespace: ex\nregion: us-east-1\nstacks:\n  - name: bucket\n    blueprint: cfngin_bucket\n  - name: ex-bucket\n    blueprint: cfngin_bucket\n",
    );
    assert!(matches!(
        render_all(&config),
        Err(Error::DuplicateStack { ref fqn }) if fqn == "ex-bucket"
    ));
}
