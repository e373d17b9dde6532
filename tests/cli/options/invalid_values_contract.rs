use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn unknown_feature_is_rejected_before_any_write() {
    let ctx = TestContext::typescript_project();
    let before = ctx.snapshot();

    ctx.cli()
        .args(["--ts", "--features", "sw,offline", "--no-install"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid feature 'offline'"));

    assert_eq!(ctx.snapshot(), before);
}

#[test]
fn unknown_package_manager_is_rejected() {
    TestContext::typescript_project()
        .cli()
        .args(["--pm", "bun", "-y"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid package manager 'bun'"));
}

#[test]
fn missing_project_directory_is_rejected() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["--cwd", "does-not-exist", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
