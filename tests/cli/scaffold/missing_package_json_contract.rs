use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_package_json_fails_after_copying() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--js", "--features", "utils", "--no-install"])
        .args(["--dir", "app"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("package.json not found"));

    assert!(ctx.exists("app/utils/client/pwa-utils.client.js"));
}

#[test]
fn invalid_package_json_is_reported_and_kept() {
    let ctx = TestContext::new();
    ctx.write("package.json", "{ \"name\": ");

    ctx.cli()
        .args(["--js", "--features", "utils", "--dir", "app", "--no-install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid package.json"));

    assert_eq!(ctx.read("package.json"), "{ \"name\": ");
}
