use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn docs_prints_url_without_touching_project() {
    let ctx = TestContext::typescript_project();
    let before = ctx.snapshot();

    ctx.cli().arg("--docs").assert().success().stdout(predicate::str::starts_with("https://"));

    assert_eq!(ctx.snapshot(), before);
}

#[test]
fn short_and_long_version_flags() {
    let ctx = TestContext::new();
    for flag in ["-v", "--version"] {
        ctx.cli()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn help_lists_negated_flags() {
    TestContext::new()
        .cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-typescript"))
        .stdout(predicate::str::contains("--package-manager"));
}
