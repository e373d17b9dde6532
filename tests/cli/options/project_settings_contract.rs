use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn settings_file_answers_questions() {
    let ctx = TestContext::javascript_project();
    ctx.write(
        "remix-pwa.toml",
        "language = \"js\"\nfeatures = [\"Web Manifest\"]\ndir = \"app\"\ninstall = false\n",
    );

    ctx.cli().assert().success();

    assert!(ctx.exists("app/routes/resources/manifest[.]webmanifest.js"));
    assert!(!ctx.exists("app/utils/client/pwa-utils.client.js"));
}

#[test]
fn flags_override_settings_file() {
    let ctx = TestContext::typescript_project();
    ctx.write("remix-pwa.toml", "language = \"js\"\nfeatures = \"utils\"\n");

    ctx.cli().args(["--ts", "--dir", "app", "--no-install"]).assert().success();

    assert!(ctx.exists("app/utils/client/pwa-utils.client.ts"));
    assert!(!ctx.exists("app/utils/client/pwa-utils.client.js"));
}

#[test]
fn unknown_settings_keys_fail() {
    let ctx = TestContext::typescript_project();
    ctx.write("remix-pwa.toml", "theme = \"dark\"\n");

    ctx.cli()
        .arg("-y")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("remix-pwa.toml"));
}
