use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn failing_installer_exits_with_error_after_scaffolding() {
    let ctx = TestContext::typescript_project();
    let empty_bin = ctx.work_dir().join(".empty-bin");
    std::fs::create_dir_all(&empty_bin).unwrap();

    ctx.cli()
        .env("PATH", &empty_bin)
        .args(["--ts", "--features", "utils", "--dir", "app", "--install", "--pm", "pnpm"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Running pnpm install"))
        .stderr(predicate::str::contains("pnpm install"));

    assert!(ctx.exists("app/utils/client/pwa-utils.client.ts"));
    assert_eq!(ctx.package_json()["devDependencies"]["esbuild"], "^0.17.6");
}

#[test]
fn lockfile_names_the_reminder_command() {
    let ctx = TestContext::typescript_project();
    ctx.write("yarn.lock", "");

    ctx.cli()
        .args(["--ts", "--features", "utils", "--dir", "app", "--no-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Don't forget to run yarn install!"));
}
