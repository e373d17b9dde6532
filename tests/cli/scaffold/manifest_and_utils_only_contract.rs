use crate::harness::{TestContext, remix_fixture};
use predicates::prelude::*;

#[test]
fn manifest_and_utils_copy_only_their_files() {
    let ctx = TestContext::typescript_project();

    ctx.cli()
        .args(["--ts", "--features", "manifest,utils", "--dir", "app", "--no-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating"))
        .stdout(predicate::str::contains("Don't forget to run npm install!"));

    assert!(ctx.exists("app/routes/resources/manifest[.]webmanifest.ts"));
    assert!(ctx.exists("app/utils/client/pwa-utils.client.ts"));

    assert!(!ctx.exists("app/entry.worker.ts"));
    assert!(!ctx.exists("app/routes/resources/subscribe.ts"));
    assert!(!ctx.exists("app/utils/server/pwa-utils.server.ts"));
    assert!(!ctx.exists("public/icons"));

    assert_eq!(ctx.read("app/root.tsx"), remix_fixture::ROOT_TSX);
    assert_eq!(ctx.read("app/entry.client.tsx"), remix_fixture::ENTRY_CLIENT_TSX);
}
