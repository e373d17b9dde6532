use assert_fs::prelude::*;
use predicates::prelude::*;

use crate::harness::TestContext;

#[test]
fn remix_v2_projects_get_flat_resource_routes() {
    let ctx = TestContext::javascript_project();
    ctx.write("remix.config.js", "module.exports = {\n  future: {\n    v2_routeConvention: true,\n  },\n};\n");

    ctx.cli().args(["--js", "--features", "manifest,push", "--dir", "app", "--no-install"]).assert().success();

    let project = assert_fs::fixture::ChildPath::new(ctx.work_dir());
    project.child("app/routes/resources.manifest[.]webmanifest.js").assert(predicate::path::exists());
    project.child("app/routes/resources/subscribe.js").assert(predicate::path::missing());
    project
        .child("app/routes/resources.subscribe.js")
        .assert(predicate::str::contains("\"../utils/server/pwa-utils.server\""));
    project.child("app/utils/server/pwa-utils.server.js").assert(predicate::path::exists());

    let entry = ctx.read("app/entry.client.jsx");
    assert!(entry.contains("// remix-pwa:begin push-subscription"));
    assert!(!entry.contains("worker-registration"));
}
