use crate::harness::TestContext;
use predicates::prelude::*;

const ROOT_WITHOUT_DOCUMENT: &str = "import { Outlet } from \"@remix-run/react\";\n\nexport default function App() {\n  return <Outlet />;\n}\n";

#[test]
fn missing_anchor_fails_and_leaves_root_untouched() {
    let ctx = TestContext::typescript_project();
    ctx.write("app/root.tsx", ROOT_WITHOUT_DOCUMENT);

    ctx.cli()
        .args(["--ts", "--features", "sw", "--cache", "pre", "--no-workbox", "--no-install", "--dir", "app"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Anchor"))
        .stderr(predicate::str::contains("root.tsx"));

    assert_eq!(ctx.read("app/root.tsx"), ROOT_WITHOUT_DOCUMENT);
    assert!(ctx.package_json().get("devDependencies").unwrap().get("esbuild").is_none());
}

#[test]
fn missing_root_layout_is_reported() {
    let ctx = TestContext::new();
    ctx.write("package.json", "{}\n");

    ctx.cli()
        .args(["--ts", "--features", "sw", "--cache", "pre", "--no-workbox", "--no-install", "--dir", "app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
