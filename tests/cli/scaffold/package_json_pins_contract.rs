use crate::harness::TestContext;

#[test]
fn package_json_gets_pinned_dependencies_and_scripts() {
    let ctx = TestContext::typescript_project();

    ctx.cli().args(["--ts", "--features", "manifest", "--dir", "app", "--no-install"]).assert().success();

    let manifest = ctx.package_json();
    assert_eq!(manifest["name"], "remix-fixture");
    assert_eq!(manifest["sideEffects"], false);
    assert_eq!(manifest["dependencies"]["react"], "^18.2.0");
    assert_eq!(manifest["dependencies"]["@remix-pwa/sw"], "^1.0.5");
    assert_eq!(manifest["dependencies"]["web-push"], "^3.4.5");
    assert_eq!(manifest["devDependencies"]["@types/node-persist"], "^3.1.2");
    assert_eq!(manifest["scripts"]["start"], "remix-serve build");
    assert_eq!(manifest["scripts"]["build"], "npm-run-all -p build:*");
    assert_eq!(
        manifest["scripts"]["dev:worker"],
        "esbuild ./app/entry.worker.ts --outfile=./public/entry.worker.js --bundle --format=esm --define:process.env.NODE_ENV='\"development\"' --watch"
    );
    assert!(manifest["dependencies"].get("workbox-routing").is_none());

    let raw = ctx.read("package.json");
    assert!(raw.starts_with("{\n  \"name\": \"remix-fixture\",\n"));
    assert!(raw.ends_with("}\n"));
}
