use std::sync::LazyLock;

use regex::Regex;

use super::SpliceError;
use super::syntax::{self, Dialect, ImportStatement};

const REMIX_REACT: &str = "@remix-run/react";
const NAVIGATION_HOOKS: [&str; 2] = ["useLocation", "useMatches"];

static MOUNT_FLAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\blet\s+isMount\b").expect("mount flag pattern is valid"));

/// Make sure the root layout imports and declares what the navigation effect uses:
/// a `React` binding, the `useLocation`/`useMatches` hooks and a module-level `isMount` flag.
pub fn ensure_navigation_imports(source: &str, dialect: Dialect) -> Result<String, SpliceError> {
    let imports = syntax::imports(source, dialect)?;
    let mut edits: Vec<(usize, usize, String)> = Vec::new();
    let mut new_lines: Vec<String> = Vec::new();

    let has_react = imports
        .iter()
        .any(|import| !import.type_only && import.bindings.iter().any(|b| b == "React"));
    if !has_react {
        new_lines.push("import * as React from \"react\";".to_string());
    }

    let missing_hooks: Vec<&str> = NAVIGATION_HOOKS
        .into_iter()
        .filter(|hook| !imports.iter().any(|import| imports_name(import, hook)))
        .collect();
    if !missing_hooks.is_empty() {
        let target = imports
            .iter()
            .find(|import| import.module == REMIX_REACT && !import.type_only && import.named.is_some());
        match target.and_then(|import| import.named.as_ref()) {
            Some(named) => {
                let merged = merge_named_imports(&source[named.range.clone()], &missing_hooks);
                edits.push((named.range.start, named.range.end, merged));
            }
            None => new_lines.push(format!(
                "import {{ {} }} from \"{}\";",
                missing_hooks.join(", "),
                REMIX_REACT
            )),
        }
    }

    if !MOUNT_FLAG.is_match(source) {
        if !new_lines.is_empty() {
            new_lines.push(String::new());
        }
        new_lines.push("let isMount = true;".to_string());
    }

    if !new_lines.is_empty() {
        match imports.last() {
            Some(last) => {
                let block = format!("\n{}", new_lines.join("\n"));
                edits.push((last.range.end, last.range.end, block));
            }
            None => edits.push((0, 0, format!("{}\n\n", new_lines.join("\n")))),
        }
    }

    edits.sort_by(|a, b| b.0.cmp(&a.0));
    let mut result = source.to_string();
    for (start, end, replacement) in edits {
        result.replace_range(start..end, &replacement);
    }
    Ok(result)
}

fn imports_name(import: &ImportStatement, name: &str) -> bool {
    !import.type_only
        && import.named.as_ref().is_some_and(|named| named.names.iter().any(|n| n == name))
}

/// Append `names` to a `{ a, b }` import list, keeping its single- or multi-line layout.
fn merge_named_imports(original: &str, names: &[&str]) -> String {
    let inner = original.trim().trim_start_matches('{').trim_end_matches('}');
    let mut specifiers: Vec<&str> =
        inner.split(',').map(str::trim).filter(|spec| !spec.is_empty()).collect();
    specifiers.extend_from_slice(names);

    if original.contains('\n') {
        let mut out = String::from("{\n");
        for spec in specifiers {
            out.push_str("  ");
            out.push_str(spec);
            out.push_str(",\n");
        }
        out.push('}');
        out
    } else {
        format!("{{ {} }}", specifiers.join(", "))
    }
}
