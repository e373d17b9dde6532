//! Minimal tree-sitter view of TSX/JSX modules: import statements and parse health.

use std::ops::Range;

use tree_sitter::{Node, Parser, Tree};

use super::SpliceError;
use crate::domain::Language;

/// Grammar used to parse a component module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Tsx,
    Jsx,
}

impl From<Language> for Dialect {
    fn from(language: Language) -> Self {
        match language {
            Language::TypeScript => Dialect::Tsx,
            Language::JavaScript => Dialect::Jsx,
        }
    }
}

/// Named import list (`{ a, b as c }`) inside an import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedImports {
    pub range: Range<usize>,
    /// Imported (not local) names.
    pub names: Vec<String>,
}

/// Top-level `import` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub range: Range<usize>,
    pub module: String,
    /// `import type { .. }`
    pub type_only: bool,
    /// Default and namespace bindings (`React` in `import React from` or `import * as React from`).
    pub bindings: Vec<String>,
    pub named: Option<NamedImports>,
}

pub fn parse(source: &str, dialect: Dialect) -> Result<Tree, SpliceError> {
    let language: tree_sitter::Language = match dialect {
        Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        Dialect::Jsx => tree_sitter_javascript::LANGUAGE.into(),
    };
    let mut parser = Parser::new();
    parser.set_language(&language).map_err(|err| SpliceError::Parser(err.to_string()))?;
    parser
        .parse(source, None)
        .ok_or_else(|| SpliceError::Parser("parser produced no syntax tree".to_string()))
}

/// Whether `source` contains any syntax error or missing node.
pub fn has_errors(source: &str, dialect: Dialect) -> Result<bool, SpliceError> {
    Ok(parse(source, dialect)?.root_node().has_error())
}

/// Whether byte `offset` falls inside a comment or a string literal.
pub fn in_comment_or_string(tree: &Tree, offset: usize) -> bool {
    let mut node = tree.root_node().descendant_for_byte_range(offset, offset + 1);
    while let Some(current) = node {
        if matches!(current.kind(), "comment" | "string" | "template_string") {
            return true;
        }
        node = current.parent();
    }
    false
}

/// Collect top-level import statements in source order.
pub fn imports(source: &str, dialect: Dialect) -> Result<Vec<ImportStatement>, SpliceError> {
    let tree = parse(source, dialect)?;
    let root = tree.root_node();
    let mut cursor = root.walk();
    let imports = root
        .named_children(&mut cursor)
        .filter(|node| node.kind() == "import_statement")
        .map(|node| import_statement(node, source))
        .collect();
    Ok(imports)
}

fn import_statement(node: Node, source: &str) -> ImportStatement {
    let module = node
        .child_by_field_name("source")
        .map(|s| text(s, source).trim_matches(|c| c == '"' || c == '\'').to_string())
        .unwrap_or_default();
    let type_only = text(node, source)
        .strip_prefix("import")
        .is_some_and(|rest| rest.trim_start().starts_with("type "));

    let mut bindings = Vec::new();
    let mut named = None;
    let mut cursor = node.walk();
    for clause in node.named_children(&mut cursor).filter(|c| c.kind() == "import_clause") {
        let mut clause_cursor = clause.walk();
        for part in clause.named_children(&mut clause_cursor) {
            match part.kind() {
                "identifier" => bindings.push(text(part, source).to_string()),
                "namespace_import" => {
                    if let Some(ident) = part.named_child(0) {
                        bindings.push(text(ident, source).to_string());
                    }
                }
                "named_imports" => named = Some(named_imports(part, source)),
                _ => {}
            }
        }
    }

    ImportStatement { range: node.byte_range(), module, type_only, bindings, named }
}

fn named_imports(node: Node, source: &str) -> NamedImports {
    let mut cursor = node.walk();
    let names = node
        .named_children(&mut cursor)
        .filter(|spec| spec.kind() == "import_specifier")
        .filter_map(|spec| spec.child_by_field_name("name"))
        .map(|name| text(name, source).to_string())
        .collect();
    NamedImports { range: node.byte_range(), names }
}

fn text<'a>(node: Node, source: &'a str) -> &'a str {
    &source[node.byte_range()]
}
