// src/imports.rs
//! Extraction of literal module references from JS/TS sources.
//!
//! Only string literals are returned. Template strings and computed
//! arguments never reach the classifiers.

use std::path::Path;

use serde::Serialize;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor};

use crate::error::{FsdError, Result};

const REFERENCE_QUERY: &str = r#"
    (import_statement source: (string) @source)
    (export_statement source: (string) @source)
    (call_expression
        function: (import)
        arguments: (arguments . (string) @source))
    (call_expression
        function: (identifier) @callee
        arguments: (arguments . (string) @source))
"#;

/// How a reference was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Static,
    Dynamic,
    Require,
}

/// A literal module reference and its 1-based source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub specifier: String,
    pub row: usize,
    pub kind: ReferenceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    TypeScript,
    Tsx,
}

impl Dialect {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|s| s.to_str())?;
        match ext {
            "ts" | "mts" | "cts" | "js" | "mjs" | "cjs" => Some(Self::TypeScript),
            "tsx" | "jsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    fn grammar(self) -> Language {
        match self {
            Self::TypeScript => tree_sitter_typescript::language_typescript(),
            Self::Tsx => tree_sitter_typescript::language_tsx(),
        }
    }
}

/// Holds the compiled reference queries; shareable across threads.
pub struct ReferenceExtractor {
    typescript: Query,
    tsx: Query,
}

impl ReferenceExtractor {
    /// # Errors
    /// Returns error if a reference query fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            typescript: compile_query(Dialect::TypeScript.grammar())?,
            tsx: compile_query(Dialect::Tsx.grammar())?,
        })
    }

    /// Extracts literal references from the given file content.
    ///
    /// # Errors
    /// Returns error if the grammar cannot be loaded into the parser.
    pub fn extract(&self, path: &Path, content: &str) -> Result<Vec<Reference>> {
        let Some(dialect) = Dialect::from_path(path) else {
            return Ok(Vec::new());
        };
        let query = match dialect {
            Dialect::TypeScript => &self.typescript,
            Dialect::Tsx => &self.tsx,
        };
        run_query(content, dialect.grammar(), query)
    }
}

/// One-shot extraction; compiles the queries on every call.
///
/// # Errors
/// Returns error if the queries fail to compile or the grammar cannot be loaded.
pub fn extract(path: &Path, content: &str) -> Result<Vec<Reference>> {
    ReferenceExtractor::new()?.extract(path, content)
}

fn compile_query(grammar: Language) -> Result<Query> {
    Query::new(grammar, REFERENCE_QUERY).map_err(|e| FsdError::Query(e.to_string()))
}

fn run_query(source: &str, grammar: Language, query: &Query) -> Result<Vec<Reference>> {
    let mut parser = Parser::new();
    parser
        .set_language(grammar)
        .map_err(|e| FsdError::Query(format!("incompatible grammar: {e:?}")))?;

    let Some(tree) = parser.parse(source, None) else {
        return Ok(Vec::new());
    };

    let source_idx = query.capture_index_for_name("source");
    let callee_idx = query.capture_index_for_name("callee");
    let bytes = source.as_bytes();

    let mut cursor = QueryCursor::new();
    let mut references = Vec::new();

    for m in cursor.matches(query, tree.root_node(), bytes) {
        let mut literal = None;
        let mut callee = None;
        for capture in m.captures {
            if Some(capture.index) == source_idx {
                literal = Some(capture.node);
            } else if Some(capture.index) == callee_idx {
                callee = capture.node.utf8_text(bytes).ok();
            }
        }

        let Some(node) = literal else { continue };
        let kind = match callee {
            Some("require") => ReferenceKind::Require,
            Some(_) => continue,
            None if is_dynamic_import(node) => ReferenceKind::Dynamic,
            None => ReferenceKind::Static,
        };

        if let Ok(text) = node.utf8_text(bytes) {
            references.push(Reference {
                specifier: clean_text(text),
                row: node.start_position().row + 1,
                kind,
            });
        }
    }

    Ok(references)
}

fn is_dynamic_import(literal: Node) -> bool {
    literal
        .parent()
        .and_then(|args| args.parent())
        .is_some_and(|call| call.kind() == "call_expression")
}

fn clean_text(text: &str) -> String {
    text.trim_matches(|c| c == '"' || c == '\'').to_string()
}
