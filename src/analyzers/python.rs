//! Tree-sitter parser integration for Python
//!
//! Parsing is delegated to the tree-sitter Python grammar; this module maps
//! grammar-level failures onto the crate error type and drives the
//! structural walk over the parsed tree.

use crate::complexity::{build_report, ComplexityVisitor};
use crate::core::{AnalysisReport, Error, Result};
use log::debug;
use tree_sitter::{Language as TsLanguage, Node, Parser, Tree};

/// Analyzer for Python source text
pub struct PythonAnalyzer;

impl PythonAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Parse `source` and produce a complexity report for it.
    pub fn analyze(&self, source: &str) -> Result<AnalysisReport> {
        let tree = parse_source(source)?;
        let mut visitor = ComplexityVisitor::new();
        visitor.visit(tree.root_node(), source);
        debug!(
            "analyzed {} bytes: max loop depth {}, recursive calls {}, bulk literals {}",
            source.len(),
            visitor.max_loop_depth,
            visitor.recursive_calls,
            visitor.bulk_literals
        );
        Ok(build_report(visitor))
    }
}

impl Default for PythonAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse Python source code into a tree-sitter syntax tree.
///
/// tree-sitter recovers from malformed input by inserting error nodes
/// rather than failing outright, so the resulting tree is scanned for the
/// first such node and surfaced as a parse failure with its location.
pub fn parse_source(source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    let language: TsLanguage = tree_sitter_python::LANGUAGE.into();
    parser.set_language(&language)?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::parse(1, 1, "parser produced no syntax tree"))?;

    if tree.root_node().has_error() {
        let (line, column, message) = first_syntax_error(tree.root_node());
        return Err(Error::parse(line, column, message));
    }

    Ok(tree)
}

/// Locate the first error or missing node in a tree that failed to parse.
fn first_syntax_error(node: Node) -> (usize, usize, String) {
    if node.is_error() {
        return (node_line(&node), node_column(&node), "invalid syntax".to_string());
    }
    if node.is_missing() {
        return (
            node_line(&node),
            node_column(&node),
            format!("missing {}", node.kind()),
        );
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            return first_syntax_error(child);
        }
    }
    (node_line(&node), node_column(&node), "invalid syntax".to_string())
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    let start = node.start_byte();
    let end = node.end_byte();
    &source[start..end]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
pub fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}
