//! Single-pass structural walker over a parsed Python syntax tree.
//!
//! The walker visits every node exactly once, depth-first, and records the
//! signals the classifier consumes: loop nesting, self-recursive call sites
//! and bulk collection literals. Scoped state is restored on the way out of
//! each construct, so sibling subtrees never see each other's nesting.

use crate::analyzers::python::{node_line, node_text};
use crate::core::types::Flag;
use tree_sitter::Node;

/// Node kinds the walker reacts to. Everything else descends generically so
/// constructs nested inside conditionals, try blocks, with blocks and
/// decorated definitions are still discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    ForLoop,
    WhileLoop,
    FunctionDef,
    Call,
    ListLiteral,
    DictLiteral,
    Other,
}

fn classify(node: &Node) -> NodeKind {
    match node.kind() {
        "for_statement" => NodeKind::ForLoop,
        "while_statement" => NodeKind::WhileLoop,
        "function_definition" => NodeKind::FunctionDef,
        "call" => NodeKind::Call,
        "list" => NodeKind::ListLiteral,
        "dictionary" => NodeKind::DictLiteral,
        _ => NodeKind::Other,
    }
}

/// Mutable traversal state. One instance per analyzed module; the public
/// counters are read by the classifier once the walk completes.
#[derive(Debug, Default)]
pub struct ComplexityVisitor {
    /// Loop nesting depth on the path from the root to the current node
    loop_depth: u32,
    /// High-water mark of `loop_depth` across the whole walk
    pub max_loop_depth: u32,
    /// Name of the innermost enclosing function definition, if any
    current_function: Option<String>,
    /// Call sites whose bare callee name matches the enclosing function
    pub recursive_calls: u32,
    /// List and dictionary literals seen anywhere in the tree
    pub bulk_literals: u32,
    /// Flagged locations in depth-first visit order
    pub flags: Vec<Flag>,
}

impl ComplexityVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `node` and every descendant once, depth-first.
    pub fn visit(&mut self, node: Node, source: &str) {
        match classify(&node) {
            NodeKind::ForLoop => self.enter_loop(node, source, "Nested loop detected"),
            NodeKind::WhileLoop => self.enter_loop(node, source, "Nested while loop detected"),
            NodeKind::FunctionDef => self.enter_function(node, source),
            NodeKind::Call => self.record_call(node, source),
            NodeKind::ListLiteral | NodeKind::DictLiteral => {
                self.bulk_literals += 1;
                self.visit_children(node, source);
            }
            NodeKind::Other => self.visit_children(node, source),
        }
    }

    fn visit_children(&mut self, node: Node, source: &str) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child, source);
        }
    }

    fn enter_loop(&mut self, node: Node, source: &str, label: &str) {
        self.loop_depth += 1;
        self.max_loop_depth = self.max_loop_depth.max(self.loop_depth);
        if self.loop_depth >= 2 {
            self.flags.push(Flag::new(
                node_line(&node),
                format!("{label} (Depth {})", self.loop_depth),
            ));
        }
        self.visit_children(node, source);
        self.loop_depth -= 1;
    }

    fn enter_function(&mut self, node: Node, source: &str) {
        // A nested definition shadows the outer name only for the extent of
        // its own body; the previous name comes back on exit.
        let enclosing = self.current_function.take();
        self.current_function = declared_name(&node, source);
        self.visit_children(node, source);
        self.current_function = enclosing;
    }

    fn record_call(&mut self, node: Node, source: &str) {
        if let (Some(callee), Some(current)) =
            (bare_callee(&node, source), self.current_function.as_deref())
        {
            if callee == current {
                self.recursive_calls += 1;
                self.flags
                    .push(Flag::new(node_line(&node), "Recursive call detected"));
            }
        }
        // Argument expressions may hold further calls and literals.
        self.visit_children(node, source);
    }
}

fn declared_name(node: &Node, source: &str) -> Option<String> {
    node.child_by_field_name("name")
        .map(|name| node_text(&name, source).to_string())
}

/// The callee name, but only when the callee is a bare identifier.
/// Attribute access and computed call targets are never treated as
/// candidates for recursion.
fn bare_callee<'a>(node: &Node, source: &'a str) -> Option<&'a str> {
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "identifier" {
        return None;
    }
    Some(node_text(&callee, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::python::parse_source;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn walk(source: &str) -> ComplexityVisitor {
        let tree = parse_source(source).unwrap();
        let mut visitor = ComplexityVisitor::new();
        visitor.visit(tree.root_node(), source);
        visitor
    }

    #[test]
    fn loop_depth_high_water_mark_tracks_nesting() {
        let visitor = walk(indoc! {"
            for i in range(3):
                for j in range(3):
                    for k in range(3):
                        total = i + j + k
        "});

        assert_eq!(visitor.max_loop_depth, 3);
        assert_eq!(
            visitor.flags,
            vec![
                Flag::new(2, "Nested loop detected (Depth 2)"),
                Flag::new(3, "Nested loop detected (Depth 3)"),
            ]
        );
    }

    #[test]
    fn sibling_loops_do_not_stack() {
        let visitor = walk(indoc! {"
            for i in range(3):
                total = i
            for j in range(3):
                total = j
        "});

        assert_eq!(visitor.max_loop_depth, 1);
        assert!(visitor.flags.is_empty());
    }

    #[test]
    fn depth_is_restored_after_a_nested_block() {
        // The second outer loop must re-enter at depth 1, not depth 2.
        let visitor = walk(indoc! {"
            for i in range(3):
                for j in range(3):
                    total = i * j
            for k in range(3):
                total = k
        "});

        assert_eq!(visitor.max_loop_depth, 2);
        assert_eq!(visitor.flags.len(), 1);
    }

    #[test]
    fn while_loops_use_their_own_phrasing() {
        let visitor = walk(indoc! {"
            while a:
                while b:
                    a -= 1
        "});

        assert_eq!(
            visitor.flags,
            vec![Flag::new(2, "Nested while loop detected (Depth 2)")]
        );
    }

    #[test]
    fn mixed_loop_kinds_share_one_depth_counter() {
        let visitor = walk(indoc! {"
            for i in range(3):
                while i:
                    i -= 1
        "});

        assert_eq!(visitor.max_loop_depth, 2);
        assert_eq!(
            visitor.flags,
            vec![Flag::new(2, "Nested while loop detected (Depth 2)")]
        );
    }

    #[test]
    fn bare_self_call_is_recursive() {
        let visitor = walk(indoc! {"
            def countdown(n):
                if n > 0:
                    countdown(n - 1)
        "});

        assert_eq!(visitor.recursive_calls, 1);
        assert_eq!(visitor.flags, vec![Flag::new(3, "Recursive call detected")]);
    }

    #[test]
    fn attribute_calls_are_never_recursive() {
        let visitor = walk(indoc! {"
            def helper(obj):
                obj.helper(1)
        "});

        assert_eq!(visitor.recursive_calls, 0);
    }

    #[test]
    fn calls_outside_any_function_are_not_recursive() {
        let visitor = walk("print(1)\nprint(2)\n");
        assert_eq!(visitor.recursive_calls, 0);
    }

    #[test]
    fn nested_definition_shadows_the_outer_name() {
        // The call to `outer` sits inside `inner`, so it does not count.
        let visitor = walk(indoc! {"
            def outer(n):
                def inner(k):
                    return outer(k)
                return inner(n)
        "});

        assert_eq!(visitor.recursive_calls, 0);
    }

    #[test]
    fn outer_name_is_restored_after_a_nested_definition() {
        // Once `inner` is done, calls matching `outer` count again.
        let visitor = walk(indoc! {"
            def outer(n):
                def inner(k):
                    return k
                return outer(n - 1)
        "});

        assert_eq!(visitor.recursive_calls, 1);
        assert_eq!(visitor.flags, vec![Flag::new(4, "Recursive call detected")]);
    }

    #[test]
    fn calls_nested_in_arguments_are_visited() {
        let visitor = walk(indoc! {"
            def fib(n):
                return fib(fib(n - 1) - 1)
        "});

        assert_eq!(visitor.recursive_calls, 2);
    }

    #[test]
    fn list_and_dict_literals_count_anywhere() {
        let visitor = walk(indoc! {"
            xs = [1, 2, 3]
            def build():
                return {'a': 1}
            for i in range(2):
                ys = []
        "});

        assert_eq!(visitor.bulk_literals, 3);
    }

    #[test]
    fn comprehensions_are_not_bulk_literals() {
        let visitor = walk("xs = [i for i in range(3)]\n");
        assert_eq!(visitor.bulk_literals, 0);
        assert_eq!(visitor.max_loop_depth, 0);
    }

    #[test]
    fn loops_inside_conditionals_are_discovered() {
        let visitor = walk(indoc! {"
            if flag:
                try:
                    for i in range(3):
                        with open('f') as f:
                            for line in f:
                                print(line)
                except ValueError:
                    pass
        "});

        assert_eq!(visitor.max_loop_depth, 2);
        assert_eq!(visitor.flags, vec![Flag::new(5, "Nested loop detected (Depth 2)")]);
    }
}
