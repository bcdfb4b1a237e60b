//! The printable diagram generator: one line per node, children indented
//! under their parent with continuation bars, colors spelled out.

use std::fmt::{Debug, Write};

use crate::node::{Color, Node, Subtree};

/// Renders `root` as an indented diagram. The root comes first; each
/// child line is tagged `L` or `R` and indented one step further, with a
/// `|` bar kept open while a right sibling is still pending.
pub(crate) fn render<R: Debug>(root: &Subtree<R>) -> String {
    let mut out = String::new();
    match root.as_node() {
        None => out.push_str("(empty)\n"),
        Some(n) => line(n, "", "", &mut out),
    }
    out
}

fn line<R: Debug>(node: &Node<R>, indent: &str, tag: &str, out: &mut String) {
    let color = match node.color {
        Color::Red => "red",
        Color::Black => "black",
    };
    let _ = writeln!(out, "{indent}+- {:?} ({color}){tag}", node.record);

    if let Some(left) = node.left.as_node() {
        let bar = if node.right.as_node().is_some() { "|  " } else { "   " };
        line(left, &format!("{indent}{bar}"), " [L]", out);
    }
    if let Some(right) = node.right.as_node() {
        line(right, &format!("{indent}   "), " [R]", out);
    }
}
