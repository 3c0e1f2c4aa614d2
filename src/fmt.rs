use crate::{Graph, Node};

use std::fmt::Display;

mod dot {
    use crate::{Graph, Node, NodeSet};
    use std::fmt::Display;

    fn write_header(name: &str, out: &mut String) {
        out.push_str("digraph ");
        out.push_str(name);
        out.push_str(" {\n");
    }

    fn write_footer(out: &mut String) {
        out.push_str("}\n");
    }

    fn quoted(label: impl Display) -> String {
        format!("\"{}\"", label.to_string().replace('"', "\\\""))
    }

    pub fn write<L: Display>(g: &Graph<L>, path: &[Node], out: &mut String) {
        write_header("G", out);

        let mut on_path = NodeSet::with_len(g.len());
        for &n in path {
            on_path.add(n);
        }

        for n in g.nodes() {
            let style = if on_path.has(n) { " [color = red]" } else { "" };
            out.push_str(&format!("{}{};\n", quoted(g.label(n)), style));
        }

        for n in g.nodes() {
            for e in g.edges(n) {
                let on_path = path.windows(2).any(|w| w[0] == n && w[1] == e.node);
                out.push_str(&format!(
                    "{} -> {} [label = \"{}\"{}];\n",
                    quoted(g.label(n)),
                    quoted(g.label(e.node)),
                    e.weight,
                    if on_path { ", color = red" } else { "" }
                ));
            }
        }

        write_footer(out);
    }
}

/// Render the graph in Graphviz dot format.
pub fn to_dot<L: Display>(g: &Graph<L>) -> String {
    to_dot_with_path(g, &[])
}

/// Like [`to_dot`], with the nodes and edges of `path` drawn in red.
pub fn to_dot_with_path<L: Display>(g: &Graph<L>, path: &[Node]) -> String {
    let mut out = String::new();
    dot::write(g, path, &mut out);
    out
}
