use super::{Graph, PinDirection, PinId};
use std::fmt;

/// A wrapper to display the expression DAG feeding a pin as a tree.
/// This is the main debugging aid for inspecting an expanded subgraph.
pub struct DisplaySubgraph<'a> {
    pub graph: &'a Graph,
    pub root: PinId,
}

impl<'a> fmt::Display for DisplaySubgraph<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_as_tree(self.root, f, "", true)
    }
}

impl<'a> DisplaySubgraph<'a> {
    /// Recursively formats the DAG. An input pin either resolves through its
    /// first link or prints its literal default; an output pin prints its
    /// owning node and recurses into that node's inputs.
    fn fmt_as_tree(
        &self,
        pin_id: PinId,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        is_last: bool,
    ) -> fmt::Result {
        let node_marker = if is_last { "└── " } else { "├── " };
        write!(f, "{}{}", prefix, node_marker)?;

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });

        let pin = self.graph.pin(pin_id);
        match pin.direction {
            PinDirection::Input => match pin.links.first() {
                Some(&source) => {
                    let source_kind = self.graph.node(self.graph.pin(source).node).kind;
                    writeln!(f, "{} ← {:?}", pin.name, source_kind)?;
                    self.fmt_node_inputs(self.graph.pin(source).node, f, &child_prefix)
                }
                None => writeln!(f, "{}: {}", pin.name, pin.default_value),
            },
            PinDirection::Output => {
                let kind = self.graph.node(pin.node).kind;
                writeln!(f, "{:?}.{}", kind, pin.name)?;
                self.fmt_node_inputs(pin.node, f, &child_prefix)
            }
        }
    }

    fn fmt_node_inputs(
        &self,
        node: super::NodeId,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
    ) -> fmt::Result {
        let inputs: Vec<PinId> = self
            .graph
            .node_pins(node)
            .iter()
            .copied()
            .filter(|&pin| self.graph.pin(pin).is_input())
            .collect();
        for (index, input) in inputs.iter().enumerate() {
            self.fmt_as_tree(*input, f, prefix, index + 1 == inputs.len())?;
        }
        Ok(())
    }
}
