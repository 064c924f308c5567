//! Reconstruction support: snapshot the resolved pin types, rebuild fresh.
//!
//! On a host reload the node's pins are recreated from scratch. The only
//! state worth carrying over is the resolved type of the previous default
//! pin (by stable-name lookup) and the links, which are migrated onto the
//! fresh pins of the same names.

use super::{DEFAULT_OPTION_PIN_NAME, MultiConditionalSelect};
use crate::graph::{Graph, NodeId, PinId, PinType};
use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// Name → declared type map captured from an outgoing pin set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PinTypeSnapshot {
    types: AHashMap<String, PinType>,
}

impl PinTypeSnapshot {
    pub fn capture(graph: &Graph, node: NodeId) -> Self {
        let mut types = AHashMap::new();
        for &pin in graph.node_pins(node) {
            let pin = graph.pin(pin);
            types.insert(pin.name.clone(), pin.pin_type);
        }
        Self { types }
    }

    pub fn pin_type(&self, name: &str) -> Option<PinType> {
        self.types.get(name).copied()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl MultiConditionalSelect {
    /// Rebuilds the pin set from scratch, preserving the pair count, the
    /// resolved type of the previous default pin, and all links.
    ///
    /// The previous type is copied onto the new default, return-value and
    /// option pins; condition pins are never type-copied since their type is
    /// fixed at Boolean. Old pins are left retired in the arena.
    pub fn reallocate_pins_during_reconstruction(&self, graph: &mut Graph) {
        let node = self.node_id();
        let snapshot = PinTypeSnapshot::capture(graph, node);
        let pair_count = match self.case_pin_count(graph) {
            0 => 2,
            count => count,
        };

        let old_pins = graph.detach_node_pins(node);
        debug!(
            "node {}: reconstructing {} pins ({} case pairs)",
            node,
            old_pins.len(),
            pair_count
        );

        self.create_default_option_pin(graph);
        self.create_return_value_pin(graph);
        for index in 0..pair_count {
            self.add_case_pair(graph, index);
        }

        if let Some(old_type) = snapshot.pin_type(DEFAULT_OPTION_PIN_NAME) {
            let mut retyped: Vec<PinId> = Vec::new();
            retyped.extend(self.default_option_pin(graph));
            retyped.extend(self.return_value_pin(graph));
            retyped.extend(self.case_pin_pairs(graph).into_iter().map(|(option, _)| option));
            for pin in retyped {
                graph.set_pin_type(pin, old_type);
                graph.reset_to_autogenerated_default(pin);
            }
        }

        for old in old_pins {
            let name = graph.pin(old).name.clone();
            match graph.find_pin(node, &name) {
                Some(new) => graph.move_pin_links(old, new),
                None => graph.break_pin_links(old),
            }
        }

        graph.mark_modified();
    }
}
