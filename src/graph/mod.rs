//! In-memory model of the host graph contract.
//!
//! The lowering core only needs a small capability surface from its host:
//! create a pin at an ordinal position, find a pin by stable name, link two
//! pins, migrate all links from one pin to another, spawn a node of a given
//! kind, and fully disconnect a node. `Graph` is that surface made concrete,
//! an arena of nodes and pins addressed by index keys.

pub mod display;
pub mod pin;
pub mod value;

pub use display::*;
pub use pin::*;
pub use value::*;

use crate::error::{ConnectionError, GraphError};
use crate::node::MultiConditionalSelect;
use log::trace;

/// The closed set of node kinds the lowering engine works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The custom node; exists only to be expanded.
    MultiConditionalSelect,
    /// N-way value multiplexer driven by an Integer or Boolean index.
    Select,
    /// Builds an array from N element inputs.
    MakeArray,
    /// First index of an item in an array, or -1.
    ArrayFind,
    /// Integer equality test.
    IntEqual,
    /// Host-side value source with a single typed output pin.
    Literal,
}

/// A node in the graph: a kind tag plus an ordered pin list.
///
/// The pin list order is the node's ordinal pin layout; everything that cares
/// about "position 0" or "the final position" reads it from here.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub pins: Vec<PinId>,
}

/// Arena of nodes and pins.
///
/// Retired pins stay in the arena (detached from their node and unlinked), so
/// existing `PinId`s are never invalidated. The `revision` counter stands in
/// for the host's document-modified notification.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    pins: Vec<Pin>,
    revision: u64,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn_node(&mut self, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind,
            pins: Vec::new(),
        });
        id
    }

    pub fn node(&self, node: NodeId) -> &Node {
        &self.nodes[node]
    }

    pub fn pin(&self, pin: PinId) -> &Pin {
        &self.pins[pin]
    }

    pub fn pin_mut(&mut self, pin: PinId) -> &mut Pin {
        &mut self.pins[pin]
    }

    /// Creates a pin on `node`, inserted at the ordinal position from
    /// `params` (appended when unset).
    pub fn create_pin(
        &mut self,
        node: NodeId,
        direction: PinDirection,
        pin_type: PinType,
        name: impl Into<String>,
        params: CreatePinParams,
    ) -> PinId {
        let id = self.pins.len();
        self.pins.push(Pin {
            node,
            name: name.into(),
            friendly_name: params.friendly_name,
            direction,
            pin_type,
            default_value: Value::default_for(pin_type),
            links: Vec::new(),
        });
        let pins = &mut self.nodes[node].pins;
        let index = params.index.unwrap_or(pins.len()).min(pins.len());
        pins.insert(index, id);
        id
    }

    /// Looks a pin up by its stable name within `node`.
    pub fn find_pin(&self, node: NodeId, name: &str) -> Option<PinId> {
        self.nodes[node]
            .pins
            .iter()
            .copied()
            .find(|&pin| self.pins[pin].name == name)
    }

    /// The node's pins in ordinal layout order.
    pub fn node_pins(&self, node: NodeId) -> &[PinId] {
        &self.nodes[node].pins
    }

    /// Spawns a value-source node with a single typed output pin. Hosts use
    /// these to feed concrete values into wildcard pins.
    pub fn add_literal(&mut self, pin_type: PinType, value: Value) -> PinId {
        let node = self.spawn_node(NodeKind::Literal);
        let pin = self.create_pin(
            node,
            PinDirection::Output,
            pin_type,
            "Value",
            CreatePinParams::default(),
        );
        self.pins[pin].default_value = value;
        pin
    }

    pub fn set_pin_type(&mut self, pin: PinId, pin_type: PinType) {
        self.pins[pin].pin_type = pin_type;
    }

    /// Resets a pin's literal to the canonical default of its declared type.
    pub fn reset_to_autogenerated_default(&mut self, pin: PinId) {
        self.pins[pin].default_value = Value::default_for(self.pins[pin].pin_type);
    }

    /// Sets a pin's literal default from host-provided text, validated
    /// against the pin's declared type.
    pub fn try_set_default_value(&mut self, pin: PinId, text: &str) -> Result<(), GraphError> {
        let pin_type = self.pins[pin].pin_type;
        let value = Value::parse_for(pin_type, text).ok_or_else(|| {
            GraphError::InvalidDefaultLiteral {
                pin_type: pin_type.to_string(),
                text: text.to_string(),
            }
        })?;
        self.pins[pin].default_value = value;
        Ok(())
    }

    /// Links two pins without validation. Internal wiring (expansion) uses
    /// this directly; user edits go through [`Graph::try_create_link`].
    pub fn link(&mut self, a: PinId, b: PinId) {
        if !self.pins[a].links.contains(&b) {
            self.pins[a].links.push(b);
        }
        if !self.pins[b].links.contains(&a) {
            self.pins[b].links.push(a);
        }
    }

    /// Validates and creates a link, then notifies any custom node whose pin
    /// list changed. On rejection nothing changes.
    pub fn try_create_link(&mut self, a: PinId, b: PinId) -> Result<(), ConnectionError> {
        if let Some(reason) = self.connection_disallowed(a, b) {
            return Err(reason);
        }
        self.link(a, b);
        for pin in [a, b] {
            let owner = self.pins[pin].node;
            if self.nodes[owner].kind == NodeKind::MultiConditionalSelect {
                MultiConditionalSelect::attach(owner).pin_connection_list_changed(self, pin);
            }
        }
        Ok(())
    }

    /// Checks whether a connection would be rejected, consulting the custom
    /// node's veto before the base schema rules. The node veto never hides a
    /// schema reason: both are a disjunction.
    pub fn connection_disallowed(&self, a: PinId, b: PinId) -> Option<ConnectionError> {
        for (mine, other) in [(a, b), (b, a)] {
            let owner = self.pins[mine].node;
            if self.nodes[owner].kind == NodeKind::MultiConditionalSelect {
                return MultiConditionalSelect::attach(owner)
                    .connection_disallowed(self, mine, other);
            }
        }
        self.schema_disallowed(a, b)
    }

    /// Base schema rules every node is subject to.
    pub fn schema_disallowed(&self, a: PinId, b: PinId) -> Option<ConnectionError> {
        let (pin_a, pin_b) = (&self.pins[a], &self.pins[b]);
        if pin_a.node == pin_b.node {
            return Some(ConnectionError::SameNode);
        }
        if pin_a.direction == pin_b.direction {
            return Some(ConnectionError::SameDirection(pin_a.direction));
        }
        if !pin_a.pin_type.is_wildcard()
            && !pin_b.pin_type.is_wildcard()
            && pin_a.pin_type != pin_b.pin_type
        {
            return Some(ConnectionError::IncompatibleTypes {
                my_type: pin_a.pin_type.to_string(),
                other_type: pin_b.pin_type.to_string(),
            });
        }
        None
    }

    /// Migrates all links from one pin onto another. When the source pin is
    /// unlinked its literal default is carried over instead, which is how the
    /// host's own move-links helper behaves.
    pub fn move_pin_links(&mut self, from: PinId, to: PinId) {
        let peers = std::mem::take(&mut self.pins[from].links);
        if peers.is_empty() {
            self.pins[to].default_value = self.pins[from].default_value.clone();
            return;
        }
        for peer in peers {
            for link in self.pins[peer].links.iter_mut() {
                if *link == from {
                    *link = to;
                }
            }
            if !self.pins[to].links.contains(&peer) {
                self.pins[to].links.push(peer);
            }
        }
    }

    /// Severs every link of a single pin.
    pub fn break_pin_links(&mut self, pin: PinId) {
        let peers = std::mem::take(&mut self.pins[pin].links);
        for peer in peers {
            self.pins[peer].links.retain(|&link| link != pin);
        }
    }

    /// Fully disconnects a node, leaving it inert in the graph. The node is
    /// never deleted; unused-node collection is the host's business.
    pub fn break_all_node_links(&mut self, node: NodeId) {
        for pin in self.nodes[node].pins.clone() {
            self.break_pin_links(pin);
        }
    }

    /// Unlinks a pin and detaches it from its node's ordinal layout. The
    /// arena entry stays behind so other `PinId`s remain valid.
    pub fn retire_pin(&mut self, pin: PinId) {
        self.break_pin_links(pin);
        let node = self.pins[pin].node;
        self.nodes[node].pins.retain(|&p| p != pin);
    }

    /// Clears a node's ordinal pin layout without touching links; used by
    /// reconstruction, which migrates links to the freshly created pins by
    /// stable name before retiring the old set.
    pub fn detach_node_pins(&mut self, node: NodeId) -> Vec<PinId> {
        std::mem::take(&mut self.nodes[node].pins)
    }

    /// Marks the document as modified. Hosts watch the revision counter for
    /// editor refresh and undo-stack integration.
    pub fn mark_modified(&mut self) {
        self.revision += 1;
        trace!("document modified (revision {})", self.revision);
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
