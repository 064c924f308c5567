//! Pin contracts for the primitive node kinds spawned during expansion.
//!
//! Each kind has a fixed input/output port contract addressed by pin name,
//! never by runtime type inspection. `Select` and `MakeArray` can grow extra
//! input slots to match the case-pair count.

use crate::graph::{
    CreatePinParams, Graph, NodeId, NodeKind, PinCategory, PinDirection, PinId, PinType,
};

pub const SELECT_OPTION_PIN_PREFIX: &str = "Option ";
pub const SELECT_INDEX_PIN_NAME: &str = "Index";
pub const PRIMITIVE_RETURN_VALUE_PIN_NAME: &str = "Return Value";
pub const MAKE_ARRAY_OUTPUT_PIN_NAME: &str = "Array";
pub const ARRAY_FIND_TARGET_PIN_NAME: &str = "Target Array";
pub const ARRAY_FIND_ITEM_PIN_NAME: &str = "Item To Find";
pub const INT_EQUAL_A_PIN_NAME: &str = "A";
pub const INT_EQUAL_B_PIN_NAME: &str = "B";

/// N-way value multiplexer. An Integer index addresses `Option <i>` directly;
/// a Boolean index addresses option 0 (false) or option 1 (true).
#[derive(Debug, Clone, Copy)]
pub struct SelectNode {
    node: NodeId,
}

impl SelectNode {
    /// Spawns a Select with two option slots and the given index category.
    pub fn spawn(graph: &mut Graph, index_category: PinCategory) -> Self {
        let node = graph.spawn_node(NodeKind::Select);
        let this = Self { node };
        for index in 0..2 {
            graph.create_pin(
                node,
                PinDirection::Input,
                PinType::wildcard(),
                option_pin_name(index),
                CreatePinParams::default(),
            );
        }
        graph.create_pin(
            node,
            PinDirection::Input,
            PinType::of(index_category),
            SELECT_INDEX_PIN_NAME,
            CreatePinParams::default(),
        );
        graph.create_pin(
            node,
            PinDirection::Output,
            PinType::wildcard(),
            PRIMITIVE_RETURN_VALUE_PIN_NAME,
            CreatePinParams::default(),
        );
        this
    }

    /// Wraps an existing node id. The caller guarantees the node kind.
    pub fn attach(node: NodeId) -> Self {
        Self { node }
    }

    pub fn node_id(&self) -> NodeId {
        self.node
    }

    /// Appends one option slot, inserted before the index pin and typed like
    /// the existing options.
    pub fn add_input_pin(&self, graph: &mut Graph) -> PinId {
        let options = self.option_pins(graph);
        let pin_type = options
            .first()
            .map(|&pin| graph.pin(pin).pin_type)
            .unwrap_or(PinType::wildcard());
        graph.create_pin(
            self.node,
            PinDirection::Input,
            pin_type,
            option_pin_name(options.len()),
            CreatePinParams {
                index: Some(options.len()),
                ..Default::default()
            },
        )
    }

    /// Copies `reference`'s type onto every option pin and the return pin.
    pub fn change_pin_type(&self, graph: &mut Graph, reference: PinId) {
        let pin_type = graph.pin(reference).pin_type;
        let mut pins = self.option_pins(graph);
        pins.extend(self.return_value_pin(graph));
        for pin in pins {
            graph.set_pin_type(pin, pin_type);
            graph.reset_to_autogenerated_default(pin);
        }
    }

    pub fn option_pins(&self, graph: &Graph) -> Vec<PinId> {
        graph
            .node_pins(self.node)
            .iter()
            .copied()
            .filter(|&pin| graph.pin(pin).name.starts_with(SELECT_OPTION_PIN_PREFIX))
            .collect()
    }

    pub fn index_pin(&self, graph: &Graph) -> Option<PinId> {
        graph.find_pin(self.node, SELECT_INDEX_PIN_NAME)
    }

    pub fn return_value_pin(&self, graph: &Graph) -> Option<PinId> {
        graph.find_pin(self.node, PRIMITIVE_RETURN_VALUE_PIN_NAME)
    }
}

fn option_pin_name(index: usize) -> String {
    format!("{}{}", SELECT_OPTION_PIN_PREFIX, index)
}

/// Builds an array from its element inputs, in slot order.
#[derive(Debug, Clone, Copy)]
pub struct MakeArrayNode {
    node: NodeId,
}

impl MakeArrayNode {
    pub fn spawn(graph: &mut Graph) -> Self {
        let node = graph.spawn_node(NodeKind::MakeArray);
        graph.create_pin(
            node,
            PinDirection::Input,
            PinType::wildcard(),
            element_pin_name(0),
            CreatePinParams::default(),
        );
        graph.create_pin(
            node,
            PinDirection::Output,
            PinType::array_of(PinCategory::Wildcard),
            MAKE_ARRAY_OUTPUT_PIN_NAME,
            CreatePinParams::default(),
        );
        Self { node }
    }

    pub fn attach(node: NodeId) -> Self {
        Self { node }
    }

    pub fn node_id(&self) -> NodeId {
        self.node
    }

    /// Appends one element slot, inserted before the output pin.
    pub fn add_input_pin(&self, graph: &mut Graph) -> PinId {
        let elements = self.input_pins(graph);
        let pin_type = elements
            .first()
            .map(|&pin| graph.pin(pin).pin_type)
            .unwrap_or(PinType::wildcard());
        graph.create_pin(
            self.node,
            PinDirection::Input,
            pin_type,
            element_pin_name(elements.len()),
            CreatePinParams {
                index: Some(elements.len()),
                ..Default::default()
            },
        )
    }

    pub fn input_pins(&self, graph: &Graph) -> Vec<PinId> {
        graph
            .node_pins(self.node)
            .iter()
            .copied()
            .filter(|&pin| graph.pin(pin).is_input())
            .collect()
    }

    pub fn output_pin(&self, graph: &Graph) -> Option<PinId> {
        graph.find_pin(self.node, MAKE_ARRAY_OUTPUT_PIN_NAME)
    }
}

fn element_pin_name(index: usize) -> String {
    format!("[{}]", index)
}

/// First index of an item in an array, or -1 when absent.
#[derive(Debug, Clone, Copy)]
pub struct ArrayFindNode {
    node: NodeId,
}

impl ArrayFindNode {
    pub fn spawn(graph: &mut Graph) -> Self {
        let node = graph.spawn_node(NodeKind::ArrayFind);
        graph.create_pin(
            node,
            PinDirection::Input,
            PinType::array_of(PinCategory::Wildcard),
            ARRAY_FIND_TARGET_PIN_NAME,
            CreatePinParams::default(),
        );
        graph.create_pin(
            node,
            PinDirection::Input,
            PinType::wildcard(),
            ARRAY_FIND_ITEM_PIN_NAME,
            CreatePinParams::default(),
        );
        graph.create_pin(
            node,
            PinDirection::Output,
            PinType::integer(),
            PRIMITIVE_RETURN_VALUE_PIN_NAME,
            CreatePinParams::default(),
        );
        Self { node }
    }

    pub fn attach(node: NodeId) -> Self {
        Self { node }
    }

    pub fn node_id(&self) -> NodeId {
        self.node
    }

    pub fn target_array_pin(&self, graph: &Graph) -> Option<PinId> {
        graph.find_pin(self.node, ARRAY_FIND_TARGET_PIN_NAME)
    }

    pub fn item_to_find_pin(&self, graph: &Graph) -> Option<PinId> {
        graph.find_pin(self.node, ARRAY_FIND_ITEM_PIN_NAME)
    }

    pub fn return_value_pin(&self, graph: &Graph) -> Option<PinId> {
        graph.find_pin(self.node, PRIMITIVE_RETURN_VALUE_PIN_NAME)
    }
}

/// Integer equality test.
#[derive(Debug, Clone, Copy)]
pub struct IntEqualNode {
    node: NodeId,
}

impl IntEqualNode {
    pub fn spawn(graph: &mut Graph) -> Self {
        let node = graph.spawn_node(NodeKind::IntEqual);
        for name in [INT_EQUAL_A_PIN_NAME, INT_EQUAL_B_PIN_NAME] {
            graph.create_pin(
                node,
                PinDirection::Input,
                PinType::integer(),
                name,
                CreatePinParams::default(),
            );
        }
        graph.create_pin(
            node,
            PinDirection::Output,
            PinType::boolean(),
            PRIMITIVE_RETURN_VALUE_PIN_NAME,
            CreatePinParams::default(),
        );
        Self { node }
    }

    pub fn attach(node: NodeId) -> Self {
        Self { node }
    }

    pub fn node_id(&self) -> NodeId {
        self.node
    }

    pub fn a_pin(&self, graph: &Graph) -> Option<PinId> {
        graph.find_pin(self.node, INT_EQUAL_A_PIN_NAME)
    }

    pub fn b_pin(&self, graph: &Graph) -> Option<PinId> {
        graph.find_pin(self.node, INT_EQUAL_B_PIN_NAME)
    }

    pub fn return_value_pin(&self, graph: &Graph) -> Option<PinId> {
        graph.find_pin(self.node, PRIMITIVE_RETURN_VALUE_PIN_NAME)
    }
}
