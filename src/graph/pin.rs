use super::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index key of a node in the graph arena.
pub type NodeId = usize;
/// Index key of a pin in the graph arena. Stable for the life of the graph;
/// pin insertion and retirement never invalidate other pins' keys.
pub type PinId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinDirection {
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinCategory {
    Wildcard,
    Exec,
    Boolean,
    Integer,
    Number,
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinContainer {
    None,
    Array,
}

/// The declared type of a pin: a category plus an optional container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinType {
    pub category: PinCategory,
    pub container: PinContainer,
}

impl PinType {
    pub const fn of(category: PinCategory) -> Self {
        Self {
            category,
            container: PinContainer::None,
        }
    }

    pub const fn array_of(category: PinCategory) -> Self {
        Self {
            category,
            container: PinContainer::Array,
        }
    }

    pub const fn wildcard() -> Self {
        Self::of(PinCategory::Wildcard)
    }

    pub const fn boolean() -> Self {
        Self::of(PinCategory::Boolean)
    }

    pub const fn integer() -> Self {
        Self::of(PinCategory::Integer)
    }

    pub fn is_wildcard(&self) -> bool {
        self.category == PinCategory::Wildcard
    }

    pub fn is_exec(&self) -> bool {
        self.category == PinCategory::Exec
    }
}

impl fmt::Display for PinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.container {
            PinContainer::None => write!(f, "{:?}", self.category),
            PinContainer::Array => write!(f, "Array of {:?}", self.category),
        }
    }
}

/// A typed connection point on a node.
#[derive(Debug, Clone)]
pub struct Pin {
    /// The owning node.
    pub node: NodeId,
    /// Stable identifier, unique within the owning node.
    pub name: String,
    /// Display label shown by the editor; `None` falls back to `name`.
    pub friendly_name: Option<String>,
    pub direction: PinDirection,
    pub pin_type: PinType,
    /// Literal used when the pin has no links.
    pub default_value: Value,
    /// Linked peer pins, symmetric with the peers' own lists.
    pub links: Vec<PinId>,
}

impl Pin {
    pub fn is_input(&self) -> bool {
        self.direction == PinDirection::Input
    }

    pub fn is_output(&self) -> bool {
        self.direction == PinDirection::Output
    }
}

/// Optional placement arguments for pin creation.
#[derive(Debug, Clone, Default)]
pub struct CreatePinParams {
    /// Ordinal position within the node's pin list; appended when `None`.
    pub index: Option<usize>,
    pub friendly_name: Option<String>,
}
