//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the sentaku crate so a host
//! (or a test) can pull in the whole surface with one `use`.

// Graph model
pub use crate::graph::{
    CreatePinParams, DisplaySubgraph, Graph, Node, NodeId, NodeKind, Pin, PinCategory,
    PinContainer, PinDirection, PinId, PinType, Value,
};

// The custom node and its pin set
pub use crate::node::{CasePinPair, MultiConditionalSelect, PinTypeSnapshot};

// Lowering
pub use crate::expand::{
    ArrayFindNode, ExpandedSelect, IntEqualNode, MakeArrayNode, SelectNode, expand_node,
};

// Evaluation
pub use crate::evaluator::Evaluator;

// Error types
pub use crate::error::{ConnectionError, EvaluationError, GraphError};
