use crate::graph::{NodeId, PinDirection, Value};
use thiserror::Error;

/// Contract violations in the pin set or the graph arena.
///
/// These indicate a defect in pin-set management (a pin that should exist does
/// not, an index that should be valid is not). They are not recoverable
/// runtime conditions and never occur in correct operation.
#[derive(Error, Debug, Clone)]
pub enum GraphError {
    #[error("Node {node_id} has no pin named '{pin_name}'")]
    PinNotFound { node_id: NodeId, pin_name: String },

    #[error("Case pair {case_index} is out of range for a node with {pair_count} pairs")]
    CaseIndexOutOfRange {
        case_index: usize,
        pair_count: usize,
    },

    #[error("A Multi Conditional Select keeps at least one case pair")]
    CannotRemoveLastPair,

    #[error("'{text}' is not a valid default literal for a {pin_type} pin")]
    InvalidDefaultLiteral { pin_type: String, text: String },
}

/// Reasons a connection attempt is rejected.
///
/// Recoverable: the link is simply not made, and neither the pin set nor any
/// existing link changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("Can't connect with Exec pin")]
    ExecPin,

    #[error("Both pins are on the same node")]
    SameNode,

    #[error("Two {0:?} pins cannot be connected")]
    SameDirection(PinDirection),

    #[error("A {my_type} pin is not compatible with a {other_type} pin")]
    IncompatibleTypes {
        my_type: String,
        other_type: String,
    },
}

/// Errors that can occur while evaluating a lowered subgraph.
#[derive(Error, Debug, Clone)]
pub enum EvaluationError {
    #[error(
        "Type mismatch during operation '{operation}': expected {expected}, but found value '{found}'"
    )]
    TypeMismatch {
        operation: String,
        expected: String,
        found: Value,
    },

    #[error("Node {0} is a Multi Conditional Select and must be expanded before evaluation")]
    UnexpandedNode(NodeId),

    #[error("Node {node_id} is missing its '{pin_name}' pin")]
    MalformedNode { node_id: NodeId, pin_name: String },
}
