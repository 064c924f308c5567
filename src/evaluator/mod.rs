//! Demand-driven evaluation of lowered pure-expression subgraphs.
//!
//! The host evaluates the primitive DAG at runtime; this evaluator mirrors
//! that so the semantics of an expansion can be checked in-process. It is
//! strictly single-threaded: pin sets are only read on the editor/compiler
//! thread.

mod engine;

use crate::error::EvaluationError;
use crate::graph::{Graph, PinId, Value};
use engine::PinEngine;

/// Evaluates pins of a graph whose custom nodes have been expanded.
pub struct Evaluator<'a> {
    graph: &'a Graph,
}

impl<'a> Evaluator<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Evaluates the expression DAG feeding `pin`.
    ///
    /// An input pin resolves through its first link, falling back to its
    /// literal default; an output pin evaluates its owning node's operation.
    pub fn eval_pin(&self, pin: PinId) -> Result<Value, EvaluationError> {
        PinEngine::new(self.graph).evaluate(pin)
    }
}
