//! # Sentaku - Multi Conditional Select Lowering Engine
//!
//! **Sentaku** implements a "Multi Conditional Select" node for visual
//! scripting graphs: given a default value and a variable number of
//! (option, condition) pairs, the node evaluates to the first option whose
//! paired condition is true, falling back to the default.
//!
//! Pure (non-exec) nodes in the target execution model cannot branch, so the
//! node is not executed directly. At lowering time it is expanded into a
//! small DAG of non-branching primitives — array construction, array search,
//! integer equality, and two chained select operations — that reproduce
//! "first true condition wins, leftmost priority" semantics.
//!
//! ## Core Workflow
//!
//! 1. **Spawn**: drop a [`node::MultiConditionalSelect`] into a [`graph::Graph`];
//!    it allocates a default pin, two case pairs, and a result pin.
//! 2. **Edit**: add or remove case pairs; the layout stays
//!    `[Default][options][conditions][Return Value]`.
//! 3. **Connect**: the first link to any non-condition pin fixes the node's
//!    wildcard pins to the connected type, exactly once.
//! 4. **Lower**: [`expand::expand_node`] rewrites the node into the primitive
//!    subgraph and fully disconnects it.
//! 5. **Evaluate**: [`evaluator::Evaluator`] computes the lowered result.
//!
//! ## Quick Start
//!
//! ```rust
//! use sentaku::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut graph = Graph::new();
//!     let node = MultiConditionalSelect::spawn(&mut graph);
//!
//!     // The first typed connection fixes every wildcard pin to String.
//!     let source = graph.add_literal(
//!         PinType::of(PinCategory::String),
//!         Value::String("blue".to_string()),
//!     );
//!     let default_pin = node.default_option_pin(&graph).expect("allocated");
//!     graph.try_create_link(source, default_pin)?;
//!
//!     // Drive the options and conditions through their pin defaults.
//!     let pairs = node.case_pin_pairs(&graph);
//!     graph.try_set_default_value(pairs[0].0, "red")?;
//!     graph.try_set_default_value(pairs[0].1, "false")?;
//!     graph.try_set_default_value(pairs[1].0, "green")?;
//!     graph.try_set_default_value(pairs[1].1, "true")?;
//!
//!     // Lower the node and evaluate the primitive subgraph it left behind.
//!     let expanded = expand_node(&mut graph, &node)?;
//!     let result = Evaluator::new(&graph).eval_pin(expanded.result_pin)?;
//!     assert_eq!(result, Value::String("green".to_string()));
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod evaluator;
pub mod expand;
pub mod graph;
pub mod node;
pub mod prelude;
