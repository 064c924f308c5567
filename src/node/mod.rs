//! The Multi Conditional Select node and its dynamic pin set.
//!
//! Given a default value and N (option, condition) pairs, the node evaluates
//! to the first option whose paired condition is true, falling back to the
//! default. The node itself computes nothing: it manages its pins, unifies
//! their types on first connection ([`connection`]), survives host reloads
//! ([`reconstruct`]), and is lowered into primitive pure nodes at compile
//! time ([`crate::expand`]).

pub mod connection;
pub mod reconstruct;

pub use reconstruct::PinTypeSnapshot;

use crate::error::GraphError;
use crate::graph::{
    CreatePinParams, Graph, NodeId, NodeKind, PinDirection, PinId, PinType,
};
use itertools::Itertools;

pub const DEFAULT_OPTION_PIN_NAME: &str = "Default";
pub const RETURN_VALUE_PIN_NAME: &str = "Return Value";
pub const CASE_OPTION_PIN_NAME_PREFIX: &str = "CaseOption";
pub const CASE_CONDITION_PIN_NAME_PREFIX: &str = "CaseCondition";

const OPTION_PIN_FRIENDLY_PREFIX: &str = "Option ";
const CONDITION_PIN_FRIENDLY_PREFIX: &str = "Condition ";

/// One (option pin, condition pin) association, indexed by creation order.
pub type CasePinPair = (PinId, PinId);

/// Handle over a `MultiConditionalSelect` node living in a [`Graph`].
///
/// Pin structure, with N = number of case pairs:
///
/// ```text
/// 0:            Default     (In,  Wildcard)
/// 1 ..= N:      Option i    (In,  Wildcard)
/// N+1 ..= 2N:   Condition i (In,  Boolean)
/// 2N+1:         Return Value (Out, Wildcard)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MultiConditionalSelect {
    node: NodeId,
}

impl MultiConditionalSelect {
    /// Spawns the node into `graph` and allocates its default pin set.
    pub fn spawn(graph: &mut Graph) -> Self {
        let node = graph.spawn_node(NodeKind::MultiConditionalSelect);
        let this = Self { node };
        this.allocate_default_pins(graph);
        this
    }

    /// Wraps an existing node id. The caller guarantees the node kind.
    pub fn attach(node: NodeId) -> Self {
        Self { node }
    }

    pub fn node_id(&self) -> NodeId {
        self.node
    }

    /// Creates the default pin, the return-value pin, and the two initial
    /// case pairs. Called on spawn and again on reconstruction.
    pub fn allocate_default_pins(&self, graph: &mut Graph) {
        self.create_default_option_pin(graph);
        self.create_return_value_pin(graph);
        for index in 0..2 {
            self.add_case_pair(graph, index);
        }
    }

    fn create_default_option_pin(&self, graph: &mut Graph) -> PinId {
        graph.create_pin(
            self.node,
            PinDirection::Input,
            PinType::wildcard(),
            DEFAULT_OPTION_PIN_NAME,
            CreatePinParams {
                index: Some(0),
                ..Default::default()
            },
        )
    }

    fn create_return_value_pin(&self, graph: &mut Graph) -> PinId {
        let pair_count = self.case_pin_count(graph);
        graph.create_pin(
            self.node,
            PinDirection::Output,
            PinType::wildcard(),
            RETURN_VALUE_PIN_NAME,
            CreatePinParams {
                index: Some(2 * pair_count + 1),
                ..Default::default()
            },
        )
    }

    /// Adds one (option, condition) pin pair at `case_index`, keeping the
    /// option and condition blocks contiguous. The option pin picks up the
    /// current default pin's type, so pairs added after type fixation are
    /// already concrete; the condition pin is always Boolean.
    pub fn add_case_pair(&self, graph: &mut Graph, case_index: usize) -> CasePinPair {
        let pair_count = self.case_pin_count(graph);
        let option_type = match self.default_option_pin(graph) {
            Some(pin) => graph.pin(pin).pin_type,
            None => PinType::wildcard(),
        };

        let option = graph.create_pin(
            self.node,
            PinDirection::Input,
            option_type,
            case_pin_name(CASE_OPTION_PIN_NAME_PREFIX, case_index),
            CreatePinParams {
                index: Some(1 + case_index),
                friendly_name: Some(case_pin_name(OPTION_PIN_FRIENDLY_PREFIX, case_index)),
            },
        );
        let condition = graph.create_pin(
            self.node,
            PinDirection::Input,
            PinType::boolean(),
            case_pin_name(CASE_CONDITION_PIN_NAME_PREFIX, case_index),
            CreatePinParams {
                index: Some(pair_count + 2 + case_index),
                friendly_name: Some(case_pin_name(CONDITION_PIN_FRIENDLY_PREFIX, case_index)),
            },
        );

        (option, condition)
    }

    /// Removes the pair at `case_index` and renumbers trailing pairs so case
    /// indices stay dense. A node always keeps at least one pair.
    pub fn remove_case_pair(&self, graph: &mut Graph, case_index: usize) -> Result<(), GraphError> {
        let pair_count = self.case_pin_count(graph);
        if pair_count <= 1 {
            return Err(GraphError::CannotRemoveLastPair);
        }
        if case_index >= pair_count {
            return Err(GraphError::CaseIndexOutOfRange {
                case_index,
                pair_count,
            });
        }

        let (option, condition) =
            self.case_pin_pair(graph, case_index)
                .ok_or_else(|| GraphError::PinNotFound {
                    node_id: self.node,
                    pin_name: case_pin_name(CASE_OPTION_PIN_NAME_PREFIX, case_index),
                })?;
        graph.retire_pin(option);
        graph.retire_pin(condition);

        for index in (case_index + 1)..pair_count {
            if let Some((option, condition)) = self.case_pin_pair_by_name(graph, index) {
                rename_case_pin(
                    graph,
                    option,
                    CASE_OPTION_PIN_NAME_PREFIX,
                    OPTION_PIN_FRIENDLY_PREFIX,
                    index - 1,
                );
                rename_case_pin(
                    graph,
                    condition,
                    CASE_CONDITION_PIN_NAME_PREFIX,
                    CONDITION_PIN_FRIENDLY_PREFIX,
                    index - 1,
                );
            }
        }

        graph.mark_modified();
        Ok(())
    }

    pub fn default_option_pin(&self, graph: &Graph) -> Option<PinId> {
        graph.find_pin(self.node, DEFAULT_OPTION_PIN_NAME)
    }

    pub fn return_value_pin(&self, graph: &Graph) -> Option<PinId> {
        graph.find_pin(self.node, RETURN_VALUE_PIN_NAME)
    }

    /// The pair at `case_index`, read from the ordinal layout.
    pub fn case_pin_pair(&self, graph: &Graph, case_index: usize) -> Option<CasePinPair> {
        self.case_pin_pairs(graph).into_iter().nth(case_index)
    }

    fn case_pin_pair_by_name(&self, graph: &Graph, case_index: usize) -> Option<CasePinPair> {
        let option = graph.find_pin(
            self.node,
            &case_pin_name(CASE_OPTION_PIN_NAME_PREFIX, case_index),
        )?;
        let condition = graph.find_pin(
            self.node,
            &case_pin_name(CASE_CONDITION_PIN_NAME_PREFIX, case_index),
        )?;
        Some((option, condition))
    }

    /// All (option, condition) pairs in case-index order. The option and
    /// condition columns must have equal length; a ragged layout is a defect
    /// in pin-set management and fails fast.
    pub fn case_pin_pairs(&self, graph: &Graph) -> Vec<CasePinPair> {
        let options = self.pins_with_prefix(graph, CASE_OPTION_PIN_NAME_PREFIX);
        let conditions = self.pins_with_prefix(graph, CASE_CONDITION_PIN_NAME_PREFIX);
        options.into_iter().zip_eq(conditions).collect()
    }

    /// Number of case pairs, derived by counting option pins.
    pub fn case_pin_count(&self, graph: &Graph) -> usize {
        self.pins_with_prefix(graph, CASE_OPTION_PIN_NAME_PREFIX)
            .len()
    }

    pub fn is_option_pin(&self, graph: &Graph, pin: PinId) -> bool {
        self.case_index_with_prefix(graph, pin, CASE_OPTION_PIN_NAME_PREFIX)
            .is_some()
    }

    pub fn is_condition_pin(&self, graph: &Graph, pin: PinId) -> bool {
        self.case_index_with_prefix(graph, pin, CASE_CONDITION_PIN_NAME_PREFIX)
            .is_some()
    }

    /// Recovers the case index encoded in an option or condition pin name.
    pub fn case_index_from_pin(&self, graph: &Graph, pin: PinId) -> Option<usize> {
        self.case_index_with_prefix(graph, pin, CASE_OPTION_PIN_NAME_PREFIX)
            .or_else(|| self.case_index_with_prefix(graph, pin, CASE_CONDITION_PIN_NAME_PREFIX))
    }

    fn case_index_with_prefix(&self, graph: &Graph, pin: PinId, prefix: &str) -> Option<usize> {
        let pin = graph.pin(pin);
        if pin.node != self.node || !pin.is_input() {
            return None;
        }
        pin.name.strip_prefix(prefix)?.parse().ok()
    }

    fn pins_with_prefix(&self, graph: &Graph, prefix: &str) -> Vec<PinId> {
        graph
            .node_pins(self.node)
            .iter()
            .copied()
            .filter(|&pin| self.case_index_with_prefix(graph, pin, prefix).is_some())
            .collect()
    }
}

fn case_pin_name(prefix: &str, case_index: usize) -> String {
    format!("{}{}", prefix, case_index)
}

fn rename_case_pin(
    graph: &mut Graph,
    pin: PinId,
    name_prefix: &str,
    friendly_prefix: &str,
    case_index: usize,
) {
    let renamed = graph.pin_mut(pin);
    renamed.name = case_pin_name(name_prefix, case_index);
    renamed.friendly_name = Some(case_pin_name(friendly_prefix, case_index));
}
