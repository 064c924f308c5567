//! Lowering of a Multi Conditional Select node into primitive pure nodes.
//!
//! Pure nodes cannot branch, so "first true condition wins" is rebuilt from
//! non-branching primitives:
//!
//! ```text
//! conditions ──► MakeArray ──► ArrayFind(true) ──┬──► Select-1st.Index
//! options ───────────────────────────────────────│──► Select-1st.Option i
//!                                                └──► IntEqual.A  (B = -1)
//!
//! Select-2nd.Option 0 ◄── Select-1st.Return Value     (some condition true)
//! Select-2nd.Option 1 ◄── Default                     (no condition true)
//! Select-2nd.Index    ◄── IntEqual.Return Value
//! ```
//!
//! ArrayFind returns the smallest index holding `true`, or the -1 sentinel.
//! Select-2nd overrides whatever Select-1st produces for the sentinel, so
//! Select-1st's out-of-range behaviour is unreachable-observable.

pub mod primitives;

pub use primitives::{ArrayFindNode, IntEqualNode, MakeArrayNode, SelectNode};

use crate::error::GraphError;
use crate::graph::{Graph, PinCategory, PinId, PinType};
use crate::node::{DEFAULT_OPTION_PIN_NAME, MultiConditionalSelect, RETURN_VALUE_PIN_NAME};
use log::debug;

/// Handles to the primitive subgraph produced by [`expand_node`].
#[derive(Debug, Clone, Copy)]
pub struct ExpandedSelect {
    pub select_1st: SelectNode,
    pub select_2nd: SelectNode,
    pub make_array: MakeArrayNode,
    pub array_find: ArrayFindNode,
    pub int_equal: IntEqualNode,
    /// Select-2nd's output; external consumers of the original node's result
    /// pin are reconnected here.
    pub result_pin: PinId,
}

/// Replaces `node` with an equivalent pure-expression subgraph and fully
/// disconnects it.
///
/// The outer pin set is validated before any link is touched; the remaining
/// fallible steps only read pins on the freshly spawned primitives, whose pin
/// sets are fixed. The original node is left inert in the graph.
pub fn expand_node(
    graph: &mut Graph,
    node: &MultiConditionalSelect,
) -> Result<ExpandedSelect, GraphError> {
    let pairs = node.case_pin_pairs(graph);
    let pin_not_found = |pin_name: &str| GraphError::PinNotFound {
        node_id: node.node_id(),
        pin_name: pin_name.to_string(),
    };

    let reference_option_pin = pairs
        .first()
        .map(|&(option, _)| option)
        .ok_or_else(|| pin_not_found("CaseOption0"))?;
    let default_option_pin = node
        .default_option_pin(graph)
        .ok_or_else(|| pin_not_found(DEFAULT_OPTION_PIN_NAME))?;
    let return_value_pin = node
        .return_value_pin(graph)
        .ok_or_else(|| pin_not_found(RETURN_VALUE_PIN_NAME))?;

    debug!(
        "expanding node {} with {} case pairs",
        node.node_id(),
        pairs.len()
    );

    let select_1st = SelectNode::spawn(graph, PinCategory::Integer);
    select_1st.change_pin_type(graph, reference_option_pin);
    for _ in 2..pairs.len() {
        select_1st.add_input_pin(graph);
    }

    // Two-way fallback multiplexer: false = Select-1st's output, true = the
    // default value.
    let select_2nd = SelectNode::spawn(graph, PinCategory::Boolean);
    select_2nd.change_pin_type(graph, reference_option_pin);

    let make_array = MakeArrayNode::spawn(graph);
    for _ in 1..pairs.len() {
        make_array.add_input_pin(graph);
    }

    let array_find = ArrayFindNode::spawn(graph);
    let int_equal = IntEqualNode::spawn(graph);

    let lookup = |name: &str, pin: Option<PinId>| pin.ok_or_else(|| pin_not_found(name));

    // Outer option pins feed Select-1st.
    let select_1st_options = select_1st.option_pins(graph);
    for (&(option_pin, _), &target) in pairs.iter().zip(&select_1st_options) {
        graph.move_pin_links(option_pin, target);
    }

    // Outer condition pins feed MakeArray as Boolean elements.
    let element_pins = make_array.input_pins(graph);
    for (&(_, condition_pin), &element) in pairs.iter().zip(&element_pins) {
        graph.set_pin_type(element, PinType::boolean());
        graph.move_pin_links(condition_pin, element);
    }

    // MakeArray feeds ArrayFind, searching for `true`.
    let array_pin = lookup("Array", make_array.output_pin(graph))?;
    let target_array_pin = lookup("Target Array", array_find.target_array_pin(graph))?;
    let item_to_find_pin = lookup("Item To Find", array_find.item_to_find_pin(graph))?;
    graph.set_pin_type(array_pin, PinType::array_of(PinCategory::Boolean));
    graph.set_pin_type(target_array_pin, PinType::array_of(PinCategory::Boolean));
    graph.set_pin_type(item_to_find_pin, PinType::boolean());
    graph.link(array_pin, target_array_pin);
    graph.try_set_default_value(item_to_find_pin, "true")?;

    // The found index drives Select-1st.
    let find_output_pin = lookup("Return Value", array_find.return_value_pin(graph))?;
    let select_1st_index_pin = lookup("Index", select_1st.index_pin(graph))?;
    graph.link(find_output_pin, select_1st_index_pin);

    // The found index is also compared against the -1 sentinel.
    let int_equal_a_pin = lookup("A", int_equal.a_pin(graph))?;
    let int_equal_b_pin = lookup("B", int_equal.b_pin(graph))?;
    graph.link(find_output_pin, int_equal_a_pin);
    graph.try_set_default_value(int_equal_b_pin, "-1")?;

    // "Was -1" selects between Select-1st's output and the default value.
    let select_2nd_options = select_2nd.option_pins(graph);
    let select_2nd_index_pin = lookup("Index", select_2nd.index_pin(graph))?;
    let int_equal_output_pin = lookup("Return Value", int_equal.return_value_pin(graph))?;
    let select_1st_output_pin = lookup("Return Value", select_1st.return_value_pin(graph))?;
    graph.link(int_equal_output_pin, select_2nd_index_pin);
    graph.link(select_1st_output_pin, select_2nd_options[0]);
    graph.move_pin_links(default_option_pin, select_2nd_options[1]);

    // External consumers of the original result pin move to Select-2nd.
    let result_pin = lookup("Return Value", select_2nd.return_value_pin(graph))?;
    graph.move_pin_links(return_value_pin, result_pin);

    graph.break_all_node_links(node.node_id());
    debug!(
        "node {} expanded into nodes {:?}",
        node.node_id(),
        [
            select_1st.node_id(),
            select_2nd.node_id(),
            make_array.node_id(),
            array_find.node_id(),
            int_equal.node_id()
        ]
    );

    Ok(ExpandedSelect {
        select_1st,
        select_2nd,
        make_array,
        array_find,
        int_equal,
        result_pin,
    })
}
