//! Common test utilities for building select nodes and driving their pins.
use sentaku::prelude::*;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a Multi Conditional Select with one case pair per option, typed to
/// String by linking a literal source to the default pin, with every option
/// and condition driven through its pin default.
#[allow(dead_code)]
pub fn build_string_select(
    graph: &mut Graph,
    options: &[&str],
    conditions: &[bool],
    default: &str,
) -> MultiConditionalSelect {
    init_logging();
    assert_eq!(options.len(), conditions.len());
    assert!(!options.is_empty());

    let node = MultiConditionalSelect::spawn(graph);
    match options.len() {
        1 => node.remove_case_pair(graph, 1).expect("shrink to one pair"),
        count => {
            for index in 2..count {
                node.add_case_pair(graph, index);
            }
        }
    }

    let source = graph.add_literal(
        PinType::of(PinCategory::String),
        Value::String(default.to_string()),
    );
    let default_pin = node.default_option_pin(graph).expect("default pin");
    graph
        .try_create_link(source, default_pin)
        .expect("default link fixes the type");

    for (index, (option, condition)) in node.case_pin_pairs(graph).into_iter().enumerate() {
        graph
            .try_set_default_value(option, options[index])
            .expect("option literal");
        let literal = if conditions[index] { "true" } else { "false" };
        graph
            .try_set_default_value(condition, literal)
            .expect("condition literal");
    }

    node
}

/// Expands the node and evaluates the result pin of the produced subgraph.
#[allow(dead_code)]
pub fn evaluate_expanded(graph: &mut Graph, node: &MultiConditionalSelect) -> Value {
    let expanded = expand_node(graph, node).expect("expansion");
    Evaluator::new(graph)
        .eval_pin(expanded.result_pin)
        .expect("evaluation")
}

/// Links an Integer literal source to the node's first option pin, fixing the
/// node's type to Integer.
#[allow(dead_code)]
pub fn fix_type_to_integer(graph: &mut Graph, node: &MultiConditionalSelect) -> PinId {
    let source = graph.add_literal(PinType::integer(), Value::Int(0));
    let (option, _) = node.case_pin_pair(graph, 0).expect("pair 0");
    graph
        .try_create_link(source, option)
        .expect("integer link fixes the type");
    source
}
