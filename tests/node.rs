//! Tests for the dynamic pin set, type unification and connection vetoes.
mod common;
use common::*;
use sentaku::node::{
    CASE_CONDITION_PIN_NAME_PREFIX, CASE_OPTION_PIN_NAME_PREFIX, DEFAULT_OPTION_PIN_NAME,
    RETURN_VALUE_PIN_NAME,
};
use sentaku::prelude::*;

fn pin_names(graph: &Graph, node: NodeId) -> Vec<String> {
    graph
        .node_pins(node)
        .iter()
        .map(|&pin| graph.pin(pin).name.clone())
        .collect()
}

#[test]
fn test_default_pin_layout() {
    init_logging();
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);

    assert_eq!(
        pin_names(&graph, node.node_id()),
        vec![
            "Default",
            "CaseOption0",
            "CaseOption1",
            "CaseCondition0",
            "CaseCondition1",
            "Return Value"
        ]
    );

    let default_pin = node.default_option_pin(&graph).unwrap();
    assert!(graph.pin(default_pin).is_input());
    assert!(graph.pin(default_pin).pin_type.is_wildcard());

    let return_pin = node.return_value_pin(&graph).unwrap();
    assert!(graph.pin(return_pin).is_output());
    assert!(graph.pin(return_pin).pin_type.is_wildcard());

    for (option, condition) in node.case_pin_pairs(&graph) {
        assert!(graph.pin(option).pin_type.is_wildcard());
        assert_eq!(graph.pin(condition).pin_type, PinType::boolean());
    }
    assert_eq!(node.case_pin_count(&graph), 2);
}

#[test]
fn test_friendly_labels_include_case_index() {
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);

    let (option, condition) = node.case_pin_pair(&graph, 1).unwrap();
    assert_eq!(graph.pin(option).friendly_name.as_deref(), Some("Option 1"));
    assert_eq!(
        graph.pin(condition).friendly_name.as_deref(),
        Some("Condition 1")
    );
}

#[test]
fn test_add_case_pair_keeps_layout() {
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);
    node.add_case_pair(&mut graph, 2);

    assert_eq!(
        pin_names(&graph, node.node_id()),
        vec![
            "Default",
            "CaseOption0",
            "CaseOption1",
            "CaseOption2",
            "CaseCondition0",
            "CaseCondition1",
            "CaseCondition2",
            "Return Value"
        ]
    );
    assert_eq!(node.case_pin_count(&graph), 3);
}

#[test]
fn test_case_index_from_pin() {
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);

    let (option, condition) = node.case_pin_pair(&graph, 1).unwrap();
    assert_eq!(node.case_index_from_pin(&graph, option), Some(1));
    assert_eq!(node.case_index_from_pin(&graph, condition), Some(1));
    assert!(node.is_option_pin(&graph, option));
    assert!(node.is_condition_pin(&graph, condition));

    let default_pin = node.default_option_pin(&graph).unwrap();
    assert_eq!(node.case_index_from_pin(&graph, default_pin), None);
}

#[test]
fn test_unification_fixes_all_wildcard_pins() {
    init_logging();
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);
    fix_type_to_integer(&mut graph, &node);

    let default_pin = node.default_option_pin(&graph).unwrap();
    assert_eq!(graph.pin(default_pin).pin_type, PinType::integer());
    assert_eq!(graph.pin(default_pin).default_value, Value::Int(0));

    let return_pin = node.return_value_pin(&graph).unwrap();
    assert_eq!(graph.pin(return_pin).pin_type, PinType::integer());

    for (option, condition) in node.case_pin_pairs(&graph) {
        assert_eq!(graph.pin(option).pin_type, PinType::integer());
        // Condition pins never participate in unification.
        assert_eq!(graph.pin(condition).pin_type, PinType::boolean());
    }
}

#[test]
fn test_unification_marks_document_modified() {
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);
    let before = graph.revision();
    fix_type_to_integer(&mut graph, &node);
    assert!(graph.revision() > before);
}

#[test]
fn test_fixed_type_is_immutable() {
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);
    fix_type_to_integer(&mut graph, &node);

    // A different concrete type is rejected outright by the schema.
    let number_source = graph.add_literal(PinType::of(PinCategory::Number), Value::Number(1.0));
    let (option_1, _) = node.case_pin_pair(&graph, 1).unwrap();
    let result = graph.try_create_link(number_source, option_1);
    assert!(matches!(
        result,
        Err(ConnectionError::IncompatibleTypes { .. })
    ));

    // A same-typed second connection is fine and changes nothing.
    let int_source = graph.add_literal(PinType::integer(), Value::Int(7));
    graph.try_create_link(int_source, option_1).unwrap();

    let default_pin = node.default_option_pin(&graph).unwrap();
    assert_eq!(graph.pin(default_pin).pin_type, PinType::integer());
}

#[test]
fn test_condition_connection_does_not_unify() {
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);

    let bool_source = graph.add_literal(PinType::boolean(), Value::Bool(true));
    let (_, condition) = node.case_pin_pair(&graph, 0).unwrap();
    graph.try_create_link(bool_source, condition).unwrap();

    let default_pin = node.default_option_pin(&graph).unwrap();
    assert!(graph.pin(default_pin).pin_type.is_wildcard());
}

#[test]
fn test_disconnection_event_is_ignored() {
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);

    // An unlinked pin reports a (dis)connection; nothing should change.
    let (option, _) = node.case_pin_pair(&graph, 0).unwrap();
    node.pin_connection_list_changed(&mut graph, option);

    let default_pin = node.default_option_pin(&graph).unwrap();
    assert!(graph.pin(default_pin).pin_type.is_wildcard());
}

#[test]
fn test_pair_added_after_fixation_is_typed() {
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);
    fix_type_to_integer(&mut graph, &node);

    let (option, condition) = node.add_case_pair(&mut graph, 2);
    assert_eq!(graph.pin(option).pin_type, PinType::integer());
    assert_eq!(graph.pin(condition).pin_type, PinType::boolean());
}

#[test]
fn test_remove_case_pair_renumbers_trailing_pairs() {
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);
    node.add_case_pair(&mut graph, 2);

    node.remove_case_pair(&mut graph, 1).unwrap();

    assert_eq!(node.case_pin_count(&graph), 2);
    assert_eq!(
        pin_names(&graph, node.node_id()),
        vec![
            "Default",
            "CaseOption0",
            "CaseOption1",
            "CaseCondition0",
            "CaseCondition1",
            "Return Value"
        ]
    );
    let (option, _) = node.case_pin_pair(&graph, 1).unwrap();
    assert_eq!(graph.pin(option).friendly_name.as_deref(), Some("Option 1"));
}

#[test]
fn test_remove_case_pair_keeps_at_least_one_pair() {
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);

    node.remove_case_pair(&mut graph, 1).unwrap();
    let result = node.remove_case_pair(&mut graph, 0);
    assert!(matches!(result, Err(GraphError::CannotRemoveLastPair)));

    let result = node.remove_case_pair(&mut graph, 5);
    assert!(matches!(result, Err(GraphError::CannotRemoveLastPair)));
}

#[test]
fn test_remove_case_pair_rejects_out_of_range_index() {
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);

    let result = node.remove_case_pair(&mut graph, 2);
    assert!(matches!(
        result,
        Err(GraphError::CaseIndexOutOfRange {
            case_index: 2,
            pair_count: 2
        })
    ));
}

#[test]
fn test_exec_connection_is_rejected_without_state_change() {
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);

    let exec_source = graph.add_literal(PinType::of(PinCategory::Exec), Value::Null);
    let (option, _) = node.case_pin_pair(&graph, 0).unwrap();

    let names_before = pin_names(&graph, node.node_id());
    let result = graph.try_create_link(exec_source, option);

    let error = result.unwrap_err();
    assert_eq!(error, ConnectionError::ExecPin);
    assert!(!error.to_string().is_empty());

    assert!(graph.pin(option).links.is_empty());
    assert!(graph.pin(exec_source).links.is_empty());
    assert_eq!(pin_names(&graph, node.node_id()), names_before);
}

#[test]
fn test_schema_rejections_are_preserved() {
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);

    // Two pins of the same node.
    let default_pin = node.default_option_pin(&graph).unwrap();
    let (option, _) = node.case_pin_pair(&graph, 0).unwrap();
    assert_eq!(
        graph.connection_disallowed(default_pin, option),
        Some(ConnectionError::SameNode)
    );

    // Two input pins of different nodes.
    let other = MultiConditionalSelect::spawn(&mut graph);
    let other_default = other.default_option_pin(&graph).unwrap();
    assert_eq!(
        graph.connection_disallowed(default_pin, other_default),
        Some(ConnectionError::SameDirection(PinDirection::Input))
    );
}

#[test]
fn test_reconstruction_preserves_types_and_links() {
    init_logging();
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);
    node.add_case_pair(&mut graph, 2);
    let source = fix_type_to_integer(&mut graph, &node);

    let snapshot = PinTypeSnapshot::capture(&graph, node.node_id());
    node.reallocate_pins_during_reconstruction(&mut graph);

    assert_eq!(node.case_pin_count(&graph), 3);
    let default_pin = node.default_option_pin(&graph).unwrap();
    let return_pin = node.return_value_pin(&graph).unwrap();
    assert_eq!(graph.pin(default_pin).pin_type, PinType::integer());
    assert_eq!(graph.pin(return_pin).pin_type, PinType::integer());
    for (option, condition) in node.case_pin_pairs(&graph) {
        assert_eq!(graph.pin(option).pin_type, PinType::integer());
        assert_eq!(graph.pin(condition).pin_type, PinType::boolean());
    }

    // The pre-reconstruction snapshot agrees with the rebuilt pin set.
    assert_eq!(
        snapshot.pin_type(DEFAULT_OPTION_PIN_NAME),
        Some(PinType::integer())
    );
    assert_eq!(
        snapshot.pin_type(RETURN_VALUE_PIN_NAME),
        Some(PinType::integer())
    );
    assert_eq!(
        snapshot.pin_type(&format!("{}0", CASE_CONDITION_PIN_NAME_PREFIX)),
        Some(PinType::boolean())
    );

    // The external link migrated onto the fresh option pin of the same name.
    let (option_0, _) = node.case_pin_pair(&graph, 0).unwrap();
    assert_eq!(graph.pin(option_0).links, vec![source]);
    assert!(graph.pin(source).links.contains(&option_0));
}

#[test]
fn test_snapshot_json_round_trip() {
    let mut graph = Graph::new();
    let node = MultiConditionalSelect::spawn(&mut graph);
    fix_type_to_integer(&mut graph, &node);

    let snapshot = PinTypeSnapshot::capture(&graph, node.node_id());
    let json = snapshot.to_json().unwrap();
    let restored = PinTypeSnapshot::from_json(&json).unwrap();

    assert_eq!(
        restored.pin_type(DEFAULT_OPTION_PIN_NAME),
        Some(PinType::integer())
    );
    assert_eq!(
        restored.pin_type(&format!("{}1", CASE_OPTION_PIN_NAME_PREFIX)),
        Some(PinType::integer())
    );
}
