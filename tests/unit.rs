//! Tests for values, pin types, and error formatting.
mod common;
use common::*;
use sentaku::prelude::*;

#[test]
fn test_value_display() {
    init_logging();
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Int(-1).to_string(), "-1");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::Number(3.0).to_string(), "3");
    assert_eq!(Value::String("red".to_string()).to_string(), "red");
    assert_eq!(
        Value::Array(vec![Value::Bool(false), Value::Bool(true)]).to_string(),
        "[false, true]"
    );
    assert_eq!(Value::Null.to_string(), "null");
}

#[test]
fn test_autogenerated_defaults() {
    assert_eq!(Value::default_for(PinType::boolean()), Value::Bool(false));
    assert_eq!(Value::default_for(PinType::integer()), Value::Int(0));
    assert_eq!(
        Value::default_for(PinType::of(PinCategory::Number)),
        Value::Number(0.0)
    );
    assert_eq!(
        Value::default_for(PinType::of(PinCategory::String)),
        Value::String(String::new())
    );
    assert_eq!(Value::default_for(PinType::wildcard()), Value::Null);
    assert_eq!(
        Value::default_for(PinType::array_of(PinCategory::Boolean)),
        Value::Array(Vec::new())
    );
}

#[test]
fn test_parse_for_typed_literals() {
    assert_eq!(
        Value::parse_for(PinType::boolean(), "true"),
        Some(Value::Bool(true))
    );
    assert_eq!(
        Value::parse_for(PinType::integer(), "-1"),
        Some(Value::Int(-1))
    );
    assert_eq!(
        Value::parse_for(PinType::of(PinCategory::Number), "2.5"),
        Some(Value::Number(2.5))
    );
    // String pins take the raw text, even when it looks like another literal.
    assert_eq!(
        Value::parse_for(PinType::of(PinCategory::String), "true"),
        Some(Value::String("true".to_string()))
    );
}

#[test]
fn test_parse_for_rejects_bad_literals() {
    assert_eq!(Value::parse_for(PinType::boolean(), "yes"), None);
    assert_eq!(Value::parse_for(PinType::integer(), "2.5"), None);
    assert_eq!(Value::parse_for(PinType::wildcard(), "anything"), None);
    assert_eq!(
        Value::parse_for(PinType::array_of(PinCategory::Boolean), "[]"),
        None
    );
}

#[test]
fn test_pin_type_display() {
    assert_eq!(PinType::boolean().to_string(), "Boolean");
    assert_eq!(
        PinType::array_of(PinCategory::Boolean).to_string(),
        "Array of Boolean"
    );
    assert_eq!(PinType::wildcard().to_string(), "Wildcard");
}

#[test]
fn test_invalid_default_literal_is_rejected() {
    let mut graph = Graph::new();
    let pin = graph.add_literal(PinType::integer(), Value::Int(0));
    let result = graph.try_set_default_value(pin, "not a number");
    assert!(matches!(
        result,
        Err(GraphError::InvalidDefaultLiteral { .. })
    ));
    // The pin keeps its previous default.
    assert_eq!(graph.pin(pin).default_value, Value::Int(0));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConnectionError::ExecPin.to_string(),
        "Can't connect with Exec pin"
    );
    assert_eq!(
        ConnectionError::IncompatibleTypes {
            my_type: "Boolean".to_string(),
            other_type: "Integer".to_string(),
        }
        .to_string(),
        "A Boolean pin is not compatible with a Integer pin"
    );
    assert_eq!(
        GraphError::CaseIndexOutOfRange {
            case_index: 5,
            pair_count: 2,
        }
        .to_string(),
        "Case pair 5 is out of range for a node with 2 pairs"
    );
    assert_eq!(
        EvaluationError::UnexpandedNode(3).to_string(),
        "Node 3 is a Multi Conditional Select and must be expanded before evaluation"
    );
}
