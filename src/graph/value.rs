use super::pin::{PinCategory, PinContainer, PinType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal values carried by pin defaults and produced by evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Null,
}

impl Value {
    /// The autogenerated default a pin falls back to when its type changes.
    pub fn default_for(pin_type: PinType) -> Self {
        if pin_type.container == PinContainer::Array {
            return Value::Array(Vec::new());
        }
        match pin_type.category {
            PinCategory::Boolean => Value::Bool(false),
            PinCategory::Integer => Value::Int(0),
            PinCategory::Number => Value::Number(0.0),
            PinCategory::String => Value::String(String::new()),
            PinCategory::Wildcard | PinCategory::Exec => Value::Null,
        }
    }

    /// Parses a string literal the way the host sets pin defaults ("true",
    /// "-1"). String pins take the raw text; other categories parse as JSON.
    pub fn parse_for(pin_type: PinType, text: &str) -> Option<Self> {
        if pin_type.container == PinContainer::Array {
            return None;
        }
        if pin_type.category == PinCategory::String {
            return Some(Value::String(text.to_string()));
        }
        let json: serde_json::Value = serde_json::from_str(text).ok()?;
        match pin_type.category {
            PinCategory::Boolean => json.as_bool().map(Value::Bool),
            PinCategory::Integer => json.as_i64().map(Value::Int),
            PinCategory::Number => json.as_f64().map(Value::Number),
            PinCategory::String | PinCategory::Wildcard | PinCategory::Exec => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "{}", s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Null => write!(f, "null"),
        }
    }
}
