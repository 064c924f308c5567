use crate::error::EvaluationError;
use crate::expand::{ArrayFindNode, IntEqualNode, MakeArrayNode, SelectNode};
use crate::graph::{Graph, NodeId, NodeKind, PinDirection, PinId, Value};

/// The core recursive engine for evaluating a pin's expression DAG.
pub(super) struct PinEngine<'a> {
    graph: &'a Graph,
}

impl<'a> PinEngine<'a> {
    pub(super) fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    pub(super) fn evaluate(&self, pin: PinId) -> Result<Value, EvaluationError> {
        let p = self.graph.pin(pin);
        match p.direction {
            PinDirection::Input => match p.links.first() {
                Some(&source) => self.evaluate(source),
                None => Ok(p.default_value.clone()),
            },
            PinDirection::Output => self.evaluate_node_output(p.node),
        }
    }

    fn evaluate_node_output(&self, node: NodeId) -> Result<Value, EvaluationError> {
        match self.graph.node(node).kind {
            NodeKind::Select => self.eval_select(node),
            NodeKind::MakeArray => self.eval_make_array(node),
            NodeKind::ArrayFind => self.eval_array_find(node),
            NodeKind::IntEqual => self.eval_int_equal(node),
            NodeKind::Literal => {
                let pin = self
                    .graph
                    .node_pins(node)
                    .first()
                    .ok_or_else(|| Self::malformed(node, "Value"))?;
                Ok(self.graph.pin(*pin).default_value.clone())
            }
            NodeKind::MultiConditionalSelect => Err(EvaluationError::UnexpandedNode(node)),
        }
    }

    /// Evaluates the index, then only the chosen option.
    fn eval_select(&self, node: NodeId) -> Result<Value, EvaluationError> {
        let select = SelectNode::attach(node);
        let index_pin = select
            .index_pin(self.graph)
            .ok_or_else(|| Self::malformed(node, "Index"))?;
        let options = select.option_pins(self.graph);
        if options.is_empty() {
            return Err(Self::malformed(node, "Option 0"));
        }

        let index = match self.evaluate(index_pin)? {
            Value::Bool(b) => usize::from(b),
            // An out-of-range Integer index clamps. For an expanded node this
            // only happens with the -1 sentinel, and Select-2nd overrides
            // that case, so the clamp is unreachable-observable.
            Value::Int(i) => i.clamp(0, options.len() as i64 - 1) as usize,
            found => {
                return Err(EvaluationError::TypeMismatch {
                    operation: "Select".to_string(),
                    expected: "Integer or Boolean index".to_string(),
                    found,
                });
            }
        };
        self.evaluate(options[index])
    }

    fn eval_make_array(&self, node: NodeId) -> Result<Value, EvaluationError> {
        let make_array = MakeArrayNode::attach(node);
        let items = make_array
            .input_pins(self.graph)
            .into_iter()
            .map(|pin| self.evaluate(pin))
            .collect::<Result<Vec<Value>, _>>()?;
        Ok(Value::Array(items))
    }

    fn eval_array_find(&self, node: NodeId) -> Result<Value, EvaluationError> {
        let array_find = ArrayFindNode::attach(node);
        let target_pin = array_find
            .target_array_pin(self.graph)
            .ok_or_else(|| Self::malformed(node, "Target Array"))?;
        let item_pin = array_find
            .item_to_find_pin(self.graph)
            .ok_or_else(|| Self::malformed(node, "Item To Find"))?;

        let items = match self.evaluate(target_pin)? {
            Value::Array(items) => items,
            found => {
                return Err(EvaluationError::TypeMismatch {
                    operation: "Array Find".to_string(),
                    expected: "Array".to_string(),
                    found,
                });
            }
        };
        let item = self.evaluate(item_pin)?;

        let index = items
            .iter()
            .position(|candidate| *candidate == item)
            .map(|index| index as i64)
            .unwrap_or(-1);
        Ok(Value::Int(index))
    }

    fn eval_int_equal(&self, node: NodeId) -> Result<Value, EvaluationError> {
        let int_equal = IntEqualNode::attach(node);
        let a_pin = int_equal
            .a_pin(self.graph)
            .ok_or_else(|| Self::malformed(node, "A"))?;
        let b_pin = int_equal
            .b_pin(self.graph)
            .ok_or_else(|| Self::malformed(node, "B"))?;

        let a = self.require_int(a_pin)?;
        let b = self.require_int(b_pin)?;
        Ok(Value::Bool(a == b))
    }

    fn require_int(&self, pin: PinId) -> Result<i64, EvaluationError> {
        let value = self.evaluate(pin)?;
        value.as_int().ok_or_else(|| EvaluationError::TypeMismatch {
            operation: "Int Equal".to_string(),
            expected: "Integer".to_string(),
            found: value,
        })
    }

    fn malformed(node: NodeId, pin_name: &str) -> EvaluationError {
        EvaluationError::MalformedNode {
            node_id: node,
            pin_name: pin_name.to_string(),
        }
    }
}
