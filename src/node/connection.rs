//! First-connection type unification and connection vetoes.

use super::MultiConditionalSelect;
use crate::error::ConnectionError;
use crate::graph::{Graph, PinId};
use log::debug;

impl MultiConditionalSelect {
    /// Reacts to a change in `pin`'s link list.
    ///
    /// The first link made to any non-condition input while the node is still
    /// wildcard-typed fixes the concrete type: it is propagated to the
    /// default pin, the return-value pin, and every option pin, and each
    /// retyped pin's literal default is reset to the type's canonical value.
    /// Once fixed, the type is immutable for the node's lifetime, so every
    /// later call short-circuits. Disconnections and condition pins are
    /// ignored entirely.
    pub fn pin_connection_list_changed(&self, graph: &mut Graph, pin: PinId) {
        if graph.pin(pin).links.is_empty() {
            // Ignore the disconnection event.
            return;
        }

        if self.is_condition_pin(graph, pin) {
            // Ignore condition pin connection.
            return;
        }

        let Some(default_pin) = self.default_option_pin(graph) else {
            return;
        };
        if !graph.pin(default_pin).pin_type.is_wildcard() {
            // Type already fixed.
            return;
        }

        let Some(&linked) = graph.pin(pin).links.first() else {
            return;
        };
        let linked_type = graph.pin(linked).pin_type;
        debug!(
            "node {}: fixing wildcard pins to {}",
            self.node_id(),
            linked_type
        );

        graph.set_pin_type(default_pin, linked_type);
        graph.reset_to_autogenerated_default(default_pin);

        if let Some(return_pin) = self.return_value_pin(graph) {
            graph.set_pin_type(return_pin, linked_type);
            graph.reset_to_autogenerated_default(return_pin);
        }

        for (option_pin, _) in self.case_pin_pairs(graph) {
            graph.set_pin_type(option_pin, linked_type);
            graph.reset_to_autogenerated_default(option_pin);
        }

        graph.mark_modified();
    }

    /// This node family is pure-expression-only: Exec pins may never connect
    /// to it. Any other attempt defers to the base schema rules, so an
    /// upstream rejection is preserved rather than overridden.
    pub fn connection_disallowed(
        &self,
        graph: &Graph,
        my_pin: PinId,
        other_pin: PinId,
    ) -> Option<ConnectionError> {
        if graph.pin(other_pin).pin_type.is_exec() {
            return Some(ConnectionError::ExecPin);
        }

        graph.schema_disallowed(my_pin, other_pin)
    }
}
