// src/circuit/mod.rs

//! The player's gate sequence.
//!
//! A `Circuit` is an ordered list of gates with a hard slot capacity fixed at
//! construction (four slots on easy/hard sessions, six on expert). Capacity
//! is the only back-pressure in the core: appending to a full circuit and
//! removing at a bad index are silent no-ops, never errors. The circuit is
//! owned exclusively by the session that holds it.

use crate::core::state::QubitState;
use crate::gates::Gate;
use std::fmt;

/// Ordered, capacity-bounded sequence of gates.
#[derive(Clone, PartialEq)] // PartialEq useful for testing circuits
pub struct Circuit {
    /// The ordered gate list; `gates.len() <= max_gates` at all times.
    gates: Vec<Gate>,
    /// Slot capacity, immutable after construction.
    max_gates: usize,
}

impl Circuit {
    /// Creates an empty circuit with the given slot capacity.
    pub fn new(max_gates: usize) -> Self {
        Self {
            gates: Vec::with_capacity(max_gates),
            max_gates,
        }
    }

    /// Appends a gate. Returns `true` on success, `false` when the circuit
    /// is already full (the circuit is left unchanged).
    pub fn add_gate(&mut self, gate: Gate) -> bool {
        if self.gates.len() < self.max_gates {
            self.gates.push(gate);
            true
        } else {
            false
        }
    }

    /// Removes the gate at `index`; out-of-range indices are ignored.
    pub fn remove_gate(&mut self, index: usize) {
        if index < self.gates.len() {
            self.gates.remove(index);
        }
    }

    /// Removes the most recently added gate, if any.
    pub fn remove_last_gate(&mut self) {
        self.gates.pop();
    }

    /// Empties the circuit.
    pub fn clear(&mut self) {
        self.gates.clear();
    }

    /// Folds the whole gate list onto `initial`, returning the resulting
    /// state. Does not mutate the circuit.
    pub fn apply(&self, initial: &QubitState) -> QubitState {
        initial.applying(&self.gates)
    }

    /// The N+1 states reached after applying 0, 1, …, N gates. The display
    /// animates these; judging only ever looks at the final state.
    pub fn intermediate_states(&self, initial: &QubitState) -> Vec<QubitState> {
        let mut states = Vec::with_capacity(self.gates.len() + 1);
        let mut current = *initial;
        states.push(current);
        for gate in &self.gates {
            current = gate.apply(&current);
            states.push(current);
        }
        states
    }

    /// Returns a slice containing the ordered gate sequence.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of gates currently placed.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Slot capacity fixed at construction.
    pub fn max_gates(&self) -> usize {
        self.max_gates
    }

    /// Returns `true` if no gates are placed.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Returns `true` if every slot is filled.
    pub fn is_full(&self) -> bool {
        self.gates.len() >= self.max_gates
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const GATE_WIDTH: usize = 7; // e.g. "───H───"
        const H_WIRE: char = '─';

        // Center a symbol within a wire segment of GATE_WIDTH characters.
        fn format_slot(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre = total_dashes / 2;
                let post = total_dashes - pre;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre),
                    symbol,
                    H_WIRE.to_string().repeat(post)
                )
            }
        }

        write!(f, "|ψ⟩: ")?;
        for gate in &self.gates {
            write!(f, "{}", format_slot(gate.symbol()))?;
        }
        for _ in self.gates.len()..self.max_gates {
            write!(f, "{}", format_slot("·"))?; // open slot
        }
        write!(f, " [{}/{}]", self.gates.len(), self.max_gates)
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_a_hard_ceiling() {
        let mut circuit = Circuit::new(2);
        assert!(circuit.add_gate(Gate::H));
        assert!(circuit.add_gate(Gate::T));
        assert!(circuit.is_full());

        let before = circuit.gates().to_vec();
        assert!(!circuit.add_gate(Gate::X), "third add must be rejected");
        assert_eq!(circuit.gates(), &before[..], "rejected add must not mutate");
    }

    #[test]
    fn out_of_range_removal_is_ignored() {
        let mut circuit = Circuit::new(4);
        circuit.add_gate(Gate::Z);
        circuit.remove_gate(5);
        assert_eq!(circuit.gate_count(), 1);
        circuit.remove_gate(0);
        assert!(circuit.is_empty());
        circuit.remove_last_gate(); // empty: no-op
        assert!(circuit.is_empty());
    }

    #[test]
    fn intermediate_states_cover_every_prefix() {
        let mut circuit = Circuit::new(4);
        circuit.add_gate(Gate::H);
        circuit.add_gate(Gate::Z);

        let states = circuit.intermediate_states(&QubitState::zero());
        assert_eq!(states.len(), 3);
        assert!(states[0].fidelity(&QubitState::zero()) > 1.0 - 1e-9);
        assert!(states[1].fidelity(&QubitState::plus()) > 1.0 - 1e-9);
        assert!(states[2].fidelity(&QubitState::minus()) > 1.0 - 1e-9);
        // apply() agrees with the last intermediate state
        assert!(circuit.apply(&QubitState::zero()).fidelity(&states[2]) > 1.0 - 1e-9);
    }
}
