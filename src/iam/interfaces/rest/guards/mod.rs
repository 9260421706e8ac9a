pub mod token_gate_guard;
