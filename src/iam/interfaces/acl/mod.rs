pub mod token_authority;
pub mod token_gate_facade;
