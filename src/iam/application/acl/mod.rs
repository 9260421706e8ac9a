pub mod delegated_token_authority_impl;
pub mod direct_token_authority_impl;
pub mod token_gate_facade_impl;
