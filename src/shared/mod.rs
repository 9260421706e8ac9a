pub mod domain;
pub mod interfaces;
