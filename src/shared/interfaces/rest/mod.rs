pub mod cors;
pub mod openapi;
pub mod resources;
