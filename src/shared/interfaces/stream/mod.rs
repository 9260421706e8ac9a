pub mod assemblers;
pub mod resources;
