pub mod controllers;
pub mod guards;
pub mod resources;
