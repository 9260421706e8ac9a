pub mod assemblers;
