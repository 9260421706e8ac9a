pub mod rest;
pub mod stream;
