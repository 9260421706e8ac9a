pub mod archive;
pub mod persistence;
