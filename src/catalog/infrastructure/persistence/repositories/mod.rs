pub mod curso_repository;
pub mod postgres;
