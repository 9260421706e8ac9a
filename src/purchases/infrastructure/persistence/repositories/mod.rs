pub mod compra_repository;
pub mod postgres;
