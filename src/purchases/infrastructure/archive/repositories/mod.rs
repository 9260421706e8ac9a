pub mod compra_archive_repository;
pub mod object_storage;
