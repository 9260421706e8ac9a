pub mod elasticsearch;
pub mod search_index_repository;
