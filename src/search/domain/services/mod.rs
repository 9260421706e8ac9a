pub mod search_index_sync_service;
pub mod search_query_service;
