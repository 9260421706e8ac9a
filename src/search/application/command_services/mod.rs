pub mod search_index_sync_service_impl;
