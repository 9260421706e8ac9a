pub mod search_query_service_impl;
