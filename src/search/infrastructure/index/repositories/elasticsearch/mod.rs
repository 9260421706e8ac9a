pub mod http_search_index_repository_impl;
