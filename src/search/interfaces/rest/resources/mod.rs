pub mod autocomplete_response_resource;
pub mod search_query_resource;
pub mod search_response_resource;
