pub mod curso_page_resource;
pub mod curso_query_resource;
pub mod curso_request_resource;
pub mod curso_resource;
