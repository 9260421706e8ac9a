pub mod curso_query_service_impl;
