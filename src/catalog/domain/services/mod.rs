pub mod curso_command_service;
pub mod curso_query_service;
