pub mod compra_archive_service;
pub mod compra_command_service;
pub mod compra_query_service;
