pub mod compra_archive_service_impl;
pub mod compra_command_service_impl;
